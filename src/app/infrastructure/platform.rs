use tracing::{info, warn};

use super::error::{AppError, Result};

/// Open `url` in the system's default browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    match open::that(url) {
        Ok(()) => {
            info!(url, "opened help page");
            Ok(())
        }
        Err(e) => {
            warn!(url, error = %e, "failed to open browser");
            Err(AppError::Browser(e.to_string()))
        }
    }
}
