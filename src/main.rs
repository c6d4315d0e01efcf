use fltk::app;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

use code_pilot::app::{AppState, EditorConfig, Flow, Message};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(level)
        .init();
}

fn main() {
    init_logging();
    info!("Starting Code Pilot v{}", env!("CARGO_PKG_VERSION"));

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut state = AppState::new(sender, EditorConfig::default());
    state.open_window();

    'events: while app.wait() {
        while let Some(msg) = receiver.recv() {
            if state.handle(msg) == Flow::Exit {
                break 'events;
            }
        }
    }

    info!("Code Pilot exiting");
}
