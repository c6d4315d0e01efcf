//! Scroll mirroring between the Buffer View and the line-number gutter.
//!
//! Both surfaces are addressed by fractional offset. A `ScrollLink` remembers
//! where each surface was left after the last mirror so it can tell which
//! one moved, and pushes that surface's offset onto the other. Only one
//! direction is applied per sync, and a mirror requested while another is
//! being applied is dropped.

use std::cell::Cell;

use tracing::trace;

use crate::app::domain::ScrollSurface;

/// Offsets closer than this are treated as the same position.
pub const SCROLL_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    Buffer,
    Gutter,
}

#[derive(Debug, Default)]
pub struct ScrollLink {
    buffer_at: Cell<f64>,
    gutter_at: Cell<f64>,
    propagating: Cell<bool>,
}

impl ScrollLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `position`, read from `source`, to `target`.
    ///
    /// Returns false without touching `target` if a mirror is already in
    /// progress on this link.
    pub fn mirror<T>(&self, source: ScrollSource, position: f64, target: &mut T) -> bool
    where
        T: ScrollSurface + ?Sized,
    {
        if self.propagating.replace(true) {
            trace!(?source, position, "scroll mirror suppressed while propagating");
            return false;
        }

        let position = clamp_fraction(position);
        target.scroll_to_fraction(position);
        let landed = target.scroll_fraction();
        match source {
            ScrollSource::Buffer => {
                self.buffer_at.set(position);
                self.gutter_at.set(landed);
            }
            ScrollSource::Gutter => {
                self.gutter_at.set(position);
                self.buffer_at.set(landed);
            }
        }
        trace!(?source, position, landed, "scroll mirrored");

        self.propagating.set(false);
        true
    }

    /// Detect which surface moved since the last mirror and push its offset
    /// onto the other. The Buffer View wins when both moved.
    pub fn sync<B, G>(&self, buffer: &mut B, gutter: &mut G) -> Option<ScrollSource>
    where
        B: ScrollSurface + ?Sized,
        G: ScrollSurface + ?Sized,
    {
        let buffer_now = buffer.scroll_fraction();
        if moved(buffer_now, self.buffer_at.get()) {
            return self
                .mirror(ScrollSource::Buffer, buffer_now, gutter)
                .then_some(ScrollSource::Buffer);
        }

        let gutter_now = gutter.scroll_fraction();
        if moved(gutter_now, self.gutter_at.get()) {
            return self
                .mirror(ScrollSource::Gutter, gutter_now, buffer)
                .then_some(ScrollSource::Gutter);
        }

        None
    }
}

fn moved(now: f64, before: f64) -> bool {
    (now - before).abs() > SCROLL_EPSILON
}

pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Fraction of a `total_lines` document above 0-based `top_line`.
pub fn fraction_for_top_line(top_line: usize, total_lines: usize) -> f64 {
    let total = total_lines.max(1);
    top_line.min(total - 1) as f64 / total as f64
}

/// 0-based top line that puts `fraction` of the document above the view.
pub fn top_line_for_fraction(fraction: f64, total_lines: usize) -> usize {
    let total = total_lines.max(1);
    let line = (clamp_fraction(fraction) * total as f64).round() as usize;
    line.min(total - 1)
}

/// Find the first visible line of a view showing a contiguous run of lines.
///
/// `is_visible` answers for a single 0-based line. `visible_rows` must not
/// exceed the number of rows the view can show, and `hint` is where the top
/// was last seen.
pub fn locate_top_line<F>(
    total_lines: usize,
    visible_rows: usize,
    hint: usize,
    mut is_visible: F,
) -> usize
where
    F: FnMut(usize) -> bool,
{
    let total = total_lines.max(1);
    let step = visible_rows.max(1);
    let hint = hint.min(total - 1);

    let found = if is_visible(hint) {
        Some(hint)
    } else {
        let mut found = None;
        let mut reach = step;
        loop {
            let below = hint.checked_add(reach).filter(|&l| l < total);
            let above = hint.checked_sub(reach);
            if below.is_none() && above.is_none() {
                break;
            }
            if let Some(line) = below.filter(|&l| is_visible(l)) {
                found = Some(line);
                break;
            }
            if let Some(line) = above.filter(|&l| is_visible(l)) {
                found = Some(line);
                break;
            }
            reach += step;
        }
        found.or_else(|| (0..total).find(|&l| is_visible(l)))
    };

    let Some(mut hi) = found else {
        return 0;
    };

    let mut lo = loop {
        if hi == 0 {
            return 0;
        }
        let candidate = hi.saturating_sub(step);
        if is_visible(candidate) {
            hi = candidate;
        } else {
            break candidate;
        }
    };

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if is_visible(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// A surface with `total` lines that snaps to whole lines like a widget.
    struct Lines {
        total: usize,
        top: usize,
        sets: usize,
    }

    impl Lines {
        fn new(total: usize) -> Self {
            Self { total, top: 0, sets: 0 }
        }
    }

    impl ScrollSurface for Lines {
        fn scroll_fraction(&mut self) -> f64 {
            fraction_for_top_line(self.top, self.total)
        }

        fn scroll_to_fraction(&mut self, fraction: f64) {
            self.sets += 1;
            self.top = top_line_for_fraction(fraction, self.total);
        }
    }

    #[test]
    fn test_buffer_scroll_reaches_gutter() {
        let link = ScrollLink::new();
        let mut buffer = Lines::new(200);
        let mut gutter = Lines::new(200);

        buffer.top = 50;
        assert_eq!(link.sync(&mut buffer, &mut gutter), Some(ScrollSource::Buffer));
        assert_eq!(gutter.top, 50);
        assert!((gutter.scroll_fraction() - buffer.scroll_fraction()).abs() < SCROLL_EPSILON);
    }

    #[test]
    fn test_gutter_scroll_reaches_buffer() {
        let link = ScrollLink::new();
        let mut buffer = Lines::new(80);
        let mut gutter = Lines::new(80);

        gutter.top = 20;
        assert_eq!(link.sync(&mut buffer, &mut gutter), Some(ScrollSource::Gutter));
        assert_eq!(buffer.top, 20);
    }

    #[test]
    fn test_settled_surfaces_do_not_ping_pong() {
        let link = ScrollLink::new();
        let mut buffer = Lines::new(100);
        let mut gutter = Lines::new(100);

        buffer.top = 30;
        link.sync(&mut buffer, &mut gutter);
        let sets = (buffer.sets, gutter.sets);

        for _ in 0..5 {
            assert_eq!(link.sync(&mut buffer, &mut gutter), None);
        }
        assert_eq!((buffer.sets, gutter.sets), sets);
        assert_eq!(buffer.sets, 0);
    }

    #[test]
    fn test_buffer_wins_when_both_moved() {
        let link = ScrollLink::new();
        let mut buffer = Lines::new(100);
        let mut gutter = Lines::new(100);

        buffer.top = 10;
        gutter.top = 60;
        assert_eq!(link.sync(&mut buffer, &mut gutter), Some(ScrollSource::Buffer));
        assert_eq!(gutter.top, 10);
        assert_eq!(buffer.sets, 0);
    }

    /// Mirrors every scroll it receives back through the shared link, the
    /// way a widget scroll handler would.
    struct Echoing {
        link: Rc<ScrollLink>,
        inner: Lines,
        echo_accepted: Option<bool>,
        other: Lines,
    }

    impl ScrollSurface for Echoing {
        fn scroll_fraction(&mut self) -> f64 {
            self.inner.scroll_fraction()
        }

        fn scroll_to_fraction(&mut self, fraction: f64) {
            self.inner.scroll_to_fraction(fraction);
            let here = self.inner.scroll_fraction();
            let accepted = self.link.mirror(ScrollSource::Gutter, here, &mut self.other);
            self.echo_accepted = Some(accepted);
        }
    }

    #[test]
    fn test_mirror_does_not_reenter() {
        let link = Rc::new(ScrollLink::new());
        let mut target = Echoing {
            link: link.clone(),
            inner: Lines::new(40),
            echo_accepted: None,
            other: Lines::new(40),
        };

        assert!(link.mirror(ScrollSource::Buffer, 0.5, &mut target));
        assert_eq!(target.echo_accepted, Some(false));
        assert_eq!(target.other.sets, 0);
        assert_eq!(target.inner.top, 20);

        // The guard is released once the outer mirror returns.
        let mut plain = Lines::new(40);
        assert!(link.mirror(ScrollSource::Gutter, 0.25, &mut plain));
        assert_eq!(plain.top, 10);
    }

    #[test]
    fn test_mirror_clamps_out_of_range_positions() {
        let link = ScrollLink::new();
        let mut target = Lines::new(10);
        link.mirror(ScrollSource::Buffer, 3.5, &mut target);
        assert_eq!(target.top, 9);
        link.mirror(ScrollSource::Buffer, -1.0, &mut target);
        assert_eq!(target.top, 0);
        link.mirror(ScrollSource::Buffer, f64::NAN, &mut target);
        assert_eq!(target.top, 0);
    }

    #[test]
    fn test_fraction_conversions() {
        assert_eq!(fraction_for_top_line(0, 0), 0.0);
        assert_eq!(fraction_for_top_line(25, 100), 0.25);
        assert_eq!(fraction_for_top_line(500, 100), 0.99);
        assert_eq!(top_line_for_fraction(0.25, 100), 25);
        assert_eq!(top_line_for_fraction(1.0, 100), 99);
        assert_eq!(top_line_for_fraction(0.5, 1), 0);
        for top in [0, 1, 17, 63, 99] {
            assert_eq!(top_line_for_fraction(fraction_for_top_line(top, 100), 100), top);
        }
    }

    fn view(top: usize, rows: usize, total: usize) -> impl Fn(usize) -> bool {
        move |line| line >= top && line < (top + rows).min(total)
    }

    #[test]
    fn test_locate_top_line_from_exact_hint() {
        assert_eq!(locate_top_line(1000, 30, 120, view(120, 30, 1000)), 120);
    }

    #[test]
    fn test_locate_top_line_after_wheel_scroll() {
        assert_eq!(locate_top_line(1000, 30, 120, view(123, 30, 1000)), 123);
        assert_eq!(locate_top_line(1000, 30, 120, view(117, 30, 1000)), 117);
    }

    #[test]
    fn test_locate_top_line_after_jump() {
        assert_eq!(locate_top_line(1000, 30, 0, view(940, 40, 1000)), 940);
        assert_eq!(locate_top_line(1000, 30, 900, view(0, 40, 1000)), 0);
    }

    #[test]
    fn test_locate_top_line_short_tail() {
        // Only the last two lines are on screen.
        assert_eq!(locate_top_line(500, 25, 0, view(498, 25, 500)), 498);
    }

    #[test]
    fn test_locate_top_line_with_underestimated_rows() {
        assert_eq!(locate_top_line(1000, 5, 300, view(250, 60, 1000)), 250);
    }

    #[test]
    fn test_locate_top_line_nothing_visible() {
        assert_eq!(locate_top_line(10, 3, 4, |_| false), 0);
        assert_eq!(locate_top_line(0, 3, 4, |_| true), 0);
    }
}
