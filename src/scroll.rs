/// Vertical scroll progress as a percentage in `[0, 100]`.
///
/// `scrolled` is the document's `scrollTop`, `scroll_height` and
/// `client_height` come from the document element. A page without
/// scrollable overflow reports 0 instead of dividing by zero.
pub fn progress_percent(scrolled: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max = scroll_height - client_height;
    if max.is_nan() || max <= 0.0 || scrolled.is_nan() {
        return 0.0;
    }
    (scrolled / max * 100.0).clamp(0.0, 100.0)
}

/// Inline style for the progress bar fill.
pub fn bar_style(percent: f64) -> String {
    format!("width: {percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_proportional() {
        let max = 2400.0;
        for s in [0.0, 1.0, 240.0, 600.0, 1200.0, 1999.5, 2400.0] {
            let p = progress_percent(s, max + 800.0, 800.0);
            assert!((p - s / max * 100.0).abs() < 1e-9, "offset {s} gave {p}");
        }
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        // overscroll bounce on mobile browsers
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_without_overflow() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(10.0, f64::NAN, 1000.0), 0.0);
    }

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style(0.0), "width: 0%");
        assert_eq!(bar_style(42.5), "width: 42.5%");
        assert_eq!(bar_style(100.0), "width: 100%");
    }
}
