/// Fraction of the page scrolled, 0 at the top and 1 at the bottom.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Linear map from `input` onto `output`, clamped to the output endpoints.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresencePose {
    pub y_px: f64,
    pub opacity: f64,
}

impl PresencePose {
    pub fn at(progress: f64) -> Self {
        Self {
            y_px: map_range(progress, (0.0, 0.1), (0.0, -80.0)),
            opacity: map_range(progress, (0.0, 0.08), (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!("transform: translateY({}px); opacity: {};", self.y_px, self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(9000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-50.0, 5000.0, 1000.0), 0.0);
        // Page shorter than the viewport never scrolls
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn range_map_holds_endpoints_outside_input() {
        assert_eq!(map_range(-1.0, (0.0, 0.1), (0.0, -80.0)), 0.0);
        assert_eq!(map_range(0.5, (0.0, 0.1), (0.0, -80.0)), -80.0);
        assert!((map_range(0.05, (0.0, 0.1), (0.0, -80.0)) + 40.0).abs() < 1e-9);
    }

    #[test]
    fn range_map_is_monotone() {
        let mut last = f64::INFINITY;
        for step in 0..=20 {
            let y = map_range(step as f64 * 0.01, (0.0, 0.1), (0.0, -80.0));
            assert!(y <= last);
            last = y;
        }
    }

    #[test]
    fn presence_fades_before_it_finishes_lifting() {
        let pose = PresencePose::at(0.08);
        assert_eq!(pose.opacity, 0.0);
        assert!(pose.y_px > -80.0);
        assert_eq!(PresencePose::at(0.0), PresencePose { y_px: 0.0, opacity: 1.0 });
    }
}
