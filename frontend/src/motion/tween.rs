use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting (x, y) offset for an element that travels `distance` toward its rest pose.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub [f64; 4]);

impl CubicBezier {
    pub fn ease_out() -> Self {
        CubicBezier(config::EASE_OUT)
    }

    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

/// Opacity plus translate, hidden pose to rest pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub offset: (f64, f64),
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: CubicBezier,
}

impl Tween {
    pub fn reveal(direction: Direction, delay_s: f64) -> Self {
        Self {
            offset: direction.offset(config::REVEAL_OFFSET),
            duration_s: config::REVEAL_DURATION_S,
            delay_s,
            easing: CubicBezier::ease_out(),
        }
    }

    pub fn character(delay_s: f64) -> Self {
        Self {
            offset: Direction::Up.offset(config::CHAR_OFFSET),
            duration_s: config::CHAR_DURATION_S,
            delay_s,
            easing: CubicBezier::ease_out(),
        }
    }

    pub fn timeline() -> Self {
        Self {
            offset: Direction::Right.offset(config::TIMELINE_OFFSET),
            duration_s: config::TIMELINE_DURATION_S,
            delay_s: 0.0,
            easing: CubicBezier::ease_out(),
        }
    }

    /// Inline style for the current pose; the browser interpolates between them.
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, (x, y)) = if revealed { (1.0, (0.0, 0.0)) } else { (0.0, self.offset) };
        let easing = self.easing.css();
        format!(
            "opacity: {}; transform: translate({}px, {}px); \
             transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s; \
             will-change: opacity, transform;",
            opacity,
            x,
            y,
            d = self.duration_s,
            e = easing,
            delay = self.delay_s,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_map_to_fixed_offsets() {
        assert_eq!(Direction::Up.offset(40.0), (0.0, 40.0));
        assert_eq!(Direction::Down.offset(40.0), (0.0, -40.0));
        assert_eq!(Direction::Left.offset(40.0), (40.0, 0.0));
        assert_eq!(Direction::Right.offset(40.0), (-40.0, 0.0));
        assert_eq!(Direction::None.offset(40.0), (0.0, 0.0));
    }

    #[test]
    fn hidden_pose_sits_at_offset() {
        let style = Tween::reveal(Direction::Left, 0.2).style(false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate(40px, 0px)"));
        assert!(style.contains("opacity 1.2s cubic-bezier(0.25, 0.1, 0.25, 1) 0.2s"));
    }

    #[test]
    fn revealed_pose_rests_at_origin() {
        let style = Tween::reveal(Direction::Up, 0.0).style(true);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translate(0px, 0px)"));
    }

    #[test]
    fn character_variant_is_short_and_vertical() {
        let tween = Tween::character(0.09);
        assert_eq!(tween.offset, (0.0, 10.0));
        assert_eq!(tween.duration_s, 0.6);
        assert!(tween.style(false).contains("0.6s cubic-bezier(0.25, 0.1, 0.25, 1) 0.09s"));
    }

    #[test]
    fn timeline_slides_in_from_the_left() {
        assert_eq!(Tween::timeline().offset, (-20.0, 0.0));
    }
}
