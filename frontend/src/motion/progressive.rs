use crate::motion::tween::Tween;

/// One animated character of a progressive line.
#[derive(Clone, Debug, PartialEq)]
pub struct CharUnit {
    pub index: usize,
    pub ch: char,
    pub tween: Tween,
}

impl CharUnit {
    pub fn is_space(&self) -> bool {
        self.ch.is_whitespace()
    }

    pub fn style(&self, revealed: bool) -> String {
        // inline-block collapses bare spaces, so keep them as preformatted
        let white_space = if self.is_space() { " white-space: pre;" } else { "" };
        format!("display: inline-block;{} {}", white_space, self.tween.style(revealed))
    }
}

/// Splits `text` into per-character units, each delayed by
/// `base_delay + index * stagger`.
pub fn stagger(text: &str, base_delay: f64, stagger: f64) -> Vec<CharUnit> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| CharUnit {
            index,
            ch,
            tween: Tween::character(base_delay + index as f64 * stagger),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hi_there_yields_eight_ordered_units() {
        let units = stagger("hi there", 0.0, 0.03);
        assert_eq!(units.len(), 8);

        let rebuilt: String = units.iter().map(|u| u.ch).collect();
        assert_eq!(rebuilt, "hi there");

        for pair in units.windows(2) {
            assert!(pair[1].tween.delay_s > pair[0].tween.delay_s);
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn base_delay_offsets_every_unit() {
        let units = stagger("abc", 1.5, 0.1);
        assert_eq!(units[0].tween.delay_s, 1.5);
        assert!((units[2].tween.delay_s - 1.7).abs() < 1e-9);
    }

    #[test]
    fn spaces_keep_their_width() {
        let units = stagger("a b", 0.0, 0.03);
        assert!(units[1].is_space());
        assert!(units[1].style(false).contains("white-space: pre;"));
        assert!(!units[0].style(false).contains("white-space"));
    }

    #[test]
    fn splits_on_chars_not_bytes() {
        let units = stagger("♡ ok", 0.0, 0.03);
        assert_eq!(units.len(), 4);
        assert_eq!(units[0].ch, '♡');
    }

    #[test]
    fn empty_text_has_no_units() {
        assert!(stagger("", 0.0, 0.03).is_empty());
    }
}
