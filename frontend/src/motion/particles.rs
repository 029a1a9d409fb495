use std::ops::{Range, RangeInclusive};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const CELEBRATION_COLORS: [&str; 8] = [
    "#f472b6",
    "#fda4af",
    "#c4b5fd",
    "#93c5fd",
    "#fcd34d",
    "#fb923c",
    "#a78bfa",
    "#f9a8d4",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub left_pct: f64,
    pub bottom_pct: Option<f64>,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
    pub color: Option<&'static str>,
}

impl Particle {
    pub fn style(&self) -> String {
        let mut style = format!(
            "left: {}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {}s; opacity: {};",
            self.left_pct, self.size_px, self.size_px, self.duration_s, self.delay_s, self.opacity
        );
        if let Some(bottom) = self.bottom_pct {
            style.push_str(&format!(" bottom: {}%;", bottom));
        }
        if let Some(color) = self.color {
            style.push_str(&format!(" background-color: {};", color));
        }
        style
    }
}

/// Random ranges a particle field draws from.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: Range<f64>,
    pub duration_s: Range<f64>,
    pub delay_s: Range<f64>,
    pub opacity: Option<Range<f64>>,
    pub bottom_pct: Option<RangeInclusive<f64>>,
    pub palette: &'static [&'static str],
}

impl ParticleSpec {
    /// Slow drifting motes behind the whole page.
    pub fn ambient() -> Self {
        Self {
            size_px: 1.0..3.0,
            duration_s: 15.0..35.0,
            delay_s: 0.0..20.0,
            opacity: Some(0.1..0.5),
            bottom_pct: None,
            palette: &[],
        }
    }

    /// Colored confetti rising through the celebration overlay.
    pub fn celebration() -> Self {
        Self {
            size_px: 3.0..11.0,
            duration_s: 2.0..5.0,
            delay_s: 0.0..2.0,
            opacity: None,
            bottom_pct: Some(-10.0..=0.0),
            palette: &CELEBRATION_COLORS,
        }
    }
}

fn sample(rng: &mut StdRng, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

/// Builds `count` particles. A fixed `seed` makes the field reproducible.
pub fn generate(count: usize, spec: &ParticleSpec, seed: Option<u64>) -> Vec<Particle> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|id| Particle {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            bottom_pct: spec.bottom_pct.clone().map(|r| rng.gen_range(r)),
            size_px: sample(&mut rng, &spec.size_px),
            duration_s: sample(&mut rng, &spec.duration_s),
            delay_s: sample(&mut rng, &spec.delay_s),
            opacity: spec.opacity.as_ref().map_or(1.0, |r| sample(&mut rng, r)),
            color: spec.palette.choose(&mut rng).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn ambient_field_honours_count_and_ranges() {
        let spec = ParticleSpec::ambient();
        for width in [375.0, 1280.0] {
            let count = config::ambient_particle_count(width);
            let particles = generate(count, &spec, Some(7));
            assert_eq!(particles.len(), count);
            for (i, p) in particles.iter().enumerate() {
                assert_eq!(p.id, i);
                assert!((0.0..=100.0).contains(&p.left_pct));
                assert!(spec.duration_s.contains(&p.duration_s));
                assert!(spec.size_px.contains(&p.size_px));
                assert!(spec.delay_s.contains(&p.delay_s));
                assert!((0.1..0.5).contains(&p.opacity));
                assert_eq!(p.color, None);
                assert_eq!(p.bottom_pct, None);
            }
        }
    }

    #[test]
    fn celebration_field_is_colored_and_starts_below_view() {
        let spec = ParticleSpec::celebration();
        let particles = generate(config::CELEBRATION_PARTICLES, &spec, Some(99));
        assert_eq!(particles.len(), 60);
        for p in &particles {
            let color = p.color.expect("celebration particles are colored");
            assert!(CELEBRATION_COLORS.contains(&color));
            let bottom = p.bottom_pct.expect("celebration particles have a bottom offset");
            assert!((-10.0..=0.0).contains(&bottom));
            assert!((2.0..5.0).contains(&p.duration_s));
            assert_eq!(p.opacity, 1.0);
        }
    }

    #[test]
    fn celebration_bottom_includes_the_baseline() {
        let range = ParticleSpec::celebration().bottom_pct.expect("celebration spec has a bottom range");
        assert!(range.contains(&0.0));
        assert!(range.contains(&-10.0));
        for p in generate(200, &ParticleSpec::celebration(), Some(5)) {
            assert!(range.contains(&p.bottom_pct.unwrap_or(f64::NAN)));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let spec = ParticleSpec::ambient();
        assert_eq!(generate(40, &spec, Some(3)), generate(40, &spec, Some(3)));
        assert_ne!(generate(40, &spec, Some(3)), generate(40, &spec, Some(4)));
    }

    #[test]
    fn unseeded_generation_still_respects_count() {
        assert_eq!(generate(12, &ParticleSpec::ambient(), None).len(), 12);
    }

    #[test]
    fn style_carries_optional_fields() {
        let p = Particle {
            id: 0,
            left_pct: 50.0,
            bottom_pct: Some(-5.0),
            size_px: 4.0,
            duration_s: 3.0,
            delay_s: 1.0,
            opacity: 1.0,
            color: Some("#f472b6"),
        };
        let style = p.style();
        assert!(style.contains("left: 50%;"));
        assert!(style.contains("bottom: -5%;"));
        assert!(style.contains("background-color: #f472b6;"));
    }
}
