use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than this get the lighter particle field and the
/// lower reveal threshold.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width < NARROW_BREAKPOINT_PX
}

// Reveal triggers
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_THRESHOLD_NARROW: f64 = 0.05;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const PROGRESSIVE_THRESHOLD: f64 = 0.3;
pub const TIMELINE_THRESHOLD: f64 = 0.2;
pub const BLUR_MIN_RATIO: f64 = 0.4;

// Tweens
pub const REVEAL_OFFSET: f64 = 40.0;
pub const REVEAL_DURATION_S: f64 = 1.2;
pub const CHAR_OFFSET: f64 = 10.0;
pub const CHAR_DURATION_S: f64 = 0.6;
pub const CHAR_STAGGER_S: f64 = 0.03;
pub const TIMELINE_OFFSET: f64 = 20.0;
pub const TIMELINE_DURATION_S: f64 = 0.8;
pub const EASE_OUT: [f64; 4] = [0.25, 0.1, 0.25, 1.0];

// Audio
pub const AUDIO_SOURCE: &str = "Beyoncé- All Night(Official Instrumental) [6gf_cPNKkOw] (1).mp3";
pub const UNLOCK_VOLUME: f64 = 0.07;
pub const MANUAL_VOLUME: f64 = 0.03;

pub fn audio_source_url() -> String {
    format!("/{}", urlencoding::encode(AUDIO_SOURCE))
}

// Particles
pub const AMBIENT_PARTICLES: usize = 40;
pub const AMBIENT_PARTICLES_NARROW: usize = 10;
pub const CELEBRATION_PARTICLES: usize = 60;

pub fn ambient_particle_count(viewport_width: f64) -> usize {
    if is_narrow(viewport_width) {
        AMBIENT_PARTICLES_NARROW
    } else {
        AMBIENT_PARTICLES
    }
}

pub fn reveal_threshold(viewport_width: f64) -> f64 {
    if is_narrow(viewport_width) {
        REVEAL_THRESHOLD_NARROW
    } else {
        REVEAL_THRESHOLD
    }
}

/// Width of the current window, or the wide layout when there is none.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(NARROW_BREAKPOINT_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_get_fewer_particles() {
        assert_eq!(ambient_particle_count(375.0), 10);
        assert_eq!(ambient_particle_count(767.9), 10);
        assert_eq!(ambient_particle_count(768.0), 40);
        assert_eq!(ambient_particle_count(1440.0), 40);
    }

    #[test]
    fn narrow_viewports_reveal_earlier() {
        assert!(reveal_threshold(400.0) < reveal_threshold(1200.0));
    }

    #[test]
    fn audio_source_is_url_encoded() {
        let url = audio_source_url();
        assert!(url.starts_with('/'));
        assert!(!url.contains(' '));
        assert!(!url.contains('é'));
        assert!(url.ends_with(".mp3"));
    }
}
