//! Entrance animation timing.

use egui::emath::easing;

/// Seconds the table stays fully transparent after it is first shown.
pub const FADE_IN_DELAY: f64 = 0.2;

/// Seconds the opacity tween takes once the delay has passed.
pub const FADE_IN_DURATION: f64 = 0.3;

/// Opacity of the table `elapsed` seconds after it was first shown.
///
/// Eases in and out over the tween.
pub fn fade_in_opacity(elapsed: f64) -> f32 {
    let progress = ((elapsed - FADE_IN_DELAY) / FADE_IN_DURATION).clamp(0.0, 1.0) as f32;
    easing::cubic_in_out(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_during_delay() {
        assert_eq!(fade_in_opacity(0.0), 0.0);
        assert_eq!(fade_in_opacity(FADE_IN_DELAY), 0.0);
        assert_eq!(fade_in_opacity(-1.0), 0.0);
    }

    #[test]
    fn test_tween_eases_in_and_out() {
        let quarter = fade_in_opacity(FADE_IN_DELAY + FADE_IN_DURATION / 4.0);
        let halfway = fade_in_opacity(FADE_IN_DELAY + FADE_IN_DURATION / 2.0);
        let three_quarters = fade_in_opacity(FADE_IN_DELAY + FADE_IN_DURATION * 0.75);

        assert!(quarter < 0.25, "start should ease in, got {quarter}");
        assert!((halfway - 0.5).abs() < 1e-3, "halfway opacity was {halfway}");
        assert!(three_quarters > 0.75, "end should ease out, got {three_quarters}");
    }

    #[test]
    fn test_stays_opaque_after_tween() {
        assert_eq!(fade_in_opacity(FADE_IN_DELAY + FADE_IN_DURATION), 1.0);
        assert_eq!(fade_in_opacity(10.0), 1.0);
    }
}
