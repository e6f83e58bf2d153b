//! End-of-game celebration.
//!
//! Two effects run off the app tick: the status line twirls as soon as the
//! game ends, and a "Good job!" overlay spins once the summary is closed.
//! Both restart on every game end and stop on reset.

use std::time::Duration;

/// One full turn of the status twirl.
pub const TWIRL_PERIOD: Duration = Duration::from_millis(1200);
/// One full turn of the overlay spin.
pub const SPIN_PERIOD: Duration = Duration::from_millis(1600);

/// Rotation frames, one eighth of a turn apart.
pub const SPIN_FRAMES: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// A spinning effect with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spin {
    elapsed: Duration,
    total: Duration,
    period: Duration,
}

impl Spin {
    fn frame(&self) -> Option<&'static str> {
        if self.elapsed >= self.total {
            return None;
        }
        let period = self.period.as_secs_f64();
        let t = (self.elapsed.as_secs_f64() % period) / period;
        let turn = ease_both(t);
        let index = (turn * SPIN_FRAMES.len() as f64) as usize % SPIN_FRAMES.len();
        Some(SPIN_FRAMES[index])
    }
}

/// Slow start, slow finish.
fn ease_both(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// The celebration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    twirl_total: Duration,
    spin_total: Duration,
    twirl: Option<Spin>,
    overlay: Option<Spin>,
}

impl Celebration {
    /// Creates an idle celebration with the given effect lengths.
    pub fn new(twirl_total: Duration, spin_total: Duration) -> Self {
        Self {
            twirl_total,
            spin_total,
            twirl: None,
            overlay: None,
        }
    }

    /// Starts the status twirl from the beginning.
    pub fn start_twirl(&mut self) {
        self.twirl = Some(Spin {
            elapsed: Duration::ZERO,
            total: self.twirl_total,
            period: TWIRL_PERIOD,
        });
    }

    /// Starts the overlay spin from the beginning.
    pub fn start_overlay(&mut self) {
        self.overlay = Some(Spin {
            elapsed: Duration::ZERO,
            total: self.spin_total,
            period: SPIN_PERIOD,
        });
    }

    /// Stops both effects.
    pub fn stop(&mut self) {
        self.twirl = None;
        self.overlay = None;
    }

    /// Advances running effects, dropping finished ones.
    pub fn tick(&mut self, dt: Duration) {
        for effect in [&mut self.twirl, &mut self.overlay] {
            if let Some(spin) = effect {
                spin.elapsed += dt;
                if spin.elapsed >= spin.total {
                    *effect = None;
                }
            }
        }
    }

    /// Current frame of the status twirl, if running.
    pub fn twirl_frame(&self) -> Option<&'static str> {
        self.twirl.as_ref().and_then(Spin::frame)
    }

    /// Current frame of the overlay spin, if running.
    pub fn overlay_frame(&self) -> Option<&'static str> {
        self.overlay.as_ref().and_then(Spin::frame)
    }

    /// Returns true while any effect is running.
    pub fn is_active(&self) -> bool {
        self.twirl.is_some() || self.overlay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celebration() -> Celebration {
        Celebration::new(Duration::from_millis(2400), Duration::from_millis(6400))
    }

    #[test]
    fn test_idle_has_no_frames() {
        let c = celebration();
        assert!(!c.is_active());
        assert_eq!(c.twirl_frame(), None);
        assert_eq!(c.overlay_frame(), None);
    }

    #[test]
    fn test_twirl_starts_upright_and_expires() {
        let mut c = celebration();
        c.start_twirl();
        assert_eq!(c.twirl_frame(), Some(SPIN_FRAMES[0]));
        c.tick(Duration::from_millis(600));
        assert_eq!(c.twirl_frame(), Some("↓"));
        c.tick(Duration::from_millis(1800));
        assert_eq!(c.twirl_frame(), None);
        assert!(!c.is_active());
    }

    #[test]
    fn test_overlay_runs_independently() {
        let mut c = celebration();
        c.start_twirl();
        c.tick(Duration::from_millis(2400));
        c.start_overlay();
        assert!(c.overlay_frame().is_some());
        c.tick(Duration::from_millis(6399));
        assert!(c.overlay_frame().is_some());
        c.tick(Duration::from_millis(1));
        assert!(c.overlay_frame().is_none());
    }

    #[test]
    fn test_stop_clears_everything() {
        let mut c = celebration();
        c.start_twirl();
        c.start_overlay();
        c.stop();
        assert!(!c.is_active());
    }
}
