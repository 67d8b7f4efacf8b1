//! Swipe Tracker
//!
//! Pure displacement state machine for horizontal swipe-to-reveal.
//! Converts a press/motion/release sequence into a committed outcome,
//! independent of whether the input came from a mouse or a touch point.

/// Tunable gesture distances, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Displacement magnitude a release must exceed to commit a reveal
    pub commit_threshold: f64,
    /// Hard clamp on displacement so an action zone never over-extends
    pub max_reveal: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 70.0,
            max_reveal: 100.0,
        }
    }
}

/// Movement slop below which a press+release still counts as a tap
const TAP_SLOP_PX: f64 = 5.0;

/// Gesture lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    Dragging,
    RevealedLeft,
    RevealedRight,
}

/// Which action zones the current displacement has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeZones {
    pub left: bool,
    pub right: bool,
}

/// What a finished press/release sequence committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Left action zone (trailing edge) fully revealed
    RevealedLeft,
    /// Right action zone (leading edge) fully revealed
    RevealedRight,
    /// Press and release without meaningful motion
    Tap,
    /// Released short of the threshold, snapped back
    Reset,
}

/// Per-row gesture state. One active pointer sequence at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    phase: SwipePhase,
    origin: f64,
    translation: f64,
    peak_magnitude: f64,
    tap_eligible: bool,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: SwipePhase::Idle,
            origin: 0.0,
            translation: 0.0,
            peak_magnitude: 0.0,
            tap_eligible: false,
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal displacement, clamped to `±max_reveal`
    pub fn translation(&self) -> f64 {
        self.translation
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    /// Zone flags, recomputed from the latest displacement only
    pub fn zones(&self) -> SwipeZones {
        SwipeZones {
            left: self.translation < -self.config.commit_threshold,
            right: self.translation > self.config.commit_threshold,
        }
    }

    /// Pointer down: record the drag origin and start tracking.
    ///
    /// A tap can only be committed for a gesture that started from Idle;
    /// pressing a revealed row never toggles it.
    pub fn press(&mut self, x: f64) {
        self.tap_eligible = self.phase == SwipePhase::Idle;
        self.origin = x;
        self.peak_magnitude = 0.0;
        self.phase = SwipePhase::Dragging;
    }

    /// Pointer move: returns the new clamped translation.
    pub fn motion(&mut self, x: f64) -> f64 {
        if self.phase != SwipePhase::Dragging {
            return self.translation;
        }
        let displacement = x - self.origin;
        self.translation = displacement.clamp(-self.config.max_reveal, self.config.max_reveal);
        self.peak_magnitude = self.peak_magnitude.max(displacement.abs());
        self.translation
    }

    /// Pointer up (or pointer-leave mid-drag, which behaves identically):
    /// resolve the gesture from the last known displacement.
    pub fn release(&mut self) -> SwipeOutcome {
        if self.phase != SwipePhase::Dragging {
            return SwipeOutcome::Reset;
        }
        if self.translation > self.config.commit_threshold {
            self.phase = SwipePhase::RevealedRight;
            self.translation = self.config.max_reveal;
            SwipeOutcome::RevealedRight
        } else if self.translation < -self.config.commit_threshold {
            self.phase = SwipePhase::RevealedLeft;
            self.translation = -self.config.max_reveal;
            SwipeOutcome::RevealedLeft
        } else {
            let outcome = if self.tap_eligible && self.peak_magnitude <= TAP_SLOP_PX {
                SwipeOutcome::Tap
            } else {
                SwipeOutcome::Reset
            };
            self.reset();
            outcome
        }
    }

    /// Snap back to Idle, clearing displacement.
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.translation = 0.0;
        self.peak_magnitude = 0.0;
        self.tap_eligible = false;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeConfig::default())
    }

    #[test]
    fn release_past_threshold_reveals_right() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(71.0);
        assert_eq!(t.release(), SwipeOutcome::RevealedRight);
        assert_eq!(t.phase(), SwipePhase::RevealedRight);
        assert_eq!(t.translation(), 100.0);
    }

    #[test]
    fn release_at_exact_threshold_resets() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(70.0);
        assert_eq!(t.release(), SwipeOutcome::Reset);
        assert_eq!(t.phase(), SwipePhase::Idle);
        assert_eq!(t.translation(), 0.0);
    }

    #[test]
    fn release_past_threshold_reveals_left() {
        let mut t = tracker();
        t.press(200.0);
        t.motion(129.0);
        assert_eq!(t.release(), SwipeOutcome::RevealedLeft);
        assert_eq!(t.translation(), -100.0);
    }

    #[test]
    fn translation_is_clamped_to_max_reveal() {
        let mut t = tracker();
        t.press(0.0);
        assert_eq!(t.motion(500.0), 100.0);
        assert_eq!(t.motion(-500.0), -100.0);
    }

    #[test]
    fn zones_follow_latest_displacement_through_reversal() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(90.0);
        assert_eq!(t.zones(), SwipeZones { left: false, right: true });
        t.motion(-90.0);
        assert_eq!(t.zones(), SwipeZones { left: true, right: false });
        t.motion(10.0);
        assert_eq!(t.zones(), SwipeZones { left: false, right: false });
    }

    #[test]
    fn press_release_without_motion_is_a_tap() {
        let mut t = tracker();
        t.press(100.0);
        assert_eq!(t.release(), SwipeOutcome::Tap);
        assert_eq!(t.phase(), SwipePhase::Idle);
        assert_eq!(t.translation(), 0.0);
    }

    #[test]
    fn jitter_within_slop_still_taps() {
        let mut t = tracker();
        t.press(100.0);
        t.motion(103.0);
        assert_eq!(t.release(), SwipeOutcome::Tap);
    }

    #[test]
    fn drag_out_and_back_is_not_a_tap() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(30.0);
        t.motion(0.0);
        assert_eq!(t.release(), SwipeOutcome::Reset);
    }

    #[test]
    fn pressing_a_revealed_row_never_taps() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(80.0);
        t.release();

        t.press(200.0);
        t.motion(203.0);
        assert_eq!(t.release(), SwipeOutcome::Reset);
        assert_eq!(t.phase(), SwipePhase::Idle);
    }

    #[test]
    fn press_without_motion_on_revealed_row_stays_revealed() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(80.0);
        t.release();

        // translation is still at max_reveal, so the release re-commits
        t.press(200.0);
        assert_eq!(t.release(), SwipeOutcome::RevealedRight);
        assert_eq!(t.translation(), 100.0);
    }

    #[test]
    fn reset_clears_a_revealed_row() {
        let mut t = tracker();
        t.press(0.0);
        t.motion(-80.0);
        t.release();
        assert_eq!(t.phase(), SwipePhase::RevealedLeft);

        t.reset();
        assert_eq!(t.phase(), SwipePhase::Idle);
        assert_eq!(t.translation(), 0.0);
    }

    #[test]
    fn motion_while_idle_is_ignored() {
        let mut t = tracker();
        assert_eq!(t.motion(50.0), 0.0);
        assert_eq!(t.phase(), SwipePhase::Idle);
    }
}
