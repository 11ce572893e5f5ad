//! Loading screen schedule
//!
//! The splash stays fully visible for [`SPLASH_VISIBLE_MS`], fades out over
//! [`SPLASH_FADE_MS`] and then reports completion exactly once. Tearing the
//! splash down before that point cancels the schedule for good.

/// How long the splash is shown before fading
pub const SPLASH_VISIBLE_MS: u32 = 2000;
/// Duration of the fade-out
pub const SPLASH_FADE_MS: u32 = 500;

/// Where the splash currently is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Visible,
    FadingOut,
    Done,
    Cancelled,
}

/// Transition emitted by [`SplashSchedule::advance`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashEvent {
    FadeStarted,
    Completed,
}

/// One-shot state machine behind the loading screen
#[derive(Debug, Default)]
pub struct SplashSchedule {
    phase: SplashPhase,
}

impl SplashSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Whether the splash markup should still be on screen
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, SplashPhase::Visible | SplashPhase::FadingOut)
    }

    pub fn is_fading(&self) -> bool {
        self.phase == SplashPhase::FadingOut
    }

    /// Visible -> FadingOut. Returns false from any other phase.
    pub fn begin_fade(&mut self) -> bool {
        if self.phase != SplashPhase::Visible {
            return false;
        }
        self.phase = SplashPhase::FadingOut;
        true
    }

    /// FadingOut -> Done. Returns true only on the transition, so the
    /// completion callback can be guarded by it.
    pub fn complete(&mut self) -> bool {
        if self.phase != SplashPhase::FadingOut {
            return false;
        }
        self.phase = SplashPhase::Done;
        true
    }

    /// Called on teardown; has no effect once the splash is done
    pub fn cancel(&mut self) {
        if self.phase != SplashPhase::Done {
            self.phase = SplashPhase::Cancelled;
        }
    }

    /// Drive the schedule by the time elapsed since mount
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<SplashEvent> {
        let mut events = Vec::new();
        if elapsed_ms >= SPLASH_VISIBLE_MS && self.begin_fade() {
            events.push(SplashEvent::FadeStarted);
        }
        if elapsed_ms >= SPLASH_VISIBLE_MS + SPLASH_FADE_MS && self.complete() {
            events.push(SplashEvent::Completed);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(schedule: &mut SplashSchedule, ticks: impl IntoIterator<Item = u32>) -> Vec<u32> {
        ticks
            .into_iter()
            .filter(|&t| schedule.advance(t).contains(&SplashEvent::Completed))
            .collect()
    }

    #[test]
    fn test_initially_visible() {
        let schedule = SplashSchedule::new();
        assert_eq!(schedule.phase(), SplashPhase::Visible);
        assert!(schedule.is_visible());
        assert!(!schedule.is_fading());
    }

    #[test]
    fn test_nothing_happens_before_visible_period() {
        let mut schedule = SplashSchedule::new();
        assert!(schedule.advance(0).is_empty());
        assert!(schedule.advance(1999).is_empty());
        assert_eq!(schedule.phase(), SplashPhase::Visible);
    }

    #[test]
    fn test_fade_then_complete() {
        let mut schedule = SplashSchedule::new();
        assert_eq!(schedule.advance(2000), vec![SplashEvent::FadeStarted]);
        assert!(schedule.is_fading());
        assert!(schedule.advance(2499).is_empty());
        assert_eq!(schedule.advance(2500), vec![SplashEvent::Completed]);
        assert_eq!(schedule.phase(), SplashPhase::Done);
        assert!(!schedule.is_visible());
    }

    #[test]
    fn test_completes_exactly_once_within_window() {
        let mut schedule = SplashSchedule::new();
        let fired = completions(&mut schedule, (0..=5000).step_by(10));
        assert_eq!(fired.len(), 1);
        assert!(fired[0] >= 2000 && fired[0] <= 2500);
    }

    #[test]
    fn test_two_timer_ticks_fade_then_complete() {
        let mut schedule = SplashSchedule::new();
        let mut elapsed = 0;
        let mut events = Vec::new();
        for wait in [SPLASH_VISIBLE_MS, SPLASH_FADE_MS] {
            elapsed += wait;
            events.push((elapsed, schedule.advance(elapsed)));
        }
        assert_eq!(
            events,
            vec![
                (2000, vec![SplashEvent::FadeStarted]),
                (2500, vec![SplashEvent::Completed]),
            ]
        );
        assert!(schedule.advance(elapsed).is_empty());
    }

    #[test]
    fn test_teardown_between_timer_ticks_suppresses_completion() {
        let mut schedule = SplashSchedule::new();
        assert_eq!(schedule.advance(SPLASH_VISIBLE_MS), vec![SplashEvent::FadeStarted]);
        schedule.cancel();
        assert!(schedule.advance(SPLASH_VISIBLE_MS + SPLASH_FADE_MS).is_empty());
        assert_eq!(schedule.phase(), SplashPhase::Cancelled);
    }

    #[test]
    fn test_late_tick_emits_both_events() {
        let mut schedule = SplashSchedule::new();
        assert_eq!(
            schedule.advance(3000),
            vec![SplashEvent::FadeStarted, SplashEvent::Completed]
        );
        assert!(schedule.advance(4000).is_empty());
    }

    #[test]
    fn test_cancel_before_fade_never_completes() {
        let mut schedule = SplashSchedule::new();
        schedule.advance(1000);
        schedule.cancel();
        assert!(completions(&mut schedule, [2000, 2500, 10_000]).is_empty());
        assert_eq!(schedule.phase(), SplashPhase::Cancelled);
    }

    #[test]
    fn test_cancel_during_fade_never_completes() {
        let mut schedule = SplashSchedule::new();
        schedule.advance(2100);
        schedule.cancel();
        assert!(!schedule.complete());
        assert!(!schedule.is_visible());
    }

    #[test]
    fn test_cancel_after_done_keeps_done() {
        let mut schedule = SplashSchedule::new();
        schedule.advance(2500);
        schedule.cancel();
        assert_eq!(schedule.phase(), SplashPhase::Done);
    }

    #[test]
    fn test_manual_transitions_are_guarded() {
        let mut schedule = SplashSchedule::new();
        assert!(!schedule.complete());
        assert!(schedule.begin_fade());
        assert!(!schedule.begin_fade());
        assert!(schedule.complete());
        assert!(!schedule.complete());
    }
}
