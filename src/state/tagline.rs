//! Rotating tagline timer and its enter/exit transition.
//!
//! The rotator is polled from the terminal tick. Each firing advances the
//! index and arms exactly one next firing; `cancel` disarms it so an
//! unmounted view never advances again.

use std::time::{Duration, Instant};

pub const TAGLINES: [&str; 10] = [
    "In the world of cinema, every frame tells a story...",
    "Where creativity meets technology, magic happens...",
    "From script to screen, we bring your vision to life...",
    "Collaborate, create, and celebrate the art of filmmaking...",
    "Every project is a journey, every story is unique...",
    "Where dreams transform into moving pictures...",
    "Capturing moments that last forever...",
    "The future of filmmaking is here...",
    "Your story deserves to be told...",
    "Innovation meets imagination...",
];

pub const TAGLINE_INTERVAL: Duration = Duration::from_millis(3500);

/// Length of each transition half (exit, then enter).
///
pub const TRANSITION_PHASE: Duration = Duration::from_millis(1500);

/// Specifying which part of the transition is playing.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TaglinePhase {
    Exiting,
    Entering,
    Visible,
}

/// The single tagline to draw at a given instant.
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TaglineFrame {
    pub index: usize,
    pub phase: TaglinePhase,
    /// Eased progress of the phase, 0.0 to 1.0.
    pub progress: f32,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Option<usize>,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct TaglineRotator {
    len: usize,
    index: usize,
    interval: Duration,
    next_due: Option<Instant>,
    transition: Option<Transition>,
}

impl Default for TaglineRotator {
    fn default() -> Self {
        TaglineRotator::new(TAGLINES.len(), TAGLINE_INTERVAL)
    }
}

impl TaglineRotator {
    /// Return an idle rotator over `len` items.
    ///
    pub fn new(len: usize, interval: Duration) -> Self {
        debug_assert!(len > 0, "tagline list must not be empty");
        TaglineRotator {
            len: len.max(1),
            index: 0,
            interval,
            next_due: None,
            transition: None,
        }
    }

    /// Restart from the first item and arm the first firing.
    ///
    pub fn start(&mut self, now: Instant) {
        self.index = 0;
        self.transition = Some(Transition {
            from: None,
            started: now,
        });
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the pending firing.
    ///
    pub fn cancel(&mut self) {
        self.next_due = None;
        self.transition = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Fire if due. At most one advance per call; the next firing is armed
    /// relative to `now`. Returns whether the index changed.
    ///
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let from = self.index;
                self.index = (self.index + 1) % self.len;
                self.transition = Some(Transition {
                    from: Some(from),
                    started: now,
                });
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Return what to draw at `now`. The outgoing item finishes exiting
    /// before the incoming one starts entering.
    ///
    pub fn frame(&self, now: Instant) -> TaglineFrame {
        if let Some(transition) = self.transition {
            let mut elapsed = now.saturating_duration_since(transition.started);
            if let Some(from) = transition.from {
                if elapsed < TRANSITION_PHASE {
                    return TaglineFrame {
                        index: from,
                        phase: TaglinePhase::Exiting,
                        progress: phase_progress(elapsed),
                    };
                }
                elapsed -= TRANSITION_PHASE;
            }
            if elapsed < TRANSITION_PHASE {
                return TaglineFrame {
                    index: self.index,
                    phase: TaglinePhase::Entering,
                    progress: phase_progress(elapsed),
                };
            }
        }
        TaglineFrame {
            index: self.index,
            phase: TaglinePhase::Visible,
            progress: 1.0,
        }
    }
}

fn phase_progress(elapsed: Duration) -> f32 {
    ease_in_out_cubic(elapsed.as_secs_f32() / TRANSITION_PHASE.as_secs_f32())
}

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        let mut rotator = TaglineRotator::new(10, TAGLINE_INTERVAL);
        let mut now = Instant::now();
        rotator.start(now);
        for expected in 1..=10 {
            now += TAGLINE_INTERVAL;
            assert!(rotator.poll(now));
            assert_eq!(rotator.index(), expected % 10);
        }
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn does_not_fire_early() {
        let mut rotator = TaglineRotator::default();
        let now = Instant::now();
        rotator.start(now);
        assert!(!rotator.poll(now + TAGLINE_INTERVAL - Duration::from_millis(1)));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn fires_once_per_poll() {
        let mut rotator = TaglineRotator::default();
        let now = Instant::now();
        rotator.start(now);
        let late = now + TAGLINE_INTERVAL * 5;
        assert!(rotator.poll(late));
        assert!(!rotator.poll(late));
        assert_eq!(rotator.index(), 1);
        assert!(rotator.poll(late + TAGLINE_INTERVAL));
        assert_eq!(rotator.index(), 2);
    }

    #[test]
    fn cancel_prevents_future_firings() {
        let mut rotator = TaglineRotator::default();
        let now = Instant::now();
        rotator.start(now);
        rotator.cancel();
        assert!(!rotator.is_running());
        assert!(!rotator.poll(now + TAGLINE_INTERVAL * 3));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn idle_rotator_never_fires() {
        let mut rotator = TaglineRotator::default();
        assert!(!rotator.poll(Instant::now() + TAGLINE_INTERVAL * 2));
    }

    #[test]
    fn restart_resets_index() {
        let mut rotator = TaglineRotator::default();
        let now = Instant::now();
        rotator.start(now);
        rotator.poll(now + TAGLINE_INTERVAL);
        rotator.cancel();
        rotator.start(now + TAGLINE_INTERVAL * 2);
        assert_eq!(rotator.index(), 0);
        assert!(rotator.is_running());
    }

    #[test]
    fn first_item_enters_on_start() {
        let mut rotator = TaglineRotator::default();
        let now = Instant::now();
        rotator.start(now);
        assert_eq!(rotator.frame(now).phase, TaglinePhase::Entering);
        assert_eq!(
            rotator.frame(now + TRANSITION_PHASE),
            TaglineFrame {
                index: 0,
                phase: TaglinePhase::Visible,
                progress: 1.0,
            }
        );
    }

    #[test]
    fn exit_precedes_enter() {
        let mut rotator = TaglineRotator::default();
        let start = Instant::now();
        rotator.start(start);
        let fired = start + TAGLINE_INTERVAL;
        rotator.poll(fired);

        let exiting = rotator.frame(fired + TRANSITION_PHASE / 2);
        assert_eq!(exiting.index, 0);
        assert_eq!(exiting.phase, TaglinePhase::Exiting);

        let entering = rotator.frame(fired + TRANSITION_PHASE + TRANSITION_PHASE / 2);
        assert_eq!(entering.index, 1);
        assert_eq!(entering.phase, TaglinePhase::Entering);

        let settled = rotator.frame(fired + TRANSITION_PHASE * 2);
        assert_eq!(settled.index, 1);
        assert_eq!(settled.phase, TaglinePhase::Visible);
    }

    #[test]
    fn each_half_lasts_a_second_and_a_half() {
        let mut rotator = TaglineRotator::default();
        let start = Instant::now();
        rotator.start(start);
        let fired = start + TAGLINE_INTERVAL;
        rotator.poll(fired);

        let late_exit = rotator.frame(fired + Duration::from_millis(1400));
        assert_eq!(late_exit.phase, TaglinePhase::Exiting);
        assert_eq!(late_exit.index, 0);
        let late_enter = rotator.frame(fired + Duration::from_millis(2900));
        assert_eq!(late_enter.phase, TaglinePhase::Entering);
        assert_eq!(late_enter.index, 1);
        // Both halves settle before the next rotation is due
        assert!(TRANSITION_PHASE * 2 < TAGLINE_INTERVAL);
    }

    #[test]
    fn easing_curve() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < f32::EPSILON);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }
}
