//! The Step Animator - playback half
//!
//! A `Script` is a precomputed sequence of frames ending in a terminal
//! outcome. `AnimationRun` plays a script back against the app's tick loop:
//! on every tick it applies all frames whose deadline has passed and
//! schedules the next one. The per-step delay is passed in on every call, so
//! the speed control takes effect from the next step boundary.
//!
//! There is no cancellation: a run always plays to its last frame. The app
//! holds at most one run at a time and rejects new starts while the current
//! one is unfinished (the Run Guard).

use std::time::{Duration, Instant};

/// Role of a visual element in the current animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Element currently being compared
    Comparing,
    /// The element an outer loop is working on
    Current,
    /// Search target found here
    Match,
    /// Element in its final sorted position
    Sorted,
    /// Running minimum candidate (selection sort)
    Pivot,
    /// Permanently visited by a traversal
    Visited,
}

/// How long a frame stays on screen, in units of the step delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Full,
    Half,
}

impl Pause {
    pub fn scale(&self, step: Duration) -> Duration {
        match self {
            Pause::Full => step,
            Pause::Half => step / 2,
        }
    }
}

/// One animation step: the full element state plus a pause weight
#[derive(Debug, Clone)]
pub struct Frame {
    pub values: Vec<i64>,
    pub highlights: Vec<Highlight>,
    pub pause: Pause,
    pub caption: Option<String>,
}

impl Frame {
    pub fn new(values: Vec<i64>, highlights: Vec<Highlight>, pause: Pause) -> Self {
        debug_assert_eq!(values.len(), highlights.len());
        Self {
            values,
            highlights,
            pause,
            caption: None,
        }
    }

    /// Frame with no highlights at all
    pub fn idle(values: Vec<i64>, pause: Pause) -> Self {
        let highlights = vec![Highlight::None; values.len()];
        Self::new(values, highlights, pause)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Terminal result of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Search target found at this index (in view order)
    FoundAt(usize),
    /// Search exhausted every element
    NotFound,
    /// A sort finished; the final frame holds the sorted values
    SortComplete,
    /// A traversal finished with this visit order
    TraversalComplete(Vec<usize>),
}

/// A precomputed animation: at least one frame plus the terminal outcome
#[derive(Debug, Clone)]
pub struct Script {
    pub frames: Vec<Frame>,
    pub outcome: Outcome,
    /// Status-line text shown when the run completes
    pub summary: String,
}

impl Script {
    pub fn new(frames: Vec<Frame>, outcome: Outcome, summary: impl Into<String>) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            outcome,
            summary: summary.into(),
        }
    }
}

/// A script in playback. Owns the cursor and the next-step deadline.
#[derive(Debug)]
pub struct AnimationRun {
    script: Script,
    /// Index of the frame currently on screen
    cursor: usize,
    /// When the next frame becomes due
    next_step: Instant,
}

impl AnimationRun {
    /// Start playback: the first frame shows immediately, the second becomes
    /// due after the first frame's pause.
    pub fn start(script: Script, now: Instant, step: Duration) -> Self {
        let first_pause = script
            .frames
            .first()
            .map(|f| f.pause.scale(step))
            .unwrap_or(step);
        Self {
            script,
            cursor: 0,
            next_step: now + first_pause,
        }
    }

    /// Apply every frame that has come due. Returns true if the visible
    /// frame changed. `step` is read fresh so mid-run speed changes apply at
    /// the next step boundary. Deadlines chain from the previous one, so a
    /// late tick catches up on all overdue frames instead of stalling.
    pub fn advance(&mut self, now: Instant, step: Duration) -> bool {
        let mut moved = false;
        while !self.is_finished() && now >= self.next_step {
            self.cursor += 1;
            moved = true;
            let pause = self.script.frames[self.cursor].pause.scale(step);
            self.next_step += pause;
        }
        moved
    }

    pub fn current_frame(&self) -> &Frame {
        &self.script.frames[self.cursor]
    }

    /// The run guard predicate: a new run may start only once this is true
    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.script.frames.len()
    }

    /// Terminal outcome, available once the last frame is on screen
    pub fn outcome(&self) -> Option<&Outcome> {
        if self.is_finished() {
            Some(&self.script.outcome)
        } else {
            None
        }
    }

    pub fn summary(&self) -> &str {
        &self.script.summary
    }

    /// Values of the last frame (what a sort commits to the dataset)
    pub fn final_values(&self) -> &[i64] {
        &self.script.frames[self.script.frames.len() - 1].values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_frame_script() -> Script {
        Script::new(
            vec![
                Frame::idle(vec![1, 2], Pause::Full),
                Frame::idle(vec![1, 2], Pause::Half),
                Frame::idle(vec![2, 1], Pause::Full),
            ],
            Outcome::SortComplete,
            "done",
        )
    }

    #[test]
    fn test_frames_apply_only_when_due() {
        let step = Duration::from_millis(100);
        let start = Instant::now();
        let mut run = AnimationRun::start(three_frame_script(), start, step);

        assert_eq!(run.current_frame().values, vec![1, 2]);
        assert!(!run.advance(start + Duration::from_millis(50), step));
        assert!(run.advance(start + Duration::from_millis(100), step));
        assert!(!run.is_finished());
    }

    #[test]
    fn test_half_pause_is_half_the_step() {
        let step = Duration::from_millis(100);
        let start = Instant::now();
        let mut run = AnimationRun::start(three_frame_script(), start, step);

        // Frame 1 due at +100ms, frame 2 (after a half pause) at +150ms
        run.advance(start + Duration::from_millis(100), step);
        assert!(!run.advance(start + Duration::from_millis(120), step));
        assert!(run.advance(start + Duration::from_millis(150), step));
        assert!(run.is_finished());
    }

    #[test]
    fn test_outcome_only_when_finished() {
        let step = Duration::from_millis(10);
        let start = Instant::now();
        let mut run = AnimationRun::start(three_frame_script(), start, step);

        assert_eq!(run.outcome(), None);
        assert!(run.advance(start + Duration::from_secs(60), step));
        assert!(run.is_finished());
        assert_eq!(run.outcome(), Some(&Outcome::SortComplete));
        assert_eq!(run.final_values(), &[2, 1]);
        assert_eq!(run.summary(), "done");
    }

    #[test]
    fn test_late_tick_applies_all_overdue_frames() {
        let step = Duration::from_millis(100);
        let start = Instant::now();
        let mut run = AnimationRun::start(three_frame_script(), start, step);

        // Frames are due at +100ms and +150ms; a single tick long past both
        // deadlines lands on the final frame, and re-ticking at the same
        // instant is a no-op
        let late = start + Duration::from_secs(60);
        assert!(run.advance(late, step));
        assert!(run.is_finished());
        assert_eq!(run.current_frame().values, vec![2, 1]);
        assert!(!run.advance(late, step));
    }

    #[test]
    fn test_speed_change_applies_at_next_boundary() {
        let slow = Duration::from_millis(1000);
        let fast = Duration::from_millis(10);
        let start = Instant::now();
        let mut run = AnimationRun::start(three_frame_script(), start, slow);

        // Not due yet at slow speed, and passing a faster step does not
        // reschedule the already-armed deadline
        assert!(!run.advance(start + Duration::from_millis(500), fast));
        // Once the armed deadline passes, the faster step governs the next one
        assert!(run.advance(start + Duration::from_millis(1000), fast));
        assert!(run.advance(start + Duration::from_millis(1005), fast));
        assert!(run.is_finished());
    }

    #[test]
    fn test_single_frame_script_is_immediately_finished() {
        let script = Script::new(
            vec![Frame::idle(vec![7], Pause::Full)],
            Outcome::NotFound,
            "7 not found",
        );
        let run = AnimationRun::start(script, Instant::now(), Duration::from_millis(100));
        assert!(run.is_finished());
        assert_eq!(run.outcome(), Some(&Outcome::NotFound));
    }
}
