//! Replays a [`Recording`] one frame at a time
//!
//! `Playback` holds the state a renderer reads: the current magnitudes, the
//! highlight set of the last applied frame, and the sorted region. Applying
//! a frame is the only way that state changes, and frames are applied in
//! recording order with no skipping.

use crate::error::PlaybackError;
use crate::history::{RecordedFrame, Recording};
use crate::tracker::SortedRegion;

#[derive(Debug, Clone)]
pub struct Playback {
    recording: Recording,
    values: Vec<u32>,
    active: Vec<usize>,
    sorted: SortedRegion,
    /// Number of frames applied so far
    position: usize,
    settled: bool,
}

impl Playback {
    pub fn new(recording: Recording) -> Self {
        let values = recording.initial().to_vec();
        Playback {
            recording,
            values,
            active: Vec::new(),
            sorted: SortedRegion::new(),
            position: 0,
            settled: false,
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn sorted(&self) -> &SortedRegion {
        &self.sorted
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_frames(&self) -> usize {
        self.recording.len()
    }

    /// True once every frame and the trailing settle have been applied
    pub fn is_finished(&self) -> bool {
        self.settled
    }

    /// Apply the next frame. Once the last frame has been applied, one more
    /// step applies the trailing settle and clears the highlight, so the
    /// last frame stays visible like every other.
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.settled {
            return Err(PlaybackError::AtEnd);
        }

        if let Some(frame) = self.recording.frame(self.position).cloned() {
            self.apply(&frame);
            self.position += 1;
            return Ok(());
        }

        if let Some(settle) = self.recording.settle().cloned() {
            self.apply(&settle);
        }
        self.active.clear();
        self.settled = true;
        Ok(())
    }

    /// Apply all remaining frames, returning how many were applied
    pub fn jump_to_end(&mut self) -> usize {
        let start = self.position;
        while self.step_forward().is_ok() {}
        self.position - start
    }

    fn apply(&mut self, frame: &RecordedFrame) {
        for change in self.recording.changes(frame) {
            self.values[change.index] = change.value;
        }
        for &index in self.recording.newly_sorted(frame) {
            self.sorted.mark_sorted(index);
        }
        self.active.clear();
        self.active.extend_from_slice(self.recording.active(frame));
    }

    /// Consume the playback, returning the final magnitudes and sorted region
    pub fn into_parts(self) -> (Vec<u32>, SortedRegion) {
        (self.values, self.sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::frame::Trace;
    use crate::history::Recorder;

    fn playback(algorithm: Algorithm, input: &[u32]) -> Playback {
        let mut values = input.to_vec();
        let mut sorted = SortedRegion::new();
        let mut recorder = Recorder::new(input.to_vec());
        algorithm.run(&mut values, &mut sorted, &mut recorder);
        Playback::new(recorder.finish())
    }

    #[test]
    fn test_replay_matches_live_frames() {
        let input = [5, 3, 8, 1, 9, 2];
        let mut values = input.to_vec();
        let mut sorted = SortedRegion::new();
        let mut trace = Trace::default();
        Algorithm::Quick.run(&mut values, &mut sorted, &mut trace);

        let mut playback = playback(Algorithm::Quick, &input);
        assert_eq!(playback.values(), &input);
        for live in &trace.frames {
            playback.step_forward().unwrap();
            assert!(!playback.is_finished());
            assert_eq!(playback.values(), live.values.as_slice());
            assert_eq!(playback.active(), live.active.as_slice());
            assert_eq!(playback.sorted().to_sorted_vec(), live.sorted);
        }

        playback.step_forward().unwrap();
        assert!(playback.is_finished());
        assert!(playback.active().is_empty());
        assert_eq!(playback.values(), values.as_slice());
    }

    #[test]
    fn test_last_frame_highlight_is_visible() {
        let mut playback = playback(Algorithm::Bubble, &[2, 1]);
        assert_eq!(playback.total_frames(), 1);

        playback.step_forward().unwrap();
        assert!(!playback.is_finished());
        assert_eq!(playback.active(), &[0, 1]);
        assert_eq!(playback.values(), &[1, 2]);
        assert!(playback.sorted().is_empty());

        playback.step_forward().unwrap();
        assert!(playback.is_finished());
        assert!(playback.active().is_empty());
        assert!(playback.sorted().is_complete(2));
    }

    #[test]
    fn test_finishes_with_everything_sorted() {
        let mut playback = playback(Algorithm::Bubble, &[5, 3, 8, 1]);

        assert_eq!(playback.jump_to_end(), 6);
        assert!(playback.is_finished());
        assert_eq!(playback.values(), &[1, 3, 5, 8]);
        assert!(playback.sorted().is_complete(4));
        assert!(playback.active().is_empty());
        assert_eq!(playback.step_forward(), Err(PlaybackError::AtEnd));
    }

    #[test]
    fn test_frameless_run_finishes_in_one_step() {
        let mut playback = playback(Algorithm::Merge, &[42]);

        assert_eq!(playback.total_frames(), 0);
        assert!(!playback.is_finished());
        playback.step_forward().unwrap();
        assert!(playback.is_finished());
        assert_eq!(playback.sorted().to_sorted_vec(), vec![0]);
    }
}
