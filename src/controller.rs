//! Owner of the dataset and the run lifecycle
//!
//! The controller is the only thing that creates runs. It records a run up
//! front, then feeds it to the viewer one frame per [`Controller::advance`].
//! While a run is in flight every action that would touch the dataset is
//! refused with [`ControlError::RunInProgress`], so a stale run can never
//! write into a freshly generated dataset.
//!
//! ```text
//! Idle --start--> Running --advance (last frame)--> Complete
//!   ^                                                  |
//!   +------------------- generate ---------------------+
//! ```

use crate::algorithms::Algorithm;
use crate::config::SortConfig;
use crate::dataset::{Dataset, ElementCount};
use crate::error::{ConfigError, ControlError};
use crate::frame::Stepper;
use crate::history::Recorder;
use crate::playback::Playback;
use crate::tracker::SortedRegion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Complete,
}

/// What a started run will play back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub elements: usize,
    pub frames: usize,
}

pub struct Controller {
    dataset: Dataset,
    sorted: SortedRegion,
    algorithm: Algorithm,
    element_count: ElementCount,
    state: RunState,
    playback: Option<Playback>,
    rng: StdRng,
}

impl Controller {
    /// Create a controller and generate its first dataset
    pub fn new(config: &SortConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut controller = Controller {
            dataset: Dataset::default(),
            sorted: SortedRegion::new(),
            algorithm: config.algorithm,
            element_count: config.element_count()?,
            state: RunState::Idle,
            playback: None,
            rng,
        };
        controller.regenerate();
        Ok(controller)
    }

    /// Start from a fixed dataset instead of a random one
    pub fn with_dataset(values: Vec<u32>, algorithm: Algorithm) -> Self {
        Controller {
            element_count: ElementCount::saturating(values.len()),
            dataset: Dataset::from(values),
            sorted: SortedRegion::new(),
            algorithm,
            state: RunState::Idle,
            playback: None,
            rng: StdRng::seed_from_u64(0),
        }
    }

    // ========== Input actions ==========

    /// Replace the dataset with fresh random magnitudes
    pub fn generate(&mut self) -> Result<(), ControlError> {
        self.ensure_not_running("generate")?;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        self.dataset = Dataset::generate(self.element_count, &mut self.rng);
        self.sorted.clear();
        self.playback = None;
        self.state = RunState::Idle;
        info!("Generated {} elements", self.dataset.len());
    }

    pub fn select(&mut self, algorithm: Algorithm) -> Result<(), ControlError> {
        self.ensure_not_running("select")?;
        self.algorithm = algorithm;
        debug!("Selected {}", algorithm);
        Ok(())
    }

    /// Move the selection forward or backward through the algorithm list
    pub fn cycle_algorithm(&mut self, forward: bool) -> Result<Algorithm, ControlError> {
        let next = if forward {
            self.algorithm.next()
        } else {
            self.algorithm.prev()
        };
        self.select(next)?;
        Ok(next)
    }

    /// Set the count used by the next `generate`
    pub fn set_element_count(&mut self, count: usize) -> Result<(), ConfigError> {
        self.element_count = ElementCount::new(count)?;
        Ok(())
    }

    /// Shift the count used by the next `generate`, clamped into range
    pub fn adjust_element_count(&mut self, delta: isize) -> ElementCount {
        self.element_count = self.element_count.adjust(delta);
        self.element_count
    }

    /// Record a run of the selected algorithm over the current dataset.
    ///
    /// Datasets too small to need any frames complete immediately.
    pub fn start(&mut self) -> Result<RunSummary, ControlError> {
        self.ensure_not_running("start")?;

        let mut values = self.dataset.values().to_vec();
        let mut tracker = SortedRegion::new();
        let mut recorder = Recorder::new(values.clone());
        let frames = self.algorithm.run(&mut values, &mut tracker, &mut recorder);
        let recording = recorder.finish();

        debug_assert!(tracker.is_complete(values.len()));
        debug_assert!(Dataset::from(values).is_permutation_of(self.dataset.values()));
        info!(
            "Recorded {} over {} elements: {} frames, ~{} KiB",
            self.algorithm,
            self.dataset.len(),
            frames,
            recording.estimated_size() / 1024
        );

        self.sorted.clear();
        self.playback = Some(Playback::new(recording));
        self.state = RunState::Running;
        if frames == 0 {
            self.finish()?;
        }

        Ok(RunSummary {
            algorithm: self.algorithm,
            elements: self.dataset.len(),
            frames,
        })
    }

    /// Run the selected algorithm straight through `stepper`, which owns the
    /// timing between frames. The dataset is sorted in place and the run is
    /// complete when this returns.
    pub fn run_live(&mut self, stepper: &mut dyn Stepper) -> Result<RunSummary, ControlError> {
        self.ensure_not_running("start")?;
        self.playback = None;
        self.sorted.clear();
        self.state = RunState::Running;

        let algorithm = self.algorithm;
        let frames = algorithm.run(self.dataset.values_mut(), &mut self.sorted, stepper);

        self.state = RunState::Complete;
        info!("{} complete: {} frames", algorithm, frames);
        Ok(RunSummary {
            algorithm,
            elements: self.dataset.len(),
            frames,
        })
    }

    /// Apply the next frame. After the last frame one more call applies the
    /// trailing sorted marks and completes the run. Returns false once the
    /// run is complete.
    pub fn advance(&mut self) -> Result<bool, ControlError> {
        let playback = self.running_playback()?;
        // a running playback has not settled yet
        playback
            .step_forward()
            .map_err(|_| ControlError::NotRunning)?;
        if playback.is_finished() {
            self.complete();
            return Ok(false);
        }
        Ok(true)
    }

    /// Apply every remaining frame at once. Returns how many were applied.
    pub fn finish(&mut self) -> Result<usize, ControlError> {
        let applied = self.running_playback()?.jump_to_end();
        self.complete();
        Ok(applied)
    }

    fn running_playback(&mut self) -> Result<&mut Playback, ControlError> {
        match (self.state, self.playback.as_mut()) {
            (RunState::Running, Some(playback)) => Ok(playback),
            _ => Err(ControlError::NotRunning),
        }
    }

    /// Write the finished run back into the dataset
    fn complete(&mut self) {
        if let Some(playback) = self.playback.take() {
            let (values, sorted) = playback.into_parts();
            self.dataset.replace(values);
            self.sorted = sorted;
        }
        self.state = RunState::Complete;
        info!("{} complete", self.algorithm);
    }

    fn ensure_not_running(&self, action: &str) -> Result<(), ControlError> {
        if self.state == RunState::Running {
            warn!("Refused to {} while a sort is running", action);
            return Err(ControlError::RunInProgress);
        }
        Ok(())
    }

    // ========== Observable state for the renderer ==========

    pub fn values(&self) -> &[u32] {
        match &self.playback {
            Some(playback) => playback.values(),
            None => self.dataset.values(),
        }
    }

    pub fn active(&self) -> &[usize] {
        match &self.playback {
            Some(playback) => playback.active(),
            None => &[],
        }
    }

    pub fn sorted(&self) -> &SortedRegion {
        match &self.playback {
            Some(playback) => playback.sorted(),
            None => &self.sorted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn element_count(&self) -> ElementCount {
        self.element_count
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// `(frames applied, total frames)` of the run in flight
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.playback
            .as_ref()
            .map(|p| (p.position(), p.total_frames()))
    }
}
