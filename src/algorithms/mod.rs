//! Sorting drivers
//!
//! Each driver sorts ascending through an [`Emitter`], publishing a frame for
//! every comparison or move it wants the viewer to see. Drivers only reorder
//! existing magnitudes, so the dataset stays a permutation of its input at
//! every frame.
//!
//! | Driver | Frames | Sorted marks |
//! |---|---|---|
//! | [`bubble`] | every adjacent comparison | last slot of each pass |
//! | [`insertion`] | every adjacent swap | all at the end |
//! | [`selection`] | every comparison | slot `i` after each pass |
//! | [`merge`] | every comparison of run fronts | all at the end |
//! | [`quick`] | every comparison, swap and pivot placement | each pivot |
//! | [`heap`] | every swap | each slot taken from the heap |
//!
//! Every driver finishes by marking the full range sorted.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::frame::{Emitter, Stepper};
use crate::tracker::SortedRegion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which driver a run uses
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Merge,
    Bubble,
    Insertion,
    Selection,
    Quick,
    Heap,
}

impl Algorithm {
    /// Display order, matching the selector in the controls pane
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Merge,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).unwrap_or(0)
    }

    /// Next algorithm in display order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in display order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sort `values` in place, publishing frames to `stepper`.
    ///
    /// On return `sorted` covers every index and any trailing changes have
    /// been settled. Returns the number of frames emitted.
    pub fn run(
        self,
        values: &mut [u32],
        sorted: &mut SortedRegion,
        stepper: &mut dyn Stepper,
    ) -> usize {
        let mut em = Emitter::new(values, sorted, stepper);
        match self {
            Algorithm::Merge => merge::sort(&mut em),
            Algorithm::Bubble => bubble::sort(&mut em),
            Algorithm::Insertion => insertion::sort(&mut em),
            Algorithm::Selection => selection::sort(&mut em),
            Algorithm::Quick => quick::sort(&mut em),
            Algorithm::Heap => heap::sort(&mut em),
        }
        em.settle();
        em.frames()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
