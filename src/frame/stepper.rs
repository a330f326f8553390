//! Frame consumers
//!
//! A [`Stepper`] receives every frame a driver emits and owns the timing
//! between them. The driver resumes as soon as `frame` returns, so a stepper
//! that returns immediately runs the whole sort synchronously.

use super::Frame;
use std::io::Write;
use std::thread;
use std::time::Duration;

pub trait Stepper {
    /// Consume one frame. The emitting driver is suspended until this returns.
    fn frame(&mut self, frame: &Frame<'_>);

    /// Consume the trailing state changes published after the last frame.
    /// These are applied without a pause and do not count as a frame.
    fn settle(&mut self, _frame: &Frame<'_>) {}
}

impl<S: Stepper + ?Sized> Stepper for &mut S {
    fn frame(&mut self, frame: &Frame<'_>) {
        (**self).frame(frame);
    }

    fn settle(&mut self, frame: &Frame<'_>) {
        (**self).settle(frame);
    }
}

/// Owned copy of a published frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub values: Vec<u32>,
    pub active: Vec<usize>,
    /// Sorted region in ascending order
    pub sorted: Vec<usize>,
    /// Number of element writes folded into this frame
    pub changes: usize,
}

impl From<&Frame<'_>> for FrameSnapshot {
    fn from(frame: &Frame<'_>) -> Self {
        FrameSnapshot {
            values: frame.values.to_vec(),
            active: frame.active.to_vec(),
            sorted: frame.sorted.to_sorted_vec(),
            changes: frame.changes.len(),
        }
    }
}

/// Zero-delay stepper keeping a full snapshot of every frame
///
/// Memory grows with frames × elements, so this is meant for small inputs.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub frames: Vec<FrameSnapshot>,
    pub settled: Option<FrameSnapshot>,
}

impl Trace {
    /// Final observable magnitudes, or `None` if nothing was ever published
    pub fn final_values(&self) -> Option<&[u32]> {
        self.settled
            .as_ref()
            .or(self.frames.last())
            .map(|f| f.values.as_slice())
    }

    /// Frames whose element writes changed the dataset
    pub fn mutating_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.changes > 0).count()
    }
}

impl Stepper for Trace {
    fn frame(&mut self, frame: &Frame<'_>) {
        self.frames.push(FrameSnapshot::from(frame));
    }

    fn settle(&mut self, frame: &Frame<'_>) {
        self.settled = Some(FrameSnapshot::from(frame));
    }
}

/// Forwards to an inner stepper and then blocks for `delay` after each frame
#[derive(Debug)]
pub struct Paced<S> {
    inner: S,
    delay: Duration,
}

impl<S: Stepper> Paced<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Paced { inner, delay }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stepper> Stepper for Paced<S> {
    fn frame(&mut self, frame: &Frame<'_>) {
        self.inner.frame(frame);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn settle(&mut self, frame: &Frame<'_>) {
        self.inner.settle(frame);
    }
}

/// Writes one line per frame: frame number, highlight, then the values with
/// active elements in brackets and sorted ones suffixed by `*`
pub struct TextStepper<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> TextStepper<W> {
    pub fn new(out: W) -> Self {
        TextStepper { out, failed: false }
    }

    /// True if any write to the output failed
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, label: &str, frame: &Frame<'_>) {
        if self.failed {
            return;
        }
        let cells: Vec<String> = frame
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mark = if frame.sorted.contains(i) { "*" } else { "" };
                if frame.active.contains(&i) {
                    format!("[{}]{}", v, mark)
                } else {
                    format!("{}{}", v, mark)
                }
            })
            .collect();
        if let Err(e) = writeln!(self.out, "{:>6} {}", label, cells.join(" ")) {
            tracing::warn!("Frame output failed: {}", e);
            self.failed = true;
        }
    }
}

impl<W: Write> Stepper for TextStepper<W> {
    fn frame(&mut self, frame: &Frame<'_>) {
        let label = frame.number.to_string();
        self.write_line(&label, frame);
    }

    fn settle(&mut self, frame: &Frame<'_>) {
        self.write_line("done", frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Emitter;
    use crate::tracker::SortedRegion;
    use std::time::Instant;

    #[test]
    fn test_text_stepper_marks_active_and_sorted() {
        let mut values = vec![2, 1];
        let mut sorted = SortedRegion::new();
        let mut text = TextStepper::new(Vec::new());
        {
            let mut em = Emitter::new(&mut values, &mut sorted, &mut text);
            em.swap(0, 1);
            em.emit(&[0, 1]);
            em.mark_all_sorted();
            em.settle();
        }
        let output = String::from_utf8(text.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim(), "0 [1] [2]");
        assert_eq!(lines[1].trim(), "done 1* 2*");
    }

    #[test]
    fn test_paced_waits_after_each_frame() {
        let mut values = vec![1, 2, 3];
        let mut sorted = SortedRegion::new();
        let mut paced = Paced::new(Trace::default(), Duration::from_millis(5));
        let started = Instant::now();
        {
            let mut em = Emitter::new(&mut values, &mut sorted, &mut paced);
            em.emit(&[0, 1]);
            em.emit(&[1, 2]);
        }
        assert!(started.elapsed() >= Duration::from_millis(10));
        assert_eq!(paced.into_inner().frames.len(), 2);
    }
}
