//! The append-only recording model for completed strokes.

use std::cell::Cell;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Point;

/// Dedup identity of a committed step. The upper half is a per-tab session
/// nonce, the lower half a monotonic counter, so ids stay unique under
/// arbitrarily rapid strokes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StepId(pub u64);

pub struct StepIdGen {
    session: u32,
    counter: Cell<u32>,
}

impl StepIdGen {
    pub fn new(session: u32) -> Self {
        Self {
            session,
            counter: Cell::new(0),
        }
    }

    pub fn next(&self) -> StepId {
        let count = self.counter.get();
        self.counter.set(count.wrapping_add(1));
        StepId((u64::from(self.session) << 32) | u64::from(count))
    }
}

/// One committed stroke. Serde renames keep the stored wire shape
/// `{c, w, s, h}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoryStep {
    #[serde(rename = "c")]
    pub color: String,
    #[serde(rename = "w")]
    pub width: f64,
    #[serde(rename = "s")]
    pub points: Vec<Point>,
    #[serde(rename = "h")]
    pub id: StepId,
}

/// Stroke recorder for one tab.
///
/// Points accumulate while a stroke is live, `write` freezes them into a
/// pending [`StoryStep`], `save` promotes pending steps into the full story.
/// The `seen` index answers "has this tab already got step X" for cross-tab
/// replay exclusion; it covers both the full and the pending sequence.
pub struct Story {
    full: Vec<StoryStep>,
    pending: Vec<StoryStep>,
    accumulator: Vec<Point>,
    color: String,
    width: f64,
    seen: HashSet<StepId>,
    ids: StepIdGen,
}

impl Story {
    pub fn new(session: u32) -> Self {
        Self {
            full: Vec::new(),
            pending: Vec::new(),
            accumulator: Vec::new(),
            color: String::new(),
            width: 0.0,
            seen: HashSet::new(),
            ids: StepIdGen::new(session),
        }
    }

    pub fn accumulate(&mut self, x: f64, y: f64) {
        self.accumulator.push(Point { x, y });
    }

    /// Freeze the accumulated points into a pending step. Called once per
    /// completed stroke; a stray call with an empty accumulator still records
    /// an empty step, which the renderer skips.
    pub fn write(&mut self) {
        let step = StoryStep {
            color: self.color.clone(),
            width: self.width,
            points: std::mem::take(&mut self.accumulator),
            id: self.ids.next(),
        };
        self.seen.insert(step.id);
        self.pending.push(step);
    }

    pub fn save(&mut self) {
        self.full.append(&mut self.pending);
    }

    /// Replace the full story wholesale (clear passes an empty vec, startup
    /// passes the loaded snapshot). Rebuilds the seen index from what remains.
    pub fn update(&mut self, steps: Vec<StoryStep>) {
        self.full = steps;
        self.seen = self
            .full
            .iter()
            .chain(self.pending.iter())
            .map(|step| step.id)
            .collect();
    }

    /// Merge externally-persisted steps straight into the full story. They
    /// bypass `pending` since another tab already saved them.
    pub fn adopt(&mut self, steps: Vec<StoryStep>) {
        for step in steps {
            self.seen.insert(step.id);
            self.full.push(step);
        }
    }

    pub fn steps(&self) -> &[StoryStep] {
        &self.full
    }

    pub fn pending(&self) -> &[StoryStep] {
        &self.pending
    }

    pub fn contains(&self, id: StepId) -> bool {
        self.seen.contains(&id)
    }

    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}
