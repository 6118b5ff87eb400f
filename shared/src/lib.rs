mod events;
mod pointer;
mod replay;
mod session_format;
mod story;
mod sync;

pub use events::{BoardEvent, EventHub, EventKind, HandlerError};
pub use pointer::Pointer;
pub use replay::{draw_steps, StrokeSurface};
pub use session_format::{decode_story, decode_story_or_empty, encode_story, FormatError};
pub use story::{StepId, StepIdGen, Story, StoryStep};
pub use sync::new_steps;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
