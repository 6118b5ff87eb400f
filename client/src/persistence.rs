use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

use inktale_shared::{decode_story_or_empty, encode_story, StoryStep};

/// The whole story lives under this one key as a JSON array of steps.
pub const STORAGE_KEY: &str = "inktale.story";

pub fn local_storage(window: &Window) -> Result<Storage, JsValue> {
    window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("Missing localStorage"))
}

/// Missing key or an unreadable payload both come back as an empty story.
pub fn load_story(storage: &Storage) -> Vec<StoryStep> {
    let payload = storage.get_item(STORAGE_KEY).ok().flatten();
    decode_story_or_empty(payload.as_deref())
}

pub fn save_story(storage: &Storage, steps: &[StoryStep]) {
    if storage.set_item(STORAGE_KEY, &encode_story(steps)).is_err() {
        web_sys::console::warn_1(&"Failed to write story to localStorage".into());
    }
}
