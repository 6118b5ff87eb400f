//! Stored story wire format: a JSON array of `{c, w, s, h}` objects under a
//! single localStorage key.

use thiserror::Error;

use crate::story::StoryStep;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid story payload: {0}")]
    Invalid(#[from] serde_json::Error),
}

pub fn encode_story(steps: &[StoryStep]) -> String {
    serde_json::to_string(steps).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_story(payload: &str) -> Result<Vec<StoryStep>, FormatError> {
    Ok(serde_json::from_str(payload)?)
}

/// Lenient decode for startup: a missing or unreadable payload falls back to
/// an empty story instead of failing.
pub fn decode_story_or_empty(payload: Option<&str>) -> Vec<StoryStep> {
    let Some(text) = payload else {
        return Vec::new();
    };
    match decode_story(text) {
        Ok(steps) => steps,
        Err(error) => {
            log::warn!("discarding unreadable story payload: {error}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StepId;
    use crate::Point;

    fn sample() -> Vec<StoryStep> {
        vec![
            StoryStep {
                color: "black".to_string(),
                width: 1.0,
                points: vec![Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }],
                id: StepId(0x0000_0007_0000_0000),
            },
            StoryStep {
                color: "red".to_string(),
                width: 6.0,
                points: Vec::new(),
                id: StepId(0x0000_0007_0000_0001),
            },
        ]
    }

    #[test]
    fn round_trip_is_field_for_field() {
        let steps = sample();
        let decoded = decode_story(&encode_story(&steps)).unwrap();
        assert_eq!(decoded, steps);
    }

    #[test]
    fn wire_uses_short_field_names() {
        let payload = encode_story(&sample()[..1]);
        assert!(payload.contains("\"c\":\"black\""));
        assert!(payload.contains("\"w\":1.0") || payload.contains("\"w\":1"));
        assert!(payload.contains("\"s\":[{"));
        assert!(payload.contains("\"h\":"));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(decode_story("not json").is_err());
        assert!(decode_story("{\"c\":1}").is_err());
    }

    #[test]
    fn missing_or_garbage_payload_falls_back_to_empty() {
        assert!(decode_story_or_empty(None).is_empty());
        assert!(decode_story_or_empty(Some("not json")).is_empty());
        assert_eq!(decode_story_or_empty(Some("[]")), Vec::new());
    }

    #[test]
    fn saved_scenario_encodes_one_element_array() {
        let mut story = crate::Story::new(7);
        story.set_color("black");
        story.set_width(1.0);
        story.accumulate(0.0, 0.0);
        story.accumulate(1.0, 1.0);
        story.accumulate(2.0, 2.0);
        story.write();
        story.save();

        assert!(story.pending().is_empty());
        let decoded = decode_story(&encode_story(story.steps())).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].points.len(), 3);
        assert_eq!(decoded[0].color, "black");
        assert_eq!(decoded[0].width, 1.0);
    }
}
