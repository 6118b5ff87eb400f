//! Cross-tab snapshot diffing.

use crate::story::{Story, StoryStep};

/// Keep the steps from a persisted snapshot that this tab has not seen yet.
/// Snapshot order is preserved.
pub fn new_steps(snapshot: Vec<StoryStep>, story: &Story) -> Vec<StoryStep> {
    snapshot
        .into_iter()
        .filter(|step| !story.contains(step.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StepId;
    use crate::Point;

    fn step(id: u64) -> StoryStep {
        StoryStep {
            color: "black".to_string(),
            width: 1.0,
            points: vec![Point { x: 0.0, y: 0.0 }],
            id: StepId(id),
        }
    }

    #[test]
    fn only_unseen_steps_are_new() {
        let mut story = Story::new(1);
        story.update(vec![step(1)]);

        let fresh = new_steps(vec![step(1), step(2)], &story);
        assert_eq!(fresh, vec![step(2)]);

        story.adopt(fresh);
        assert_eq!(story.steps(), &[step(1), step(2)]);
    }

    #[test]
    fn identical_snapshot_yields_nothing() {
        let mut story = Story::new(1);
        story.update(vec![step(1), step(2)]);
        assert!(new_steps(vec![step(1), step(2)], &story).is_empty());
    }

    #[test]
    fn pending_steps_count_as_seen() {
        let mut story = Story::new(1);
        story.accumulate(0.0, 0.0);
        story.write();
        let own = story.pending()[0].clone();

        assert!(new_steps(vec![own], &story).is_empty());
    }

    #[test]
    fn snapshot_order_is_preserved() {
        let story = Story::new(1);
        let fresh = new_steps(vec![step(3), step(1), step(2)], &story);
        let ids: Vec<_> = fresh.iter().map(|step| step.id).collect();
        assert_eq!(ids, vec![StepId(3), StepId(1), StepId(2)]);
    }
}
