//! Replays stored steps onto a rendering surface.
//!
//! Replay writes straight to the surface and never goes through the
//! event-emitting style setters, so redrawing another tab's strokes cannot
//! feed back into the local recorder.

use crate::story::StoryStep;

pub trait StrokeSurface {
    fn begin_path(&mut self);
    fn set_stroke_color(&mut self, color: &str);
    fn set_stroke_width(&mut self, width: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

/// Draw each step as one polyline path. Steps with no points are skipped.
pub fn draw_steps(steps: &[StoryStep], surface: &mut dyn StrokeSurface) {
    for step in steps {
        let Some(first) = step.points.first() else {
            continue;
        };
        surface.begin_path();
        surface.set_stroke_width(step.width);
        surface.set_stroke_color(&step.color);
        surface.move_to(first.x, first.y);
        for point in &step.points {
            surface.line_to(point.x, point.y);
        }
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StepId;
    use crate::Point;

    #[derive(Debug, PartialEq)]
    enum Call {
        BeginPath,
        Color(String),
        Width(f64),
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl StrokeSurface for RecordingSurface {
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn set_stroke_color(&mut self, color: &str) {
            self.calls.push(Call::Color(color.to_string()));
        }
        fn set_stroke_width(&mut self, width: f64) {
            self.calls.push(Call::Width(width));
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }
        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
    }

    fn step(points: Vec<Point>) -> StoryStep {
        StoryStep {
            color: "red".to_string(),
            width: 3.0,
            points,
            id: StepId(1),
        }
    }

    #[test]
    fn empty_step_produces_no_calls() {
        let mut surface = RecordingSurface::default();
        draw_steps(&[step(Vec::new())], &mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn step_draws_one_path_through_all_points() {
        let mut surface = RecordingSurface::default();
        draw_steps(
            &[step(vec![
                Point { x: 0.0, y: 0.0 },
                Point { x: 4.0, y: 5.0 },
            ])],
            &mut surface,
        );
        assert_eq!(
            surface.calls,
            vec![
                Call::BeginPath,
                Call::Width(3.0),
                Call::Color("red".to_string()),
                Call::MoveTo(0.0, 0.0),
                Call::LineTo(0.0, 0.0),
                Call::LineTo(4.0, 5.0),
                Call::Stroke,
            ]
        );
    }

    #[test]
    fn empty_steps_are_skipped_between_real_ones() {
        let mut surface = RecordingSurface::default();
        draw_steps(
            &[
                step(vec![Point { x: 1.0, y: 1.0 }]),
                step(Vec::new()),
                step(vec![Point { x: 2.0, y: 2.0 }]),
            ],
            &mut surface,
        );
        let strokes = surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Stroke))
            .count();
        assert_eq!(strokes, 2);
    }
}
