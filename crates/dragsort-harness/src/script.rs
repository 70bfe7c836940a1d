#![forbid(unsafe_code)]

//! Scripted gestures: replaying whole drags through the real input
//! path.
//!
//! A [`GestureScript`] is a list of steps (grab, move, release,
//! cancel). The runners translate each step into raw input samples,
//! push them through [`SampleNormalizer`] exactly as a host event
//! handler would, feed the controller, and replay every resulting
//! command onto a [`LayoutModel`]. The pointer and touch runners share
//! one driver, so the same script can prove both input paths reach the
//! same outcome.
//!
//! # JSONL Schema
//!
//! Each executed step appends one trace line:
//!
//! ```json
//! {"event":"grab","index":2,"cursor":25,"commands":1}
//! {"event":"move","cursor":14,"delta":-11,"commands":3,"net":-1}
//! {"event":"release","commands":1,"from":2,"to":1}
//! ```

use dragsort_core::config::ReorderConfig;
use dragsort_core::event::{
    InputSample, NormalizedInput, PointerSample, SampleNormalizer, SamplePhase, TouchPoint,
    TouchSample,
};
use dragsort_engine::commit::{ApplyError, ReorderOp};
use dragsort_engine::controller::Reorderer;
use dragsort_engine::visual::VisualCommand;

use crate::layout::LayoutModel;

/// Finger id used for every scripted touch sample.
const SCRIPT_FINGER: u64 = 7;

/// One step of a scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    /// Press on row `index`, cursor at its current visual midpoint.
    Grab { index: usize },
    /// Move the cursor by `dy`.
    MoveBy { dy: f64 },
    /// Move the cursor to absolute position `y`.
    MoveTo { y: f64 },
    /// Lift the pointer.
    Release,
    /// Abort the gesture.
    Cancel,
}

/// Ordered gesture steps, built fluently.
#[derive(Debug, Clone, Default)]
pub struct GestureScript {
    steps: Vec<ScriptStep>,
}

impl GestureScript {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a grab on row `index`.
    #[must_use]
    pub fn grab(mut self, index: usize) -> Self {
        self.steps.push(ScriptStep::Grab { index });
        self
    }

    /// Appends a relative move.
    #[must_use]
    pub fn move_by(mut self, dy: f64) -> Self {
        self.steps.push(ScriptStep::MoveBy { dy });
        self
    }

    /// Appends a move to an absolute position.
    #[must_use]
    pub fn move_to(mut self, y: f64) -> Self {
        self.steps.push(ScriptStep::MoveTo { y });
        self
    }

    /// Appends a release.
    #[must_use]
    pub fn release(mut self) -> Self {
        self.steps.push(ScriptStep::Release);
        self
    }

    /// Appends a cancel.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.steps.push(ScriptStep::Cancel);
        self
    }

    /// The steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }
}

/// JSONL record for one executed script step.
pub struct TraceEntry {
    pub event: &'static str,
    pub index: Option<usize>,
    pub cursor: Option<f64>,
    pub delta: Option<f64>,
    pub commands: Option<usize>,
    pub net: Option<isize>,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

impl TraceEntry {
    pub fn to_jsonl(&self) -> String {
        let mut parts = vec![format!(r#""event":"{}""#, self.event)];
        if let Some(index) = self.index {
            parts.push(format!(r#""index":{index}"#));
        }
        if let Some(cursor) = self.cursor {
            parts.push(format!(r#""cursor":{cursor}"#));
        }
        if let Some(delta) = self.delta {
            parts.push(format!(r#""delta":{delta}"#));
        }
        if let Some(commands) = self.commands {
            parts.push(format!(r#""commands":{commands}"#));
        }
        if let Some(net) = self.net {
            parts.push(format!(r#""net":{net}"#));
        }
        if let Some(from) = self.from {
            parts.push(format!(r#""from":{from}"#));
        }
        if let Some(to) = self.to {
            parts.push(format!(r#""to":{to}"#));
        }
        format!("{{{}}}", parts.join(","))
    }
}

/// Everything a script run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    /// Every command the controller emitted, in order.
    pub commands: Vec<VisualCommand>,
    /// The committed reorder, if the run released with a net change.
    pub op: Option<ReorderOp>,
    /// One JSONL line per executed step.
    pub trace: Vec<String>,
}

impl ScriptReport {
    /// Whether the run changed the list order.
    #[must_use]
    pub const fn committed(&self) -> bool {
        self.op.is_some()
    }
}

/// Runs `script` with mouse-style pointer samples.
pub fn run_pointer_script(
    model: &mut LayoutModel,
    config: ReorderConfig,
    script: &GestureScript,
) -> Result<ScriptReport, ApplyError> {
    run_script(model, config, script, |phase, cursor, delta| {
        InputSample::Pointer(PointerSample::new(phase, 0.0, cursor).with_movement(delta))
    })
}

/// Runs `script` with single-finger touch samples.
///
/// Touch samples carry no movement of their own; the normalizer
/// derives deltas from consecutive positions of the same finger.
pub fn run_touch_script(
    model: &mut LayoutModel,
    config: ReorderConfig,
    script: &GestureScript,
) -> Result<ScriptReport, ApplyError> {
    run_script(model, config, script, |phase, cursor, _delta| {
        InputSample::Touch(TouchSample::new(
            phase,
            TouchPoint::new(SCRIPT_FINGER, 0.0, cursor),
        ))
    })
}

fn run_script<F>(
    model: &mut LayoutModel,
    config: ReorderConfig,
    script: &GestureScript,
    mut sample_for: F,
) -> Result<ScriptReport, ApplyError>
where
    F: FnMut(SamplePhase, f64, f64) -> InputSample,
{
    let mut reorderer = Reorderer::new(config);
    let mut normalizer = SampleNormalizer::new();
    let mut cursor = 0.0;
    let mut report = ScriptReport {
        commands: Vec::new(),
        op: None,
        trace: Vec::new(),
    };

    for step in script.steps() {
        // Grab, release, and cancel handle themselves; the move arms
        // reduce to a delta and share the movement body below.
        let dy = match *step {
            ScriptStep::Grab { index } => {
                if index >= model.len() {
                    continue;
                }
                cursor = model.visual_midpoint(index);
                let sample = sample_for(SamplePhase::Down, cursor, 0.0);
                if let NormalizedInput::Press { cursor_pos } = normalizer.normalize(&sample) {
                    let commands = reorderer.on_grab(model, index, cursor_pos);
                    model.apply_all(&commands);
                    report.trace.push(
                        TraceEntry {
                            event: "grab",
                            index: Some(index),
                            cursor: Some(cursor_pos),
                            delta: None,
                            commands: Some(commands.len()),
                            net: None,
                            from: None,
                            to: None,
                        }
                        .to_jsonl(),
                    );
                    report.commands.extend(commands);
                }
                continue;
            }
            ScriptStep::Release => {
                let sample = sample_for(SamplePhase::Up, cursor, 0.0);
                if matches!(normalizer.normalize(&sample), NormalizedInput::Release) {
                    let outcome = reorderer.on_release();
                    model.apply_all(&outcome.commands);
                    if let Some(op) = outcome.op {
                        model.commit(op)?;
                    }
                    report.trace.push(
                        TraceEntry {
                            event: "release",
                            index: None,
                            cursor: None,
                            delta: None,
                            commands: Some(outcome.commands.len()),
                            net: None,
                            from: outcome.op.map(|op| op.from),
                            to: outcome.op.map(|op| op.to),
                        }
                        .to_jsonl(),
                    );
                    report.commands.extend(outcome.commands);
                    report.op = outcome.op;
                }
                continue;
            }
            ScriptStep::Cancel => {
                let sample = sample_for(SamplePhase::Cancel, cursor, 0.0);
                if matches!(normalizer.normalize(&sample), NormalizedInput::Cancel) {
                    let commands = reorderer.cancel();
                    model.apply_all(&commands);
                    report.trace.push(
                        TraceEntry {
                            event: "cancel",
                            index: None,
                            cursor: None,
                            delta: None,
                            commands: Some(commands.len()),
                            net: None,
                            from: None,
                            to: None,
                        }
                        .to_jsonl(),
                    );
                    report.commands.extend(commands);
                }
                continue;
            }
            ScriptStep::MoveBy { dy } => dy,
            ScriptStep::MoveTo { y } => y - cursor,
        };

        cursor += dy;
        let sample = sample_for(SamplePhase::Move, cursor, dy);
        if let NormalizedInput::Move(input) = normalizer.normalize(&sample) {
            let commands = reorderer.on_move(model, input.cursor_pos, input.movement_delta);
            model.apply_all(&commands);
            let net = reorderer.session().map_or(0, |session| session.net_change());
            report.trace.push(
                TraceEntry {
                    event: "move",
                    index: None,
                    cursor: Some(input.cursor_pos),
                    delta: Some(input.movement_delta),
                    commands: Some(commands.len()),
                    net: Some(net),
                    from: None,
                    to: None,
                }
                .to_jsonl(),
            );
            report.commands.extend(commands);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_steps_in_order() {
        let script = GestureScript::new().grab(2).move_by(-11.0).release();
        assert_eq!(
            script.steps(),
            &[
                ScriptStep::Grab { index: 2 },
                ScriptStep::MoveBy { dy: -11.0 },
                ScriptStep::Release,
            ]
        );
    }

    #[test]
    fn pointer_script_drives_a_drag_to_commit() {
        let mut model = LayoutModel::uniform(5, 10.0);
        let script = GestureScript::new().grab(2).move_by(-11.0).release();
        let report =
            run_pointer_script(&mut model, ReorderConfig::default(), &script).unwrap();

        assert_eq!(report.op, Some(ReorderOp { from: 2, to: 1 }));
        assert!(report.committed());
        assert!(model.is_clean(), "release must unwind every visual");
        assert_eq!(report.trace.len(), 3);
    }

    #[test]
    fn touch_script_reaches_the_same_commit_as_pointer() {
        let script = GestureScript::new().grab(1).move_by(12.0).move_by(10.0).release();

        let mut pointer_model = LayoutModel::uniform(5, 10.0);
        let pointer =
            run_pointer_script(&mut pointer_model, ReorderConfig::default(), &script).unwrap();

        let mut touch_model = LayoutModel::uniform(5, 10.0);
        let touch =
            run_touch_script(&mut touch_model, ReorderConfig::default(), &script).unwrap();

        assert_eq!(pointer.op, touch.op);
        assert_eq!(pointer.commands, touch.commands);
    }

    #[test]
    fn cancel_leaves_the_model_clean_and_uncommitted() {
        let mut model = LayoutModel::uniform(5, 10.0);
        let script = GestureScript::new().grab(2).move_by(-11.0).cancel();
        let report =
            run_pointer_script(&mut model, ReorderConfig::default(), &script).unwrap();

        assert_eq!(report.op, None);
        assert!(model.is_clean());
    }

    #[test]
    fn trace_lines_are_json_objects() {
        let entry = TraceEntry {
            event: "move",
            index: None,
            cursor: Some(14.0),
            delta: Some(-11.0),
            commands: Some(3),
            net: Some(-1),
            from: None,
            to: None,
        };
        assert_eq!(
            entry.to_jsonl(),
            r#"{"event":"move","cursor":14,"delta":-11,"commands":3,"net":-1}"#
        );
    }
}
