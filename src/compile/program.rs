use crate::foundation::error::{PlanError, PlanResult};
use crate::synth::keyframe::{Axis, Keyframe};

/// One half-open interval `[start, end)` of a piecewise-linear channel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Linear {
        start: f64,
        end: f64,
        v0: f64,
        v1: f64,
    },
    /// Zero-length interval or a hold where both ends carry the same value.
    Constant { start: f64, end: f64, value: f64 },
}

impl Segment {
    pub fn end(&self) -> f64 {
        match *self {
            Self::Linear { end, .. } | Self::Constant { end, .. } => end,
        }
    }

    pub fn eval(&self, t: f64) -> f64 {
        match *self {
            Self::Linear { start, end, v0, v1 } => v0 + ((v1 - v0) / (end - start)) * (t - start),
            Self::Constant { value, .. } => value,
        }
    }
}

/// Ordered segment list for one axis plus the value held after the last keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisProgram {
    pub axis: Axis,
    pub segments: Vec<Segment>,
    pub tail: f64,
}

impl AxisProgram {
    /// Value at `t`: the first segment whose end lies after `t`, otherwise the tail.
    pub fn eval(&self, t: f64) -> f64 {
        self.segments
            .iter()
            .find(|s| t < s.end())
            .map_or(self.tail, |s| s.eval(t))
    }

    /// Time after which the tail value applies.
    pub fn last_time(&self) -> f64 {
        self.segments.last().map_or(0.0, Segment::end)
    }
}

/// Lower one channel of a keyframe sequence into segments.
pub fn build_axis_program(keyframes: &[Keyframe], axis: Axis) -> PlanResult<AxisProgram> {
    if keyframes.len() < 2 {
        return Err(PlanError::EmptyPlan {
            keyframes: keyframes.len(),
        });
    }

    let mut segments = Vec::with_capacity(keyframes.len() - 1);
    for (i, pair) in keyframes.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        if !(b.time >= a.time) {
            return Err(PlanError::NonMonotonicTime {
                index: i + 1,
                prev: a.time,
                next: b.time,
            });
        }
        let (v0, v1) = (a.channel(axis), b.channel(axis));
        let seg = if b.time == a.time || v0 == v1 {
            Segment::Constant {
                start: a.time,
                end: b.time,
                value: v0,
            }
        } else {
            Segment::Linear {
                start: a.time,
                end: b.time,
                v0,
                v1,
            }
        };
        segments.push(seg);
    }

    let tail = keyframes[keyframes.len() - 1].channel(axis);
    Ok(AxisProgram {
        axis,
        segments,
        tail,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/program.rs"]
mod tests;
