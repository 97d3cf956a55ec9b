use crate::foundation::core::{EPSILON, Point, approx_eq};
use crate::foundation::error::{PlanError, PlanResult};
use crate::geometry::resolver::TravelBounds;
use crate::schedule::scheduler::AlignmentSpan;
use crate::synth::keyframe::Keyframe;

/// What a keyframe sequence is checked against.
#[derive(Clone, Copy, Debug)]
pub struct ValidationTarget<'a> {
    pub duration: f64,
    pub travel: &'a TravelBounds,
    pub center: Point,
    pub spans: &'a [AlignmentSpan],
}

/// Check synthesizer output before it reaches the compiler.
///
/// Any failure here is a defect in plan construction, so nothing is clamped or repaired.
pub fn validate_keyframes(keyframes: &[Keyframe], target: &ValidationTarget<'_>) -> PlanResult<()> {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return Err(PlanError::invariant("keyframe sequence is empty"));
    };
    if keyframes.len() < 2 {
        return Err(PlanError::invariant(
            "keyframe sequence needs at least two keyframes",
        ));
    }
    if !approx_eq(first.time, 0.0) {
        return Err(PlanError::invariant(format!(
            "first keyframe at {}s, expected 0",
            first.time
        )));
    }
    if !approx_eq(last.time, target.duration) {
        return Err(PlanError::invariant(format!(
            "last keyframe at {}s, expected {}",
            last.time, target.duration
        )));
    }

    for (i, w) in keyframes.windows(2).enumerate() {
        if !(w[1].time > w[0].time) {
            return Err(PlanError::invariant(format!(
                "keyframe {} at {}s does not follow {}s",
                i + 1,
                w[1].time,
                w[0].time
            )));
        }
    }

    for (i, k) in keyframes.iter().enumerate() {
        if !(k.x.is_finite() && k.y.is_finite() && k.rotation.is_finite()) {
            return Err(PlanError::invariant(format!(
                "keyframe {i} has non-finite values"
            )));
        }
        if k.is_alignment {
            if k.x != target.center.x || k.y != target.center.y || k.rotation != 0.0 {
                return Err(PlanError::invariant(format!(
                    "alignment keyframe {i} at ({}, {}, {}deg) is not the center ({}, {}, 0deg)",
                    k.x, k.y, k.rotation, target.center.x, target.center.y
                )));
            }
        } else if !target.travel.contains(k.x, k.y, EPSILON) {
            return Err(PlanError::invariant(format!(
                "keyframe {i} at ({}, {}) leaves travel bounds",
                k.x, k.y
            )));
        }
    }

    validate_holds(keyframes, target.spans)
}

/// Every span maps onto adjacent alignment keyframes, and nothing else is an alignment.
fn validate_holds(keyframes: &[Keyframe], spans: &[AlignmentSpan]) -> PlanResult<()> {
    let mut matched = 0usize;
    let mut idx = 0usize;
    for (n, span) in spans.iter().enumerate() {
        let Some(enter) = keyframes[idx..]
            .iter()
            .position(|k| k.is_alignment && k.time == span.enter)
            .map(|p| p + idx)
        else {
            return Err(PlanError::invariant(format!(
                "alignment {n} enter at {}s has no keyframe",
                span.enter
            )));
        };

        if span.is_instant() {
            matched += 1;
            idx = enter + 1;
            continue;
        }

        let exit = enter + 1;
        let Some(k_exit) = keyframes.get(exit) else {
            return Err(PlanError::invariant(format!(
                "alignment {n} exit at {}s has no keyframe",
                span.exit
            )));
        };
        let k_enter = &keyframes[enter];
        if !k_exit.is_alignment || k_exit.time != span.exit {
            return Err(PlanError::invariant(format!(
                "alignment {n} exit at {}s is not the keyframe after its enter",
                span.exit
            )));
        }
        if (k_enter.x, k_enter.y, k_enter.rotation) != (k_exit.x, k_exit.y, k_exit.rotation) {
            return Err(PlanError::invariant(format!(
                "alignment {n} moves during its hold"
            )));
        }
        matched += 2;
        idx = exit + 1;
    }

    let total = keyframes.iter().filter(|k| k.is_alignment).count();
    if total != matched {
        return Err(PlanError::invariant(format!(
            "{} alignment keyframes do not belong to any scheduled span",
            total - matched
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/validate/validator.rs"]
mod tests;
