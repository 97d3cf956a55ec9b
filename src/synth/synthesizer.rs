use crate::config::StyleTuning;
use crate::foundation::core::Fps;
use crate::foundation::rng::Rng64;
use crate::geometry::resolver::Geometry;
use crate::schedule::scheduler::AlignmentSpan;
use crate::synth::keyframe::Keyframe;
use crate::synth::style::{MovementStyle, ShapeState};

/// Everything the synthesizer reads; borrowed from the planning run.
#[derive(Clone, Copy, Debug)]
pub struct SynthInput<'a> {
    pub geometry: &'a Geometry,
    pub spans: &'a [AlignmentSpan],
    pub style: MovementStyle,
    pub duration: f64,
    pub fps: Fps,
    pub tuning: &'a StyleTuning,
}

/// Build the full keyframe sequence for one run.
///
/// Alignment spans become enter/exit keyframes at the geometry center. Every motion
/// interval between them (and before the first / after the last) receives a
/// style-specific number of intermediate keyframes, evenly spaced in time and capped so
/// that neighbouring keyframes stay at least one frame apart. Motion keyframes are added
/// at `0` and `duration` unless an alignment already sits there.
pub fn synthesize(input: &SynthInput<'_>, rng: &mut Rng64) -> Vec<Keyframe> {
    let center = input.geometry.center;
    let mut shape = ShapeState::new(input.style, input.geometry.travel, input.tuning, rng);
    let mut out: Vec<Keyframe> = Vec::with_capacity(input.spans.len() * 5 + 2);

    let starts_aligned = input.spans.first().is_some_and(|s| s.enter <= 0.0);
    if !starts_aligned {
        let (x, y) = shape.next_point(rng);
        out.push(Keyframe::motion(0.0, x, y, 0.0));
    }

    let mut cursor = 0.0;
    for span in input.spans {
        fill_interval(&mut out, &mut shape, input, cursor, span.enter, rng);
        out.push(Keyframe::alignment(span.enter, center.x, center.y));
        if !span.is_instant() {
            out.push(Keyframe::alignment(span.exit, center.x, center.y));
        }
        cursor = span.exit;
    }

    if cursor < input.duration {
        fill_interval(&mut out, &mut shape, input, cursor, input.duration, rng);
        let prev = out.last().map_or(0.0, |k| k.rotation);
        let rotation = shape.next_rotation(prev, rng);
        let (x, y) = shape.next_point(rng);
        out.push(Keyframe::motion(input.duration, x, y, rotation));
    }

    out
}

/// Intermediate keyframes strictly inside `(start, end)`.
fn fill_interval(
    out: &mut Vec<Keyframe>,
    shape: &mut ShapeState,
    input: &SynthInput<'_>,
    start: f64,
    end: f64,
    rng: &mut Rng64,
) {
    let len = end - start;
    if len <= 0.0 {
        return;
    }
    let wanted = input.style.intermediate_count(rng);
    let room = input.fps.secs_to_frames_floor(len).saturating_sub(1);
    let count = u64::from(wanted).min(room);

    let mut rotation = out.last().map_or(0.0, |k| k.rotation);
    for j in 1..=count {
        let t = start + len * (j as f64) / ((count + 1) as f64);
        rotation = shape.next_rotation(rotation, rng);
        let (x, y) = shape.next_point(rng);
        out.push(Keyframe::motion(t, x, y, rotation));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
