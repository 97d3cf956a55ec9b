//! End-to-end planning: geometry, style, schedule, path, validation.

use crate::config::{SchedulePolicy, StyleTuning};
use crate::foundation::core::{Dimensions, Fps, Point};
use crate::foundation::error::PlanResult;
use crate::foundation::math::Fnv1a64;
use crate::foundation::rng::Rng64;
use crate::geometry::resolver::{Geometry, GeometryInput, TravelBounds, resolve_geometry};
use crate::schedule::scheduler::{AlignmentReport, AlignmentSpan, schedule_alignments};
use crate::synth::keyframe::Keyframe;
use crate::synth::style::{MovementStyle, resolve_style};
use crate::synth::synthesizer::{SynthInput, synthesize};
use crate::validate::validator::{ValidationTarget, validate_keyframes};

pub use crate::compile::compiler::compile_plan;

/// Inputs for one planning run, already range-checked by [`crate::PlanConfig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanRequest {
    pub frame: Dimensions,
    pub piece: Dimensions,
    pub duration_secs: f64,
    pub fps: Fps,
    pub num_alignments: Option<u32>,
    /// `chaotic`, `rotating`, `zigzag` or `random`, case-insensitive.
    pub movement_style: String,
    pub hold_secs: f64,
    pub margin_top: f64,
    pub piece_scale: f64,
    pub schedule: SchedulePolicy,
    pub style: StyleTuning,
}

/// A validated keyframe sequence plus the metadata it was built from.
///
/// Only [`plan_motion`] constructs plans, so every instance has passed validation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MotionPlan {
    style: MovementStyle,
    duration: f64,
    fps: Fps,
    geometry: Geometry,
    spans: Vec<AlignmentSpan>,
    report: AlignmentReport,
    keyframes: Vec<Keyframe>,
}

impl MotionPlan {
    pub fn style(&self) -> MovementStyle {
        self.style
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn frame(&self) -> Dimensions {
        self.geometry.frame
    }

    /// Scaled piece size.
    pub fn piece(&self) -> Dimensions {
        self.geometry.piece
    }

    pub fn travel(&self) -> &TravelBounds {
        &self.geometry.travel
    }

    pub fn center(&self) -> Point {
        self.geometry.center
    }

    pub fn spans(&self) -> &[AlignmentSpan] {
        &self.spans
    }

    pub fn report(&self) -> AlignmentReport {
        self.report
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Stable digest of the path; equal seeds and requests give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.style.name().as_bytes());
        h.write_f64(self.duration);
        h.write_u64(self.keyframes.len() as u64);
        for k in &self.keyframes {
            h.write_f64(k.time);
            h.write_f64(k.x);
            h.write_f64(k.y);
            h.write_f64(k.rotation);
            h.write_u8(u8::from(k.is_alignment));
        }
        h.finish()
    }
}

/// Result of [`plan_motion`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanOutcome {
    pub plan: MotionPlan,
    /// Requested versus granted alignment count.
    pub report: AlignmentReport,
}

/// Build and validate a motion plan.
///
/// All randomness (style resolution, alignment count, jitter, path shape) is drawn from
/// `rng`, so a fixed seed reproduces the plan exactly.
#[tracing::instrument(
    skip_all,
    fields(style = %req.movement_style, duration = req.duration_secs)
)]
pub fn plan_motion(req: &PlanRequest, rng: &mut Rng64) -> PlanResult<PlanOutcome> {
    req.schedule.validate()?;
    req.style.validate()?;
    let fps = Fps::new(req.fps.num, req.fps.den)?;

    let geometry = resolve_geometry(&GeometryInput {
        frame: req.frame,
        piece: req.piece,
        piece_scale: req.piece_scale,
        margin_top: req.margin_top,
    })?;
    let style = resolve_style(&req.movement_style, rng)?;
    let schedule = schedule_alignments(
        req.duration_secs,
        req.num_alignments,
        req.hold_secs,
        &req.schedule,
        rng,
    )?;
    tracing::debug!(
        style = %style,
        alignments = schedule.report.granted,
        "resolved style and schedule"
    );

    let keyframes = synthesize(
        &SynthInput {
            geometry: &geometry,
            spans: &schedule.spans,
            style,
            duration: req.duration_secs,
            fps,
            tuning: &req.style,
        },
        rng,
    );
    validate_keyframes(
        &keyframes,
        &ValidationTarget {
            duration: req.duration_secs,
            travel: &geometry.travel,
            center: geometry.center,
            spans: &schedule.spans,
        },
    )?;
    tracing::debug!(keyframes = keyframes.len(), "plan validated");

    let report = schedule.report;
    Ok(PlanOutcome {
        plan: MotionPlan {
            style,
            duration: req.duration_secs,
            fps,
            geometry,
            spans: schedule.spans,
            report,
            keyframes,
        },
        report,
    })
}

#[cfg(test)]
#[path = "../tests/unit/plan.rs"]
mod tests;
