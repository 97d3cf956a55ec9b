//! JSON-backed planning configuration.
//!
//! Every field has a default so a config file only needs to name what it changes. Policy
//! constants (minimum gap between holds, default alignment range, style tuning) live here
//! rather than in the planner so they can be adjusted per run.

use crate::compile::render::ExprSyntax;
use crate::foundation::core::{Dimensions, Fps};
use crate::foundation::error::{PlanError, PlanResult};
use crate::plan::PlanRequest;

/// Inclusive range used when the alignment count is left unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlignmentRange {
    pub min: u32,
    pub max: u32,
}

/// Scheduling policy for alignment holds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SchedulePolicy {
    /// Minimum motion time between two consecutive holds, in seconds.
    pub min_gap_secs: f64,
    /// Count range drawn from when no explicit count is requested.
    pub default_alignments: AlignmentRange,
    /// Maximum center jitter as a fraction of one division segment.
    pub jitter_fraction: f64,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            min_gap_secs: 0.3,
            default_alignments: AlignmentRange { min: 3, max: 5 },
            jitter_fraction: 0.25,
        }
    }
}

impl SchedulePolicy {
    pub fn validate(&self) -> PlanResult<()> {
        if !(self.min_gap_secs.is_finite() && self.min_gap_secs > 0.0) {
            return Err(PlanError::config("min_gap_secs must be > 0"));
        }
        let r = self.default_alignments;
        if r.min == 0 || r.min > r.max || r.max > MAX_ALIGNMENTS {
            return Err(PlanError::config(format!(
                "default_alignments must satisfy 1 <= min <= max <= {MAX_ALIGNMENTS}"
            )));
        }
        if !(0.0..=0.5).contains(&self.jitter_fraction) {
            return Err(PlanError::config("jitter_fraction must be in [0, 0.5]"));
        }
        Ok(())
    }
}

/// Per-style shaping parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleTuning {
    /// Vertical levels in one chaotic top-to-bottom sweep before it resets.
    pub chaotic_sweep_steps: u32,
    /// Angular divisions of the rotating ellipse.
    pub rotating_angle_steps: u32,
    /// Smallest rotation advance per rotating keyframe, in degrees.
    pub rotation_step_min_deg: f64,
    /// Largest rotation advance per rotating keyframe, in degrees.
    pub rotation_step_max_deg: f64,
    /// Fraction of the travel extent kept clear around zigzag corners.
    pub zigzag_inset: f64,
}

impl Default for StyleTuning {
    fn default() -> Self {
        Self {
            chaotic_sweep_steps: 4,
            rotating_angle_steps: 8,
            rotation_step_min_deg: 90.0,
            rotation_step_max_deg: 180.0,
            zigzag_inset: 0.1,
        }
    }
}

impl StyleTuning {
    pub fn validate(&self) -> PlanResult<()> {
        if self.chaotic_sweep_steps < 2 {
            return Err(PlanError::config("chaotic_sweep_steps must be >= 2"));
        }
        if self.rotating_angle_steps < 3 {
            return Err(PlanError::config("rotating_angle_steps must be >= 3"));
        }
        let (lo, hi) = (self.rotation_step_min_deg, self.rotation_step_max_deg);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(PlanError::config(
                "rotation steps must satisfy 0 < rotation_step_min_deg <= rotation_step_max_deg",
            ));
        }
        if !(0.0..0.5).contains(&self.zigzag_inset) {
            return Err(PlanError::config("zigzag_inset must be in [0, 0.5)"));
        }
        Ok(())
    }
}

/// How compiled programs are rendered to strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub syntax: ExprSyntax,
    /// Wrap the rotation expression as `(...)*PI/180`.
    pub rotation_in_radians: bool,
}

pub const MAX_ALIGNMENTS: u32 = 20;
pub const MAX_HOLD_FRAMES: u32 = 90;
pub const MAX_FPS: f64 = 120.0;

/// Full request surface for one planning run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub frame: Dimensions,
    pub piece: Dimensions,
    /// Source image the piece is cut from, if any.
    pub image: Option<Dimensions>,
    /// Total duration in seconds.
    pub duration_secs: f64,
    pub fps: Fps,
    /// Requested alignment count; `None` draws from `schedule.default_alignments`.
    pub num_alignments: Option<u32>,
    /// `chaotic`, `rotating`, `zigzag` or `random`.
    pub movement_style: String,
    /// Alignment hold length in frames.
    pub hold_frames: u32,
    /// Percent of frame height excluded from the top of the travel region.
    pub margin_top: f64,
    pub piece_scale: f64,
    /// Percent of the frame the source image may occupy.
    pub image_coverage: f64,
    pub seed: Option<u64>,
    pub schedule: SchedulePolicy,
    pub style: StyleTuning,
    pub render: RenderOptions,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            frame: Dimensions::new(1080.0, 1920.0),
            piece: Dimensions::new(200.0, 200.0),
            image: None,
            duration_secs: 10.0,
            fps: Fps::default(),
            num_alignments: None,
            movement_style: "chaotic".to_string(),
            hold_frames: 15,
            margin_top: 10.0,
            piece_scale: 1.0,
            image_coverage: 80.0,
            seed: None,
            schedule: SchedulePolicy::default(),
            style: StyleTuning::default(),
            render: RenderOptions::default(),
        }
    }
}

impl PlanConfig {
    pub fn from_json(s: &str) -> PlanResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Range checks on user-facing values. Geometry feasibility is checked later by the
    /// resolver, timing feasibility by the scheduler.
    pub fn validate(&self) -> PlanResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(PlanError::config(format!(
                "duration_secs must be > 0, got {}",
                self.duration_secs
            )));
        }
        let fps = Fps::new(self.fps.num, self.fps.den)?;
        if fps.as_f64() > MAX_FPS {
            return Err(PlanError::config(format!(
                "fps must be between 1 and {MAX_FPS}, got {}",
                fps.as_f64()
            )));
        }
        if let Some(n) = self.num_alignments {
            if n == 0 || n > MAX_ALIGNMENTS {
                return Err(PlanError::config(format!(
                    "num_alignments must be between 1 and {MAX_ALIGNMENTS}, got {n}"
                )));
            }
        }
        if self.hold_frames > MAX_HOLD_FRAMES {
            return Err(PlanError::config(format!(
                "hold_frames must be between 0 and {MAX_HOLD_FRAMES}, got {}",
                self.hold_frames
            )));
        }
        if !(0.0..=90.0).contains(&self.margin_top) {
            return Err(PlanError::config(format!(
                "margin_top must be between 0 and 90, got {}",
                self.margin_top
            )));
        }
        if !(0.5..=2.0).contains(&self.piece_scale) {
            return Err(PlanError::config(format!(
                "piece_scale must be between 0.5 and 2.0, got {}",
                self.piece_scale
            )));
        }
        if !(50.0..=95.0).contains(&self.image_coverage) {
            return Err(PlanError::config(format!(
                "image_coverage must be between 50 and 95, got {}",
                self.image_coverage
            )));
        }
        self.schedule.validate()?;
        self.style.validate()
    }

    /// Validate and convert into a planner request.
    pub fn to_request(&self) -> PlanResult<PlanRequest> {
        self.validate()?;
        Ok(PlanRequest {
            frame: self.frame,
            piece: self.piece,
            duration_secs: self.duration_secs,
            fps: self.fps,
            num_alignments: self.num_alignments,
            movement_style: self.movement_style.clone(),
            hold_secs: self.fps.frames_to_secs(u64::from(self.hold_frames)),
            margin_top: self.margin_top,
            piece_scale: self.piece_scale,
            schedule: self.schedule,
            style: self.style,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
