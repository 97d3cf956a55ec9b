use std::str::FromStr;

use crate::config::StyleTuning;
use crate::foundation::error::{PlanError, PlanResult};
use crate::foundation::math::lerp;
use crate::foundation::rng::Rng64;
use crate::geometry::resolver::TravelBounds;

/// Concrete movement style used by the synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementStyle {
    /// Vertical sweeps with random horizontal jitter.
    Chaotic,
    /// Elliptical orbit with a spinning piece.
    Rotating,
    /// Diagonal corner-to-corner traversal.
    Zigzag,
}

impl MovementStyle {
    pub const ALL: [MovementStyle; 3] = [Self::Chaotic, Self::Rotating, Self::Zigzag];

    pub fn name(self) -> &'static str {
        match self {
            Self::Chaotic => "chaotic",
            Self::Rotating => "rotating",
            Self::Zigzag => "zigzag",
        }
    }

    /// Intermediate keyframes wanted inside one motion interval, before density capping.
    pub fn intermediate_count(self, rng: &mut Rng64) -> u32 {
        match self {
            Self::Chaotic => rng.range_u32_inclusive(1, 3),
            Self::Rotating => 3,
            Self::Zigzag => 2,
        }
    }
}

impl std::fmt::Display for MovementStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Style as supplied by the caller, before `random` is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleRequest {
    Random,
    Fixed(MovementStyle),
}

impl FromStr for StyleRequest {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "chaotic" => Ok(Self::Fixed(MovementStyle::Chaotic)),
            "rotating" => Ok(Self::Fixed(MovementStyle::Rotating)),
            "zigzag" => Ok(Self::Fixed(MovementStyle::Zigzag)),
            other => Err(PlanError::style(format!(
                "unknown movement style '{other}' (expected chaotic, rotating, zigzag or random)"
            ))),
        }
    }
}

impl StyleRequest {
    /// Map `random` to one concrete style; runs once per plan.
    pub fn resolve(self, rng: &mut Rng64) -> PlanResult<MovementStyle> {
        match self {
            Self::Fixed(style) => Ok(style),
            Self::Random => rng
                .choose(&MovementStyle::ALL)
                .ok_or_else(|| PlanError::style("no movement styles available")),
        }
    }
}

/// Parse and resolve a style string in one step.
pub fn resolve_style(s: &str, rng: &mut Rng64) -> PlanResult<MovementStyle> {
    s.parse::<StyleRequest>()?.resolve(rng)
}

/// Per-run position generator. State carries across motion intervals so sweeps, orbits
/// and corner cycles continue where the previous interval left off.
#[derive(Clone, Debug)]
pub(crate) enum ShapeState {
    Chaotic {
        bounds: TravelBounds,
        steps: u32,
        level: u32,
    },
    Rotating {
        bounds: TravelBounds,
        steps: u32,
        index: u32,
        step_min_deg: f64,
        step_max_deg: f64,
    },
    Zigzag {
        corners: [(f64, f64); 4],
        index: usize,
    },
}

impl ShapeState {
    pub(crate) fn new(
        style: MovementStyle,
        bounds: TravelBounds,
        tuning: &StyleTuning,
        rng: &mut Rng64,
    ) -> Self {
        match style {
            MovementStyle::Chaotic => Self::Chaotic {
                bounds,
                steps: tuning.chaotic_sweep_steps.max(2),
                level: 0,
            },
            MovementStyle::Rotating => {
                let steps = tuning.rotating_angle_steps.max(3);
                Self::Rotating {
                    bounds,
                    steps,
                    index: rng.range_u32_inclusive(0, steps - 1),
                    step_min_deg: tuning.rotation_step_min_deg,
                    step_max_deg: tuning.rotation_step_max_deg,
                }
            }
            MovementStyle::Zigzag => {
                let b = bounds.inset(tuning.zigzag_inset);
                // TL, BR, TR, BL
                let corners = [
                    (b.x_min, b.y_min),
                    (b.x_max, b.y_max),
                    (b.x_max, b.y_min),
                    (b.x_min, b.y_max),
                ];
                Self::Zigzag { corners, index: 0 }
            }
        }
    }

    /// Next top-left position along the style's path.
    pub(crate) fn next_point(&mut self, rng: &mut Rng64) -> (f64, f64) {
        match self {
            Self::Chaotic {
                bounds,
                steps,
                level,
            } => {
                let x = rng.range_f64(bounds.x_min, bounds.x_max);
                let u = f64::from(*level) / f64::from(*steps - 1);
                let y = lerp(bounds.y_min, bounds.y_max, u);
                *level = (*level + 1) % *steps;
                (x, y)
            }
            Self::Rotating {
                bounds,
                steps,
                index,
                ..
            } => {
                let angle = std::f64::consts::TAU * f64::from(*index) / f64::from(*steps);
                let cx = (bounds.x_min + bounds.x_max) / 2.0;
                let cy = (bounds.y_min + bounds.y_max) / 2.0;
                let x = (cx + bounds.width() / 2.0 * angle.cos()).clamp(bounds.x_min, bounds.x_max);
                let y = (cy + bounds.height() / 2.0 * angle.sin()).clamp(bounds.y_min, bounds.y_max);
                *index = (*index + 1) % *steps;
                (x, y)
            }
            Self::Zigzag { corners, index } => {
                let p = corners[*index];
                *index = (*index + 1) % corners.len();
                p
            }
        }
    }

    /// Rotation for the keyframe following one at `prev` degrees.
    pub(crate) fn next_rotation(&self, prev: f64, rng: &mut Rng64) -> f64 {
        match self {
            Self::Rotating {
                step_min_deg,
                step_max_deg,
                ..
            } => prev + rng.range_f64(*step_min_deg, *step_max_deg),
            Self::Chaotic { .. } | Self::Zigzag { .. } => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/style.rs"]
mod tests;
