#![forbid(unsafe_code)]
//! Motion planning for a puzzle piece that wanders a frame and periodically snaps into
//! its slot.
//!
//! A run resolves travel bounds, schedules alignment holds, synthesizes a style-specific
//! keyframe path, validates it, and compiles each channel into a closed-form
//! piecewise-linear expression of `t` that an external renderer can evaluate per frame.
//!
//! ```no_run
//! use piece_motion::{PlanConfig, RenderOptions, Rng64, compile_plan, plan_motion};
//!
//! let req = PlanConfig::default().to_request()?;
//! let outcome = plan_motion(&req, &mut Rng64::new(42))?;
//! let compiled = compile_plan(&outcome.plan, &RenderOptions::default())?;
//! println!("{}", compiled.x.expr);
//! # Ok::<(), piece_motion::PlanError>(())
//! ```

pub mod compile;
pub mod config;
pub mod expression;
mod foundation;
pub mod geometry;
pub mod plan;
pub mod schedule;
pub mod synth;
pub mod validate;

pub use compile::compiler::{CompiledAxis, CompiledPlan, Pose, compile_plan};
pub use compile::program::{AxisProgram, Segment};
pub use compile::render::ExprSyntax;
pub use config::{AlignmentRange, PlanConfig, RenderOptions, SchedulePolicy, StyleTuning};
pub use foundation::core::{Dimensions, EPSILON, Fps, Point, Rect};
pub use foundation::error::{PlanError, PlanResult};
pub use foundation::rng::Rng64;
pub use geometry::resolver::{
    Geometry, GeometryInput, TravelBounds, place_source_image, resolve_geometry,
};
pub use plan::{MotionPlan, PlanOutcome, PlanRequest, plan_motion};
pub use schedule::scheduler::{AlignmentReport, AlignmentSpan, Schedule, schedule_alignments};
pub use synth::keyframe::{Axis, Keyframe};
pub use synth::style::{MovementStyle, StyleRequest, resolve_style};
pub use synth::synthesizer::{SynthInput, synthesize};
pub use validate::validator::{ValidationTarget, validate_keyframes};
