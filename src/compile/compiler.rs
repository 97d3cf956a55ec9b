use std::f64::consts::PI;

use crate::compile::program::{AxisProgram, build_axis_program};
use crate::compile::render::{degrees_to_radians, render_program};
use crate::config::RenderOptions;
use crate::expression::{eval_expr, parse_expr};
use crate::foundation::error::PlanResult;
use crate::plan::MotionPlan;
use crate::synth::keyframe::Axis;

/// One axis of a compiled plan: the segment program and its rendered string.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompiledAxis {
    pub axis: Axis,
    pub program: AxisProgram,
    pub expr: String,
    /// `expr` yields radians instead of degrees.
    pub radians: bool,
}

impl CompiledAxis {
    /// Evaluate the segment program directly.
    pub fn eval(&self, t: f64) -> f64 {
        let v = self.program.eval(t);
        if self.radians { v * PI / 180.0 } else { v }
    }

    /// Parse and evaluate the rendered string.
    pub fn eval_rendered(&self, t: f64) -> PlanResult<f64> {
        let expr = parse_expr(&self.expr)?;
        Ok(eval_expr(&expr, t)?)
    }
}

/// Sampled pose at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Compiled expressions for all three channels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompiledPlan {
    pub x: CompiledAxis,
    pub y: CompiledAxis,
    pub rotation: CompiledAxis,
}

impl CompiledPlan {
    pub fn axis(&self, axis: Axis) -> &CompiledAxis {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Rotation => &self.rotation,
        }
    }

    /// Sample from the segment programs.
    pub fn sample(&self, t: f64) -> Pose {
        Pose {
            t,
            x: self.x.eval(t),
            y: self.y.eval(t),
            rotation: self.rotation.eval(t),
        }
    }

    /// Sample by evaluating the rendered strings.
    pub fn sample_rendered(&self, t: f64) -> PlanResult<Pose> {
        Ok(Pose {
            t,
            x: self.x.eval_rendered(t)?,
            y: self.y.eval_rendered(t)?,
            rotation: self.rotation.eval_rendered(t)?,
        })
    }
}

fn compile_axis(plan: &MotionPlan, axis: Axis, opts: &RenderOptions) -> PlanResult<CompiledAxis> {
    let program = build_axis_program(plan.keyframes(), axis)?;
    let mut expr = render_program(&program, opts.syntax);
    let radians = axis == Axis::Rotation && opts.rotation_in_radians;
    if radians {
        expr = degrees_to_radians(&expr);
    }
    tracing::trace!(
        axis = axis.name(),
        segments = program.segments.len(),
        "compiled axis"
    );
    Ok(CompiledAxis {
        axis,
        program,
        expr,
        radians,
    })
}

/// Compile a validated plan into per-axis piecewise-linear expressions.
#[tracing::instrument(skip_all, fields(keyframes = plan.keyframes().len(), syntax = ?opts.syntax))]
pub fn compile_plan(plan: &MotionPlan, opts: &RenderOptions) -> PlanResult<CompiledPlan> {
    let compiled = CompiledPlan {
        x: compile_axis(plan, Axis::X, opts)?,
        y: compile_axis(plan, Axis::Y, opts)?,
        rotation: compile_axis(plan, Axis::Rotation, opts)?,
    };
    tracing::debug!(
        x_len = compiled.x.expr.len(),
        y_len = compiled.y.expr.len(),
        rotation_len = compiled.rotation.expr.len(),
        "compiled plan"
    );
    Ok(compiled)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
