use std::fmt::Write as _;

use crate::compile::program::{AxisProgram, Segment};

/// Conditional syntax used when rendering a program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprSyntax {
    /// `if(lt(t,T),A,B)`, accepted by ffmpeg filter expressions.
    #[default]
    Function,
    /// `if(t<T,A,B)`.
    Infix,
}

/// Render a number so it survives re-parsing unchanged.
///
/// Negative values are parenthesized so they can follow a binary operator.
pub fn format_number(v: f64) -> String {
    // Normalize -0.
    let v = if v == 0.0 { 0.0 } else { v };
    if v < 0.0 {
        format!("({v})")
    } else {
        format!("{v}")
    }
}

fn render_segment(seg: &Segment) -> String {
    match *seg {
        Segment::Linear { start, end, v0, v1 } => {
            let (s, e, a, b) = (
                format_number(start),
                format_number(end),
                format_number(v0),
                format_number(v1),
            );
            format!("{a}+(({b}-{a})/({e}-{s}))*(t-{s})")
        }
        Segment::Constant { value, .. } => format_number(value),
    }
}

/// Render `program` as a single nested conditional over `t`.
pub fn render_program(program: &AxisProgram, syntax: ExprSyntax) -> String {
    let mut out = String::new();
    for seg in &program.segments {
        let end = format_number(seg.end());
        let body = render_segment(seg);
        // Writing to a String cannot fail.
        let _ = match syntax {
            ExprSyntax::Function => write!(out, "if(lt(t,{end}),{body},"),
            ExprSyntax::Infix => write!(out, "if(t<{end},{body},"),
        };
    }
    out.push_str(&format_number(program.tail));
    out.extend(std::iter::repeat_n(')', program.segments.len()));
    out
}

/// Wrap a degree-valued expression so it evaluates in radians.
pub fn degrees_to_radians(expr: &str) -> String {
    format!("({expr})*PI/180")
}
