use crate::expression::ast::{BinaryOp, Expr};
use crate::expression::error::ExprError;

/// Evaluate `expr` with the time variable bound to `t`.
///
/// Comparisons yield `1.0` / `0.0` and `if(c, a, b)` treats any non-zero `c` as true,
/// matching filter-graph evaluators. Only the selected branch is evaluated.
pub fn eval_expr(expr: &Expr, t: f64) -> Result<f64, ExprError> {
    match expr {
        Expr::Num(v) => Ok(*v),
        Expr::Ident(name) => match name.as_str() {
            "t" => Ok(t),
            "PI" => Ok(std::f64::consts::PI),
            other => Err(ExprError::eval(format!("unknown identifier '{other}'"))),
        },
        Expr::Neg(inner) => Ok(-eval_expr(inner, t)?),
        Expr::Binary { op, left, right } => {
            let a = eval_expr(left, t)?;
            let b = eval_expr(right, t)?;
            Ok(match op {
                BinaryOp::Add => a + b,
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div => a / b,
                BinaryOp::Lt => bool_to_f64(a < b),
                BinaryOp::Le => bool_to_f64(a <= b),
                BinaryOp::Gt => bool_to_f64(a > b),
                BinaryOp::Ge => bool_to_f64(a >= b),
            })
        }
        Expr::Call { func, args } => call_builtin(func, args, t),
    }
}

fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn call_builtin(func: &str, args: &[Expr], t: f64) -> Result<f64, ExprError> {
    fn arity(func: &str, args: &[Expr], n: usize) -> Result<(), ExprError> {
        if args.len() != n {
            return Err(ExprError::eval(format!(
                "{func}() takes {n} arguments, got {}",
                args.len()
            )));
        }
        Ok(())
    }

    match func {
        "if" => {
            arity(func, args, 3)?;
            if eval_expr(&args[0], t)? != 0.0 {
                eval_expr(&args[1], t)
            } else {
                eval_expr(&args[2], t)
            }
        }
        "lt" | "gt" | "lte" | "gte" | "min" | "max" => {
            arity(func, args, 2)?;
            let a = eval_expr(&args[0], t)?;
            let b = eval_expr(&args[1], t)?;
            Ok(match func {
                "lt" => bool_to_f64(a < b),
                "gt" => bool_to_f64(a > b),
                "lte" => bool_to_f64(a <= b),
                "gte" => bool_to_f64(a >= b),
                "min" => a.min(b),
                _ => a.max(b),
            })
        }
        other => Err(ExprError::eval(format!("unknown function '{other}'"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/eval.rs"]
mod tests;
