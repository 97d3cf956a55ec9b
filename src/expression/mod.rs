//! Minimal evaluator for rendered time expressions.
//!
//! Supports numbers, `t`, `PI`, `+ - * /`, unary minus, `< <= > >=`, parentheses and the
//! calls `if`, `lt`, `gt`, `lte`, `gte`, `min`, `max`. This is the capability set the
//! compiler targets, so any compiled expression can be sampled in-process.

pub mod ast;
pub mod error;
pub mod eval;
pub(crate) mod lexer;
pub mod parser;

pub use ast::Expr;
pub use error::ExprError;
pub use eval::eval_expr;
pub use parser::parse_expr;
