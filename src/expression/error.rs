use std::fmt;

use crate::foundation::error::PlanError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprError {
    /// Byte offset into the source for lex/parse errors; `None` for evaluation errors,
    /// which operate on the tree after source positions are dropped.
    pub offset: Option<usize>,
    pub message: String,
}

impl ExprError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset: Some(offset),
            message: message.into(),
        }
    }

    pub(crate) fn eval(message: impl Into<String>) -> Self {
        Self {
            offset: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "expr error at byte {offset}: {}", self.message),
            None => write!(f, "expr error: {}", self.message),
        }
    }
}

impl std::error::Error for ExprError {}

impl From<ExprError> for PlanError {
    fn from(e: ExprError) -> Self {
        PlanError::expression(e.to_string())
    }
}
