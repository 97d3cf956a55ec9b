/// Convenience result type used across the planner.
pub type PlanResult<T> = Result<T, PlanError>;

/// Top-level error taxonomy used by planner APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    /// Frame/piece dimensions or margins leave no valid travel region.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Timing constraints cannot host even the reduced alignment count.
    #[error("schedule infeasible (max feasible alignments: {max_feasible}): {message}")]
    ScheduleInfeasible {
        /// Human-readable reason.
        message: String,
        /// Largest alignment count that would fit (0 when none does).
        max_feasible: u32,
    },

    /// Movement style string is not one of the canonical styles.
    #[error("style resolution error: {0}")]
    StyleResolution(String),

    /// The compiler needs at least two keyframes to interpolate.
    #[error("empty plan: need at least 2 keyframes, got {keyframes}")]
    EmptyPlan {
        /// Number of keyframes supplied.
        keyframes: usize,
    },

    /// Keyframe times go backwards.
    #[error("non-monotonic time at keyframe {index}: {prev} -> {next}")]
    NonMonotonicTime {
        /// Index of the later keyframe of the offending pair.
        index: usize,
        /// Time of the earlier keyframe.
        prev: f64,
        /// Time of the later keyframe.
        next: f64,
    },

    /// Synthesizer output broke a plan invariant.
    #[error("plan invariant violation: {0}")]
    PlanInvariantViolation(String),

    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Errors while parsing or evaluating rendered expressions.
    #[error("expression error: {0}")]
    Expression(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl PlanError {
    /// Build a [`PlanError::InvalidGeometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`PlanError::ScheduleInfeasible`] value.
    pub fn infeasible(msg: impl Into<String>, max_feasible: u32) -> Self {
        Self::ScheduleInfeasible {
            message: msg.into(),
            max_feasible,
        }
    }

    /// Build a [`PlanError::StyleResolution`] value.
    pub fn style(msg: impl Into<String>) -> Self {
        Self::StyleResolution(msg.into())
    }

    /// Build a [`PlanError::PlanInvariantViolation`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::PlanInvariantViolation(msg.into())
    }

    /// Build a [`PlanError::InvalidConfig`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`PlanError::Expression`] value.
    pub fn expression(msg: impl Into<String>) -> Self {
        Self::Expression(msg.into())
    }

    /// Build a [`PlanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
