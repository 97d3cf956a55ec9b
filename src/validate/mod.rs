/// Pre-compilation invariant checks.
pub mod validator;
