/// Plan-to-expression lowering.
pub mod compiler;
/// Per-axis segment programs.
pub mod program;
/// String rendering of segment programs.
pub mod render;
