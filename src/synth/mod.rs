/// Keyframe and axis types.
pub mod keyframe;
/// Movement styles and their path shapes.
pub mod style;
/// Keyframe sequence construction around alignment holds.
pub mod synthesizer;
