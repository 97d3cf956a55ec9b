/// Travel bounds, alignment center and source-image placement.
pub mod resolver;
