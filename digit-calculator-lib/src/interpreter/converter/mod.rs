//! Passes that re-render an expression in another notation without evaluating it.

pub mod infix_converter;
pub mod surface_renderer;
