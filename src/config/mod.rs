pub mod color;
pub mod model;
