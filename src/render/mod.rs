pub mod chrome;
pub mod compositor;
pub mod raster;
pub mod shadow;
pub mod shapes;
pub mod surface;
