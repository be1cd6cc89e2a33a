mod paint;
mod world;

pub use paint::{Canvas, NullSink, PaintSink};
pub use world::{Flow, World};
