// Domain layer - tiles, grid and command vocabulary
pub mod domain;
pub mod error;

// Application layer - command interpreter and render bridge
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Command, Grid, Tile, TileColor, TileKind};
pub use application::{Canvas, Flow, PaintSink, World};
pub use error::{EngineError, ParseError};
