pub mod board;
pub mod color;
pub mod params;
pub mod surface;
pub mod utils;

// Re-export commonly used items
pub use board::{BoardError, ColorBoard};
pub use color::{Color, ColorError};
pub use params::Params;
pub use surface::{FrameSurface, Surface};
