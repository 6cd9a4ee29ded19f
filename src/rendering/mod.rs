//! # Rendering Module
//!
//! 2D board rendering using macroquad.

pub mod display;
pub mod layout;
pub mod ui;

pub use display::*;
pub use layout::*;
pub use ui::*;
