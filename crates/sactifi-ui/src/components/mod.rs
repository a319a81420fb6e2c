//! Reusable UI components
//!
//! Stateless styling primitives (buttons, inputs, pills) plus the
//! pointer- and viewport-driven motion wrappers.

mod button;
mod category_pills;
mod glowing_cursor;
mod input;
mod interactive_card;
mod magnetic;
mod reveal;

pub use button::*;
pub use category_pills::*;
pub use glowing_cursor::*;
pub use input::*;
pub use interactive_card::*;
pub use magnetic::*;
pub use reveal::*;
