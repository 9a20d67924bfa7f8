//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic millisecond clocks)
//! - Input (key codes to game actions)

pub mod input;
pub mod time;

pub use input::{InputAction, action_for_key};
pub use time::{Clock, ManualClock};
