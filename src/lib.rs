//! Front end for a CHIP-8 emulator: configuration, an SDL2 window, the
//! input bridge and the frame loop an interpreter plugs into.

pub mod chip8;
pub mod config;
pub mod display;
pub mod emulator;
pub mod error;
pub mod gfx;
pub mod input;
pub mod logging;

pub use crate::chip8::{Chip8, RunState};
pub use crate::config::{Config, Pacing};
pub use crate::display::{Frontend, SdlDisplay};
pub use crate::emulator::{FramePacer, Pacer};
pub use crate::error::Error;
