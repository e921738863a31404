//! Types shared between the guessr core and its presentation drivers.
//!
//! * [`game`]: difficulty presets, guess outcomes and round states.
//! * [`config`]: runtime options assembled by the binary.
//! * [`log`]: the `success!` shortcut over `tracing`.

pub mod config;
pub mod game;
pub mod log;
