//! `stockboard-grid` — the host boundary and the per-tick program.
//!
//! The game owns block enumeration and panel rendering; this crate puts
//! them behind [`GridTerminalSystem`] and drives the
//! fetch → aggregate → present pass on a fixed update frequency.

pub mod config;
pub mod frequency;
pub mod host;
pub mod memory;
pub mod program;
pub mod runner;

pub use config::GridConfig;
pub use frequency::UpdateFrequency;
pub use host::GridTerminalSystem;
pub use memory::{InMemoryGrid, InMemoryPanel};
pub use program::{Program, TickReport};
pub use runner::run;
