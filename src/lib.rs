//! Ambient particle background
//!
//! A fixed set of drifting points that bounce off the edges of their surface,
//! with faint lines between any two that come close:
//! - core: particle model, per-frame update and link pass, drawing surface
//! - `wasm` feature: browser canvas front end with a stop handle
//! - `cli` feature: headless fixed-rate runner with cancellation

pub mod config;
pub mod error;
pub mod field;
pub mod snapshot;
pub mod stats;
pub mod surface;
pub mod theme;
pub mod time;

#[cfg(feature = "cli")]
pub mod runner;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

pub use config::FieldConfig;
pub use error::{Error, Result};
pub use field::{Link, Particle, ParticleField};
pub use snapshot::Snapshot;
pub use stats::{FpsCounter, FrameStats};
pub use surface::{Bounds, Canvas, DrawOp, Point, RecordingCanvas};

#[cfg(feature = "cli")]
pub use runner::{FrameLoop, FrameOutcome};
