//! Library exports for the paintcanvas drawing engine.
//!
//! Exposes the raster surface, the gesture-driven controller and the configuration
//! types so that windowing hosts and tools (e.g. the schema dumper) can embed the
//! canvas and share validation logic with the headless binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
