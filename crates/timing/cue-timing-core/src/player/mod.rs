//! Playback driver: resolves composed trees to absolute time and
//! executes them against the host document

pub mod config;
pub mod driver;

pub use config::DriverConfig;
pub use driver::PlaybackDriver;
