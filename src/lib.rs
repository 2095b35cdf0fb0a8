pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod telemetry;
pub mod tui;
pub mod wizard;
