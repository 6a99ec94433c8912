//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the metadata core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other workspace crates depend
//! on. It establishes the logging conventions (structured `tracing` events,
//! mirrored to a host `LoggerSink` when one is provided) and the fail-fast
//! configuration builder that wires the media facility into the core.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
