//! # Host Bridge Traits
//!
//! Platform abstraction traits that each host platform implements.
//!
//! ## Overview
//!
//! This crate defines the contract between the metadata core and the
//! platform-specific pieces it depends on. Each trait represents a capability
//! the core requires but that is implemented differently per platform
//! (desktop, Android, iOS).
//!
//! ## Traits
//!
//! ### Media
//! - [`MetadataRetriever`](media::MetadataRetriever) - Per-call handle onto the platform media metadata facility
//! - [`RetrieverFactory`](media::RetrieverFactory) - Creates one retriever per adapter call
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ lofty-backed |
//! | Android  | host-injected       | `MediaMetadataRetriever` |
//! | iOS      | host-injected       | 📋 Planned |
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Implementations
//! convert platform-specific failures (parse errors, I/O errors, illegal
//! state) into `BridgeError` with an actionable message.
//!
//! ## Example
//!
//! ```ignore
//! use bridge_traits::media::{MetadataKey, MetadataRetriever};
//! use bridge_traits::error::Result;
//!
//! pub struct AndroidRetriever { /* JNI handle */ }
//!
//! impl MetadataRetriever for AndroidRetriever {
//!     fn set_data_source(&mut self, path: &Path) -> Result<()> { todo!() }
//!     fn embedded_picture(&mut self) -> Result<Option<Bytes>> { todo!() }
//!     fn extract_metadata(&mut self, key: MetadataKey) -> Result<Option<String>> { todo!() }
//!     fn release(&mut self) -> Result<()> { todo!() }
//! }
//! ```

pub mod error;
pub mod logging;
pub mod media;
pub mod platform;

pub use error::BridgeError;

pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use media::{MetadataKey, MetadataRetriever, RetrieverFactory};
