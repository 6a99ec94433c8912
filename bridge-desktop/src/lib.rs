//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! Mobile hosts inject their native media facility (`MediaMetadataRetriever`
//! on Android). Desktop hosts have no such system service, so this crate
//! provides one built on `lofty`:
//! - `MetadataRetriever` using `lofty::probe::Probe`
//! - `RetrieverFactory` handing out one fresh retriever per call
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::LoftyRetrieverFactory;
//! use bridge_traits::RetrieverFactory;
//! use std::sync::Arc;
//!
//! let factory: Arc<dyn RetrieverFactory> = Arc::new(LoftyRetrieverFactory::new());
//! // Use in core configuration
//! ```

mod media;

pub use media::{LoftyRetriever, LoftyRetrieverFactory};
