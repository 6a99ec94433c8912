//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`core-service`, `core-metadata`). Host applications can
//! depend on `localplay-workspace` and enable the documented features without
//! wiring each crate individually.

#[cfg(feature = "desktop-shims")]
pub use core_service;

#[cfg(any(feature = "desktop-shims", feature = "metadata-only"))]
pub use core_metadata;
