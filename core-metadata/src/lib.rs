//! # Metadata Module
//!
//! Reads embedded artwork and audio tags from local media files through the
//! platform media facility.
//!
//! ## Overview
//!
//! This module handles:
//! - Embedded artwork extraction (raw image bytes)
//! - Tag extraction into the typed [`AudioTags`] record
//! - Track/disc position parsing (`"3/12"` style values)
//! - Guaranteed release of the per-call facility handle
//!
//! Every operation is best effort: a missing file or a file the facility
//! cannot parse yields `None`, never an error, at the public boundary.

pub mod error;
pub mod extractor;
pub mod tags;

mod guard;

pub use error::{MetadataError, Result};
pub use extractor::{ExtractionOutcome, MetadataAdapter};
pub use tags::{parse_track_number, AudioTags};
