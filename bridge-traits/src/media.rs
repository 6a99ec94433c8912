//! Media Metadata Facility Abstractions
//!
//! Describes the platform component that opens a local media file and answers
//! queries about its tags and embedded resources:
//! - Android: `MediaMetadataRetriever`
//! - iOS/macOS: `AVAsset` common metadata
//! - Desktop: `lofty` (see `bridge-desktop`)
//!
//! A retriever is a per-call handle. The caller acquires one from a
//! [`RetrieverFactory`], points it at a file with
//! [`set_data_source`](MetadataRetriever::set_data_source), issues queries and
//! finally calls [`release`](MetadataRetriever::release).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::{
    error::Result,
    platform::{PlatformSend, PlatformSendSync},
};

/// Tag fields a retriever can be queried for.
///
/// Every field is answered as raw text; numeric interpretation is left to the
/// caller, the same way platform retrievers report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKey {
    Title,
    Artist,
    Album,
    AlbumArtist,
    /// Playback duration in milliseconds
    Duration,
    Year,
    /// Track position, commonly `"<track>/<total>"`
    CdTrackNumber,
    /// Disc position, commonly `"<disc>/<total>"`
    DiscNumber,
    Genre,
    Composer,
    /// Average bitrate in bits per second
    Bitrate,
}

impl MetadataKey {
    /// Every key, in the order the adapter queries them.
    pub const ALL: [MetadataKey; 11] = [
        MetadataKey::Title,
        MetadataKey::Artist,
        MetadataKey::Album,
        MetadataKey::AlbumArtist,
        MetadataKey::Duration,
        MetadataKey::Year,
        MetadataKey::CdTrackNumber,
        MetadataKey::DiscNumber,
        MetadataKey::Genre,
        MetadataKey::Composer,
        MetadataKey::Bitrate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKey::Title => "title",
            MetadataKey::Artist => "artist",
            MetadataKey::Album => "album",
            MetadataKey::AlbumArtist => "album_artist",
            MetadataKey::Duration => "duration",
            MetadataKey::Year => "year",
            MetadataKey::CdTrackNumber => "cd_track_number",
            MetadataKey::DiscNumber => "disc_number",
            MetadataKey::Genre => "genre",
            MetadataKey::Composer => "composer",
            MetadataKey::Bitrate => "bitrate",
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call handle onto the platform metadata facility.
///
/// # Contract
///
/// - Queries issued before a successful `set_data_source` fail with
///   [`BridgeError::NoDataSource`](crate::BridgeError::NoDataSource).
/// - A source the facility cannot read fails with
///   [`BridgeError::UnsupportedSource`](crate::BridgeError::UnsupportedSource).
/// - A field that is simply not present is `Ok(None)`, never an error.
/// - `release` must be idempotent: a second call is a no-op.
/// - Queries after `release` fail with
///   [`BridgeError::Released`](crate::BridgeError::Released).
///
/// # Example
///
/// ```ignore
/// use bridge_traits::media::{MetadataKey, MetadataRetriever};
///
/// fn read_title(retriever: &mut dyn MetadataRetriever, path: &Path) -> Result<Option<String>> {
///     retriever.set_data_source(path)?;
///     let title = retriever.extract_metadata(MetadataKey::Title);
///     retriever.release()?;
///     title
/// }
/// ```
pub trait MetadataRetriever: PlatformSend {
    /// Open the file at `path` as the data source for subsequent queries.
    fn set_data_source(&mut self, path: &Path) -> Result<()>;

    /// Raw bytes of the embedded picture, if the file carries one.
    fn embedded_picture(&mut self) -> Result<Option<Bytes>>;

    /// Raw text value of a single tag field.
    fn extract_metadata(&mut self, key: MetadataKey) -> Result<Option<String>>;

    /// Release the underlying facility resources.
    fn release(&mut self) -> Result<()>;
}

/// Creates fresh retriever handles, one per adapter call.
pub trait RetrieverFactory: PlatformSendSync {
    fn create(&self) -> Box<dyn MetadataRetriever>;
}

impl<F> RetrieverFactory for F
where
    F: Fn() -> Box<dyn MetadataRetriever> + PlatformSendSync,
{
    fn create(&self) -> Box<dyn MetadataRetriever> {
        self()
    }
}
