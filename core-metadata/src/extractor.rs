//! Embedded Artwork and Tag Extraction
//!
//! This module provides [`MetadataAdapter`], which answers the two channel
//! operations on top of any [`RetrieverFactory`]:
//!
//! - `extract_artwork`: raw bytes of the embedded picture
//! - `extract_metadata`: the typed [`AudioTags`] record
//!
//! ## Call shape
//!
//! Each call is a single linear sequence: acquire a retriever, check that the
//! file exists, open it, query, release. The retriever is owned by a guard so
//! release runs exactly once whichever way the call ends.
//!
//! ## Outcomes
//!
//! Internally every call resolves to an [`ExtractionOutcome`] that keeps
//! "file not found", "facility failed" and "extracted" apart. The public
//! operations collapse both failure kinds to `None`; media files are often
//! partial, malformed or in formats the facility does not support, and the
//! host treats all of those as "no data".
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::LoftyRetrieverFactory;
//! use core_metadata::MetadataAdapter;
//! use std::sync::Arc;
//!
//! let adapter = MetadataAdapter::new(Arc::new(LoftyRetrieverFactory::new()));
//!
//! if let Some(tags) = adapter.extract_metadata("/music/song.flac") {
//!     println!("{:?} by {:?}", tags.title, tags.artist);
//! }
//! let cover = adapter.extract_artwork("/music/song.flac");
//! ```

use bridge_traits::{MetadataKey, MetadataRetriever, RetrieverFactory};
use bytes::Bytes;
use core_runtime::logging::strip_path;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{MetadataError, Result};
use crate::guard::RetrieverGuard;
use crate::tags::{parse_number, parse_track_number, AudioTags};

/// Result of a single adapter call before it is collapsed for the host.
#[derive(Debug)]
pub enum ExtractionOutcome<T> {
    /// Nothing exists at the requested path
    FileNotFound(PathBuf),
    /// The facility could not open or query the file
    Failed(MetadataError),
    /// The facility answered every query
    Extracted(T),
}

impl<T> ExtractionOutcome<T> {
    /// Collapse to the host-facing form: anything but `Extracted` is `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            ExtractionOutcome::Extracted(value) => Some(value),
            ExtractionOutcome::FileNotFound(_) | ExtractionOutcome::Failed(_) => None,
        }
    }

    /// Convert to a `Result`, turning a missing file into
    /// [`MetadataError::FileNotFound`].
    pub fn into_result(self) -> Result<T> {
        match self {
            ExtractionOutcome::Extracted(value) => Ok(value),
            ExtractionOutcome::FileNotFound(path) => Err(MetadataError::FileNotFound(path)),
            ExtractionOutcome::Failed(err) => Err(err),
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, ExtractionOutcome::Extracted(_))
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ExtractionOutcome::FileNotFound(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed(_))
    }
}

/// Adapter between the host channel and the platform media facility.
///
/// Holds no per-call state; one adapter can serve concurrent calls for
/// different files, each with its own retriever.
#[derive(Clone)]
pub struct MetadataAdapter {
    factory: Arc<dyn RetrieverFactory>,
}

impl MetadataAdapter {
    pub fn new(factory: Arc<dyn RetrieverFactory>) -> Self {
        Self { factory }
    }

    /// Raw bytes of the embedded picture.
    ///
    /// `None` when the file does not exist, carries no picture, or cannot be
    /// read by the facility.
    pub fn extract_artwork(&self, file_path: impl AsRef<Path>) -> Option<Bytes> {
        self.try_extract_artwork(file_path).into_option().flatten()
    }

    /// Tag fields of the file.
    ///
    /// Individually missing fields are `None` inside the record. Any facility
    /// failure discards the partial record and yields `None` overall.
    pub fn extract_metadata(&self, file_path: impl AsRef<Path>) -> Option<AudioTags> {
        self.try_extract_metadata(file_path).into_option()
    }

    pub fn try_extract_artwork(
        &self,
        file_path: impl AsRef<Path>,
    ) -> ExtractionOutcome<Option<Bytes>> {
        self.with_retriever("extract_artwork", file_path.as_ref(), |retriever| {
            Ok(retriever.embedded_picture()?)
        })
    }

    pub fn try_extract_metadata(&self, file_path: impl AsRef<Path>) -> ExtractionOutcome<AudioTags> {
        self.with_retriever("extract_metadata", file_path.as_ref(), read_tags)
    }

    /// Acquire → existence check → open → query → release.
    fn with_retriever<T>(
        &self,
        operation: &'static str,
        path: &Path,
        query: impl FnOnce(&mut dyn MetadataRetriever) -> Result<T>,
    ) -> ExtractionOutcome<T> {
        let mut retriever = RetrieverGuard::acquire(self.factory.as_ref());
        let display_path = path.to_string_lossy();
        let file = strip_path(&display_path);

        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                warn!(operation, file, "Path is a directory");
                return ExtractionOutcome::Failed(MetadataError::ExtractionFailed(format!(
                    "{} is a directory",
                    path.display()
                )));
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(operation, file, "File does not exist");
                return ExtractionOutcome::FileNotFound(path.to_path_buf());
            }
            Err(e) => {
                warn!(operation, file, error = %e, "Failed to check file existence");
                return ExtractionOutcome::Failed(e.into());
            }
        }

        let result = retriever
            .set_data_source(path)
            .map_err(MetadataError::from)
            .and_then(|()| query(&mut *retriever));

        match result {
            Ok(value) => {
                debug!(operation, file, "Extraction succeeded");
                ExtractionOutcome::Extracted(value)
            }
            Err(e) => {
                warn!(operation, file, error = %e, "Extraction failed");
                ExtractionOutcome::Failed(e)
            }
        }
    }
}

/// Query all eleven tag keys plus picture presence in one pass.
fn read_tags(retriever: &mut dyn MetadataRetriever) -> Result<AudioTags> {
    let mut field = |key: MetadataKey| retriever.extract_metadata(key);

    let title = field(MetadataKey::Title)?;
    let artist = field(MetadataKey::Artist)?;
    let album = field(MetadataKey::Album)?;
    let album_artist = field(MetadataKey::AlbumArtist)?;
    let duration = field(MetadataKey::Duration)?;
    let year = field(MetadataKey::Year)?;
    let track_number = field(MetadataKey::CdTrackNumber)?;
    let disc_number = field(MetadataKey::DiscNumber)?;
    let genre = field(MetadataKey::Genre)?;
    let composer = field(MetadataKey::Composer)?;
    let bitrate = field(MetadataKey::Bitrate)?;

    // Presence only; the bytes are dropped right away
    let has_artwork = retriever.embedded_picture()?.is_some();

    Ok(AudioTags {
        title,
        artist,
        album,
        album_artist,
        duration: parse_number(duration.as_deref()),
        year: parse_number(year.as_deref()),
        track_number: parse_track_number(track_number.as_deref()),
        disc_number: parse_track_number(disc_number.as_deref()),
        genre,
        composer,
        bitrate: parse_number(bitrate.as_deref()),
        has_artwork,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::{BridgeError, Result as BridgeResult};
    use mockall::mock;
    use mockall::predicate::*;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    mock! {
        pub Retriever {}

        impl MetadataRetriever for Retriever {
            fn set_data_source(&mut self, path: &Path) -> BridgeResult<()>;
            fn embedded_picture(&mut self) -> BridgeResult<Option<Bytes>>;
            fn extract_metadata(&mut self, key: MetadataKey) -> BridgeResult<Option<String>>;
            fn release(&mut self) -> BridgeResult<()>;
        }
    }

    /// Hands out one prepared mock, then refuses
    struct OnceFactory {
        retriever: Mutex<Option<MockRetriever>>,
    }

    impl OnceFactory {
        fn adapter(retriever: MockRetriever) -> MetadataAdapter {
            MetadataAdapter::new(Arc::new(Self {
                retriever: Mutex::new(Some(retriever)),
            }))
        }
    }

    impl RetrieverFactory for OnceFactory {
        fn create(&self) -> Box<dyn MetadataRetriever> {
            let retriever = self
                .retriever
                .lock()
                .unwrap()
                .take()
                .expect("adapter acquired more than one retriever");
            Box::new(retriever)
        }
    }

    fn existing_file() -> NamedTempFile {
        NamedTempFile::new().expect("temp file")
    }

    fn missing_path() -> PathBuf {
        let dir = tempfile::tempdir().unwrap();
        dir.path().join("missing.mp3")
    }

    fn expect_release_once(retriever: &mut MockRetriever) {
        retriever
            .expect_release()
            .times(1)
            .returning(|| Ok(()));
    }

    fn tag_value(key: MetadataKey) -> Option<String> {
        let value = match key {
            MetadataKey::Title => "Harbor Lights",
            MetadataKey::Artist => "The Tidewater Band",
            MetadataKey::Album => "Low Tide",
            MetadataKey::AlbumArtist => return None,
            MetadataKey::Duration => "215000",
            MetadataKey::Year => "1999",
            MetadataKey::CdTrackNumber => "3/12",
            MetadataKey::DiscNumber => "1/2",
            MetadataKey::Genre => "Folk",
            MetadataKey::Composer => return None,
            MetadataKey::Bitrate => "320000",
        };
        Some(value.to_string())
    }

    #[test]
    fn test_missing_file_releases_without_opening() {
        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().never();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let outcome = adapter.try_extract_artwork(missing_path());

        assert!(outcome.is_file_not_found());
        assert!(outcome.into_option().is_none());
    }

    #[test]
    fn test_missing_file_metadata_is_none() {
        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().never();
        retriever.expect_extract_metadata().never();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        assert!(adapter.extract_metadata(missing_path()).is_none());
    }

    #[test]
    fn test_artwork_returned_and_released() {
        let file = existing_file();
        let expected_path = file.path().to_path_buf();

        let mut retriever = MockRetriever::new();
        retriever
            .expect_set_data_source()
            .withf(move |path| path.to_path_buf() == expected_path)
            .times(1)
            .returning(|_| Ok(()));
        retriever
            .expect_embedded_picture()
            .times(1)
            .returning(|| Ok(Some(Bytes::from_static(b"\x89PNG cover"))));
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let artwork = adapter.extract_artwork(file.path());

        assert_eq!(artwork, Some(Bytes::from_static(b"\x89PNG cover")));
    }

    #[test]
    fn test_no_picture_is_none_but_extracted() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().returning(|_| Ok(()));
        retriever.expect_embedded_picture().returning(|| Ok(None));
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let outcome = adapter.try_extract_artwork(file.path());

        assert!(outcome.is_extracted());
        assert_eq!(outcome.into_option(), Some(None));
    }

    #[test]
    fn test_open_failure_is_none_and_released() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever
            .expect_set_data_source()
            .returning(|_| Err(BridgeError::OperationFailed("unsupported format".to_string())));
        retriever.expect_embedded_picture().never();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let outcome = adapter.try_extract_artwork(file.path());

        assert!(outcome.is_failed());
        let err = outcome.into_result().unwrap_err();
        assert!(matches!(err, MetadataError::Bridge(_)));
    }

    #[test]
    fn test_release_failure_does_not_mask_result() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().returning(|_| Ok(()));
        retriever
            .expect_embedded_picture()
            .returning(|| Ok(Some(Bytes::from_static(b"cover"))));
        retriever
            .expect_release()
            .times(1)
            .returning(|| Err(BridgeError::OperationFailed("already released".to_string())));

        let adapter = OnceFactory::adapter(retriever);
        assert_eq!(
            adapter.extract_artwork(file.path()),
            Some(Bytes::from_static(b"cover"))
        );
    }

    #[test]
    fn test_metadata_fields_are_parsed() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().times(1).returning(|_| Ok(()));
        retriever
            .expect_extract_metadata()
            .times(11)
            .returning(|key| Ok(tag_value(key)));
        retriever
            .expect_embedded_picture()
            .times(1)
            .returning(|| Ok(Some(Bytes::from_static(b"cover"))));
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let tags = adapter.extract_metadata(file.path()).expect("tags");

        assert_eq!(
            tags,
            AudioTags {
                title: Some("Harbor Lights".to_string()),
                artist: Some("The Tidewater Band".to_string()),
                album: Some("Low Tide".to_string()),
                album_artist: None,
                duration: Some(215_000),
                year: Some(1999),
                track_number: Some(3),
                disc_number: Some(1),
                genre: Some("Folk".to_string()),
                composer: None,
                bitrate: Some(320_000),
                has_artwork: true,
            }
        );
    }

    #[test]
    fn test_unparseable_numbers_are_absent() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().returning(|_| Ok(()));
        retriever.expect_extract_metadata().returning(|key| {
            let value = match key {
                MetadataKey::Duration => "unknown",
                MetadataKey::Year => "1999-05-01",
                MetadataKey::CdTrackNumber => "A1",
                MetadataKey::Bitrate => "",
                _ => return Ok(None),
            };
            Ok(Some(value.to_string()))
        });
        retriever.expect_embedded_picture().returning(|| Ok(None));
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let tags = adapter.extract_metadata(file.path()).expect("tags");

        assert_eq!(tags, AudioTags::default());
    }

    #[test]
    fn test_query_failure_discards_partial_tags() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().returning(|_| Ok(()));
        retriever
            .expect_extract_metadata()
            .with(eq(MetadataKey::Year))
            .times(1)
            .returning(|_| Err(BridgeError::OperationFailed("corrupt frame".to_string())));
        retriever
            .expect_extract_metadata()
            .withf(|key| *key != MetadataKey::Year)
            .returning(|key| Ok(tag_value(key)));
        retriever.expect_embedded_picture().never();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let outcome = adapter.try_extract_metadata(file.path());

        assert!(outcome.is_failed());
        assert!(outcome.into_option().is_none());
    }

    #[test]
    fn test_picture_failure_discards_tags() {
        let file = existing_file();

        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().returning(|_| Ok(()));
        retriever
            .expect_extract_metadata()
            .returning(|key| Ok(tag_value(key)));
        retriever
            .expect_embedded_picture()
            .times(1)
            .returning(|| Err(BridgeError::OperationFailed("truncated APIC".to_string())));
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        assert!(adapter.extract_metadata(file.path()).is_none());
    }

    #[test]
    fn test_directory_is_failed_without_opening() {
        let dir = tempfile::tempdir().unwrap();
        let mut retriever = MockRetriever::new();
        retriever.expect_set_data_source().never();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let outcome = adapter.try_extract_metadata(dir.path());

        assert!(matches!(
            outcome,
            ExtractionOutcome::Failed(MetadataError::ExtractionFailed(_))
        ));
    }

    #[test]
    fn test_file_not_found_into_result() {
        let path = missing_path();
        let mut retriever = MockRetriever::new();
        expect_release_once(&mut retriever);

        let adapter = OnceFactory::adapter(retriever);
        let err = adapter.try_extract_metadata(&path).into_result().unwrap_err();

        assert!(matches!(err, MetadataError::FileNotFound(_)));
        assert!(err.to_string().contains("missing.mp3"));
    }
}
