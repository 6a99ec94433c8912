//! Media metadata facility implementation using lofty

use bridge_traits::{
    error::{BridgeError, Result},
    media::{MetadataKey, MetadataRetriever, RetrieverFactory},
};
use bytes::Bytes;
use lofty::config::ParseOptions;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::picture::PictureType;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};
use std::path::Path;
use tracing::debug;

enum SourceState {
    Unset,
    Loaded(TaggedFile),
    Released,
}

/// lofty-backed retriever
///
/// Parses the whole tag container on `set_data_source` and answers queries
/// from the parsed file:
/// - text fields from the primary tag, falling back to the first tag present
/// - duration and bitrate from the audio properties
/// - the front cover (or the first picture) as the embedded picture
pub struct LoftyRetriever {
    parse_options: ParseOptions,
    state: SourceState,
}

impl LoftyRetriever {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::new())
    }

    pub fn with_options(parse_options: ParseOptions) -> Self {
        Self {
            parse_options,
            state: SourceState::Unset,
        }
    }

    fn loaded(&self) -> Result<&TaggedFile> {
        match &self.state {
            SourceState::Loaded(file) => Ok(file),
            SourceState::Unset => Err(BridgeError::NoDataSource),
            SourceState::Released => Err(BridgeError::Released),
        }
    }

    fn tag(file: &TaggedFile) -> Option<&Tag> {
        file.primary_tag().or_else(|| file.first_tag())
    }

    fn text_field(tag: &Tag, key: MetadataKey) -> Option<String> {
        match key {
            MetadataKey::Title => tag.title().map(|s| s.into_owned()),
            MetadataKey::Artist => tag.artist().map(|s| s.into_owned()),
            MetadataKey::Album => tag.album().map(|s| s.into_owned()),
            MetadataKey::Genre => tag.genre().map(|s| s.into_owned()),
            MetadataKey::AlbumArtist => tag.get_string(&ItemKey::AlbumArtist).map(str::to_string),
            MetadataKey::Composer => tag.get_string(&ItemKey::Composer).map(str::to_string),
            MetadataKey::Year => tag.year().map(|y| y.to_string()),
            MetadataKey::CdTrackNumber => format_position(tag.track(), tag.track_total()),
            MetadataKey::DiscNumber => format_position(tag.disk(), tag.disk_total()),
            MetadataKey::Duration | MetadataKey::Bitrate => None,
        }
    }
}

impl Default for LoftyRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataRetriever for LoftyRetriever {
    fn set_data_source(&mut self, path: &Path) -> Result<()> {
        if matches!(self.state, SourceState::Released) {
            return Err(BridgeError::Released);
        }

        let tagged_file = Probe::open(path)
            .map_err(|e| BridgeError::unsupported_source(path, e))?
            .options(self.parse_options)
            .guess_file_type()?
            .read()
            .map_err(|e| BridgeError::unsupported_source(path, e))?;

        debug!(
            file_type = ?tagged_file.file_type(),
            tags = tagged_file.tags().len(),
            "Data source opened"
        );

        self.state = SourceState::Loaded(tagged_file);
        Ok(())
    }

    fn embedded_picture(&mut self) -> Result<Option<Bytes>> {
        let file = self.loaded()?;
        let Some(tag) = Self::tag(file) else {
            return Ok(None);
        };

        let pictures = tag.pictures();
        let picture = pictures
            .iter()
            .find(|pic| pic.pic_type() == PictureType::CoverFront && !pic.data().is_empty())
            .or_else(|| pictures.iter().find(|pic| !pic.data().is_empty()));

        Ok(picture.map(|pic| Bytes::copy_from_slice(pic.data())))
    }

    fn extract_metadata(&mut self, key: MetadataKey) -> Result<Option<String>> {
        let file = self.loaded()?;
        let properties = file.properties();

        let value = match key {
            MetadataKey::Duration => {
                let millis = properties.duration().as_millis();
                (millis > 0).then(|| millis.to_string())
            }
            MetadataKey::Bitrate => properties
                .overall_bitrate()
                .or_else(|| properties.audio_bitrate())
                .filter(|kbps| *kbps > 0)
                .map(|kbps| (u64::from(kbps) * 1000).to_string()),
            _ => Self::tag(file).and_then(|tag| Self::text_field(tag, key)),
        };

        Ok(value)
    }

    fn release(&mut self) -> Result<()> {
        self.state = SourceState::Released;
        Ok(())
    }
}

/// Hands out a fresh [`LoftyRetriever`] per call
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyRetrieverFactory {
    parse_options: Option<ParseOptions>,
}

impl LoftyRetrieverFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(parse_options: ParseOptions) -> Self {
        Self {
            parse_options: Some(parse_options),
        }
    }
}

impl RetrieverFactory for LoftyRetrieverFactory {
    fn create(&self) -> Box<dyn MetadataRetriever> {
        match self.parse_options {
            Some(options) => Box::new(LoftyRetriever::with_options(options)),
            None => Box::new(LoftyRetriever::new()),
        }
    }
}

/// `"<n>/<total>"` when a total is known, `"<n>"` otherwise
fn format_position(number: Option<u32>, total: Option<u32>) -> Option<String> {
    match (number, total) {
        (Some(number), Some(total)) => Some(format!("{}/{}", number, total)),
        (Some(number), None) => Some(number.to_string()),
        (None, _) => None,
    }
}
