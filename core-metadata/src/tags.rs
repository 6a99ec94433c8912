//! Audio tag record and field parsing
//!
//! The facility reports every field as optional raw text. This module turns
//! that text into the typed [`AudioTags`] record handed back to the host.
//! Parsing never fails: a value that does not parse is simply absent.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tag fields of a single media file.
///
/// Serialized with camelCase keys (`albumArtist`, `trackNumber`, ...). Absent
/// fields serialize as `null` so every key is always present in the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    /// Duration in milliseconds
    pub duration: Option<i64>,
    pub year: Option<i32>,
    pub track_number: Option<i32>,
    pub disc_number: Option<i32>,
    pub genre: Option<String>,
    pub composer: Option<String>,
    /// Bitrate in bits per second
    pub bitrate: Option<i64>,
    /// Whether the file carries an embedded picture
    pub has_artwork: bool,
}

/// Parse a track or disc position.
///
/// Positions are commonly stored as `"<n>/<total>"`; only the leading number
/// is kept.
///
/// ```
/// use core_metadata::parse_track_number;
///
/// assert_eq!(parse_track_number(Some("3/12")), Some(3));
/// assert_eq!(parse_track_number(Some("7")), Some(7));
/// assert_eq!(parse_track_number(Some("abc")), None);
/// assert_eq!(parse_track_number(None), None);
/// ```
pub fn parse_track_number(raw: Option<&str>) -> Option<i32> {
    raw?.split('/').next()?.trim().parse().ok()
}

/// Parse a plain numeric field (duration, year, bitrate).
pub(crate) fn parse_number<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_track_number() {
        assert_eq!(parse_track_number(Some("3/12")), Some(3));
        assert_eq!(parse_track_number(Some("7")), Some(7));
        assert_eq!(parse_track_number(Some("abc")), None);
        assert_eq!(parse_track_number(None), None);
    }

    #[test]
    fn test_parse_track_number_edge_cases() {
        assert_eq!(parse_track_number(Some(" 4 / 10 ")), Some(4));
        assert_eq!(parse_track_number(Some("/10")), None);
        assert_eq!(parse_track_number(Some("")), None);
        assert_eq!(parse_track_number(Some("2/")), Some(2));
        assert_eq!(parse_track_number(Some("1/2/3")), Some(1));
        assert_eq!(parse_track_number(Some("99999999999")), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>(Some("215000")), Some(215_000));
        assert_eq!(parse_number::<i32>(Some(" 1999 ")), Some(1999));
        assert_eq!(parse_number::<i64>(Some("320kbps")), None);
        assert_eq!(parse_number::<i32>(Some("1999-05-01")), None);
        assert_eq!(parse_number::<i64>(None), None);
    }

    #[test]
    fn test_serializes_camel_case_with_nulls() {
        let tags = AudioTags {
            title: Some("Harbor Lights".to_string()),
            album_artist: Some("Various Artists".to_string()),
            track_number: Some(3),
            has_artwork: true,
            ..Default::default()
        };

        let value = serde_json::to_value(&tags).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 12);
        assert_eq!(map["title"], "Harbor Lights");
        assert_eq!(map["albumArtist"], "Various Artists");
        assert_eq!(map["trackNumber"], 3);
        assert_eq!(map["hasArtwork"], true);
        assert!(map["discNumber"].is_null());
        assert!(map["bitrate"].is_null());
    }
}
