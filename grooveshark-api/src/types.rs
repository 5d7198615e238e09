//! Result records returned by the typed operations.
//!
//! Field names on the wire follow the service (`SongID`, `PlaylistName`,
//! `playlistsTSModified`, ...); Rust fields are `snake_case`. Every record
//! tolerates missing and `null` fields, which decode to their zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the type's zero value, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

/// Records carrying the service's `success` flag.
///
/// A `false` flag is a failure even when the response had no `errors`.
pub trait Acknowledged {
    fn success(&self) -> bool;
}

macro_rules! acknowledged {
    ($($ty:ty),+ $(,)?) => {
        $(impl Acknowledged for $ty {
            fn success(&self) -> bool {
                self.success
            }
        })+
    };
}

acknowledged!(Acknowledgement, SessionStarted, User, PlaylistCreated, PlaylistDeleted);

/// Bare `{ "success": bool }` result (e.g. `addUserFavoriteSong`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acknowledgement {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Result of `startSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStarted {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(rename = "sessionID", deserialize_with = "null_as_default")]
    pub session_id: String,
}

/// An authenticated user, returned by `authenticate`.
///
/// API JSON fields: `UserID`, `Email`, `FName`, `LName`, `IsPlus`,
/// `IsAnywhere`, `IsPremium`, `success`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "UserID", deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(rename = "Email", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "FName", deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "LName", deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(rename = "IsPlus", deserialize_with = "null_as_default")]
    pub is_plus: bool,
    #[serde(rename = "IsAnywhere", deserialize_with = "null_as_default")]
    pub is_anywhere: bool,
    #[serde(rename = "IsPremium", deserialize_with = "null_as_default")]
    pub is_premium: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
}

/// A song as listed inside a [`Playlist`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongInfo {
    #[serde(rename = "SongID", deserialize_with = "null_as_default")]
    pub song_id: u64,
    #[serde(rename = "SongName", deserialize_with = "null_as_default")]
    pub song_name: String,
    #[serde(rename = "ArtistID", deserialize_with = "null_as_default")]
    pub artist_id: u64,
    #[serde(rename = "ArtistName", deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(rename = "AlbumID", deserialize_with = "null_as_default")]
    pub album_id: u64,
    #[serde(rename = "AlbumName", deserialize_with = "null_as_default")]
    pub album_name: String,
    #[serde(rename = "CoverArtFilename", deserialize_with = "null_as_default")]
    pub cover_art_filename: String,
    /// Popularity score; the service sends it as a string.
    #[serde(rename = "Popularity", deserialize_with = "null_as_default")]
    pub popularity: String,
    #[serde(rename = "IsLowBitrateAvailable", deserialize_with = "null_as_default")]
    pub is_low_bitrate_available: bool,
    #[serde(rename = "IsVerified", deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(rename = "Flags", deserialize_with = "null_as_default")]
    pub flags: i64,
}

/// Result of `getPlaylist`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    #[serde(rename = "PlaylistName", deserialize_with = "null_as_default")]
    pub name: String,
    /// Last modification, unix seconds.
    #[serde(rename = "TSModified", deserialize_with = "null_as_default")]
    pub ts_modified: i64,
    /// Owner of the playlist.
    #[serde(rename = "UserID", deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(rename = "PlaylistDescription", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "CoverArtFilename", deserialize_with = "null_as_default")]
    pub cover_art_filename: String,
    #[serde(rename = "Songs", deserialize_with = "null_as_default")]
    pub songs: Vec<SongInfo>,
}

/// Result of `createPlaylist`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistCreated {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(rename = "playlistID", deserialize_with = "null_as_default")]
    pub playlist_id: u64,
    /// Modification stamp of the user's playlist collection.
    #[serde(rename = "playlistsTSModified", deserialize_with = "null_as_default")]
    pub playlists_ts_modified: i64,
}

/// Result of `deletePlaylist`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistDeleted {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(rename = "playlistsTSModified", deserialize_with = "null_as_default")]
    pub playlists_ts_modified: i64,
}
