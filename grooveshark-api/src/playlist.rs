//! Playlist methods.
//!
//! ## `getPlaylist` (http)
//!
//! Request: `{ "playlistID": "52262304", "limit": 10 }` (`limit` optional)
//!
//! Response:
//! ```json
//! {
//!   "header": { ... },
//!   "result": {
//!     "PlaylistName": "...", "TSModified": 1350000000, "UserID": 7,
//!     "PlaylistDescription": "...", "CoverArtFilename": "...",
//!     "Songs": [ { "SongID": 30717514, "SongName": "...", ... } ]
//!   }
//! }
//! ```
//!
//! ## `createPlaylist` / `deletePlaylist` (http, session required)
//!
//! Request: `{ "name": "...", "songIDs": [30717514] }` / `{ "playlistID": 80882182 }`
//!
//! Response `result`: `{ "success": true, "playlistID": 80882182, "playlistsTSModified": 123456 }`
//! (`playlistID` only on create). `success: false` is reported as
//! [`GroovesharkError::Operation`](crate::GroovesharkError::Operation).

use crate::client::GroovesharkClient;
use crate::envelope::Parameters;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{Playlist, PlaylistCreated, PlaylistDeleted};
use serde_json::Value;

impl<T: Transport> GroovesharkClient<T> {
    /// Fetch a playlist with its songs, optionally capped at `limit` songs.
    pub fn get_playlist(&self, playlist_id: &str, limit: Option<u32>) -> Result<Playlist> {
        let mut params = Parameters::new();
        params.insert("playlistID".into(), Value::from(playlist_id));
        if let Some(limit) = limit {
            params.insert("limit".into(), Value::from(limit));
        }
        self.call("getPlaylist", Some(params), false)
    }

    /// Create a playlist for the logged-in user.
    pub fn create_playlist(&self, name: &str, song_ids: &[u64]) -> Result<PlaylistCreated> {
        let mut params = Parameters::new();
        params.insert("name".into(), Value::from(name));
        params.insert("songIDs".into(), Value::from(song_ids.to_vec()));
        self.call_acknowledged("createPlaylist", Some(params), false, "create playlist")
    }

    /// Delete one of the logged-in user's playlists.
    pub fn delete_playlist(&self, playlist_id: u64) -> Result<PlaylistDeleted> {
        let mut params = Parameters::new();
        params.insert("playlistID".into(), Value::from(playlist_id));
        self.call_acknowledged("deletePlaylist", Some(params), false, "delete playlist")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GroovesharkError;
    use crate::transport::mock::client;
    use serde_json::json;

    #[test]
    fn create_playlist_success() {
        let gs = client(&[
            r#"{"result":{"success":true,"playlistID":80882182,"playlistsTSModified":123456}}"#,
        ]);
        let created = gs.create_playlist("_TEST_PLAYLIST_", &[30717514]).unwrap();
        assert!(created.success);
        assert_eq!(created.playlist_id, 80882182);
        assert_eq!(created.playlists_ts_modified, 123456);

        let req = gs.transport().last();
        assert!(req.url.starts_with("http://"));
        assert_eq!(req.body["method"], "createPlaylist");
        assert_eq!(
            req.body["parameters"],
            json!({ "name": "_TEST_PLAYLIST_", "songIDs": [30717514] })
        );
    }

    #[test]
    fn create_playlist_unsuccessful_is_operation_error() {
        let gs = client(&[r#"{"result":{"success":false}}"#]);
        let err = gs.create_playlist("_TEST_PLAYLIST_", &[30717514]).unwrap_err();
        assert!(matches!(
            err,
            GroovesharkError::Operation {
                operation: "create playlist"
            }
        ));
        assert_eq!(err.to_string(), "create playlist failed");
    }

    #[test]
    fn create_playlist_service_error_wins_over_flag() {
        let gs = client(&[
            r#"{"errors":[{"code":300,"message":"User auth required"}],"result":{"success":false}}"#,
        ]);
        let err = gs.create_playlist("_TEST_PLAYLIST_", &[]).unwrap_err();
        assert_eq!(err.service_codes(), vec![300]);
    }

    #[test]
    fn delete_playlist() {
        let gs = client(&[
            r#"{"header":{},"result":{"success":true,"playlistsTSModified":123457}}"#,
            r#"{"header":{},"result":{"success":false,"playlistsTSModified":0}}"#,
        ]);
        let deleted = gs.delete_playlist(80882182).unwrap();
        assert_eq!(deleted.playlists_ts_modified, 123457);
        assert_eq!(
            gs.transport().last().body["parameters"],
            json!({ "playlistID": 80882182 })
        );

        let err = gs.delete_playlist(80882182).unwrap_err();
        assert!(matches!(
            err,
            GroovesharkError::Operation {
                operation: "delete playlist"
            }
        ));
    }

    #[test]
    fn get_playlist_decodes_songs() {
        let body = json!({
            "header": { "hostname": "rhl" },
            "result": {
                "PlaylistName": "Road trip",
                "TSModified": 1350000000,
                "UserID": 7,
                "PlaylistDescription": "",
                "CoverArtFilename": "",
                "Songs": [
                    { "SongID": 30717514, "SongName": "One", "ArtistID": 1, "ArtistName": "A",
                      "AlbumID": 3857559, "AlbumName": "Al", "CoverArtFilename": "c.jpg",
                      "Popularity": "1310400046", "IsLowBitrateAvailable": true,
                      "IsVerified": true, "Flags": 0 }
                ]
            }
        })
        .to_string();
        let gs = client(&[&body]);
        let playlist = gs.get_playlist("52262304", Some(10)).unwrap();
        assert_eq!(playlist.user_id, 7);
        assert_eq!(playlist.songs[0].album_id, 3857559);
        assert!(playlist.songs[0].is_low_bitrate_available);
        assert_eq!(
            gs.transport().last().body["parameters"],
            json!({ "limit": 10, "playlistID": "52262304" })
        );
    }

    #[test]
    fn get_playlist_tolerates_null_fields() {
        let gs = client(&[
            r#"{"header":{},"result":{"PlaylistName":"Mix","TSModified":null,"UserID":7,"PlaylistDescription":null,"CoverArtFilename":null,"Songs":[{"SongID":30717514,"SongName":"One","CoverArtFilename":null,"Popularity":null,"AlbumID":null}]}}"#,
        ]);
        let playlist = gs.get_playlist("52262304", None).unwrap();
        assert_eq!(playlist.name, "Mix");
        assert_eq!(playlist.ts_modified, 0);
        assert_eq!(playlist.description, "");
        assert_eq!(playlist.cover_art_filename, "");
        assert_eq!(playlist.songs[0].song_id, 30717514);
        assert_eq!(playlist.songs[0].popularity, "");
        assert_eq!(playlist.songs[0].album_id, 0);
    }

    #[test]
    fn get_playlist_omits_absent_limit() {
        let gs = client(&[r#"{"header":{},"result":{"PlaylistName":"x","UserID":1}}"#]);
        gs.get_playlist("52262304", None).unwrap();
        assert_eq!(
            gs.transport().last().body["parameters"],
            json!({ "playlistID": "52262304" })
        );
    }

    #[test]
    fn get_playlist_unknown_id() {
        let gs = client(&[r#"{"errors":[{"code":404,"message":"Playlist not found"}]}"#]);
        let err = gs.get_playlist("1", None).unwrap_err();
        match err {
            GroovesharkError::Service(report) => {
                assert_eq!(report.to_string(), "Playlist not found (code 404)");
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }
}
