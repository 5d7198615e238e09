//! Favorites.
//!
//! `addUserFavoriteSong` (http, session required): `{ "songID": 30717514 }`
//! → `{ "success": bool }`.

use crate::client::GroovesharkClient;
use crate::envelope::Parameters;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Acknowledgement;
use serde_json::Value;

impl<T: Transport> GroovesharkClient<T> {
    /// Add a song to the logged-in user's favorites.
    pub fn add_user_favorite_song(&self, song_id: u64) -> Result<()> {
        let mut params = Parameters::new();
        params.insert("songID".into(), Value::from(song_id));
        let _: Acknowledgement =
            self.call_acknowledged("addUserFavoriteSong", Some(params), false, "add favorite song")?;
        Ok(())
    }
}
