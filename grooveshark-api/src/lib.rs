//! Grooveshark public web service client library.
//!
//! Every remote method is a signed JSON POST to a single endpoint. The
//! service always answers HTTP 200, so failures are read from the body:
//! a non-zero entry in `errors` is a service error, and many methods also
//! return a `success` flag that has to be checked on top of that.
//!
//! ```no_run
//! use grooveshark_api::{Credentials, GroovesharkClient};
//!
//! let mut client = GroovesharkClient::new(Credentials::resolve()?)?;
//! let user = client.authenticate("login", "password")?;
//! let created = client.create_playlist("Road trip", &[30717514])?;
//! println!("{} created playlist {}", user.first_name, created.playlist_id);
//! # Ok::<(), grooveshark_api::GroovesharkError>(())
//! ```
//!
//! # Method mapping
//!
//! | Method                                        | Remote method         | Scheme |
//! |-----------------------------------------------|-----------------------|--------|
//! | [`GroovesharkClient::start_session`]          | `startSession`        | https  |
//! | [`GroovesharkClient::authenticate`]           | `authenticate`        | https  |
//! | [`GroovesharkClient::logout`]                 | `logout`              | https  |
//! | [`GroovesharkClient::ping_service`]           | `pingService`         | https  |
//! | [`GroovesharkClient::add_user_favorite_song`] | `addUserFavoriteSong` | http   |
//! | [`GroovesharkClient::create_playlist`]        | `createPlaylist`      | http   |
//! | [`GroovesharkClient::delete_playlist`]        | `deletePlaylist`      | http   |
//! | [`GroovesharkClient::get_playlist`]           | `getPlaylist`         | http   |
//!
//! Anything else can be reached through [`GroovesharkClient::call`] with a
//! caller-chosen result type.
//!
//! # Concurrency
//!
//! One client holds one session. Session-changing methods take `&mut self`,
//! so sharing a client across threads needs the caller's own lock.

pub mod client;
pub mod config;
pub mod credentials;
pub mod crypto;
pub mod envelope;
pub mod error;
mod favorites;
mod playlist;
pub mod response;
pub mod session;
pub mod transport;
pub mod types;

pub use client::GroovesharkClient;
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use envelope::{Envelope, Parameters};
pub use error::{GroovesharkError, Result};
pub use response::{ErrorEntry, RawResponse, ServiceErrorReport, classify, decode};
pub use session::Session;
pub use transport::{HttpTransport, Transport};
