//! HTTP transport.
//!
//! A [`Transport`] takes a fully built URL and the signed body bytes, and
//! hands back whatever the server answered. It does not look at the body
//! and never retries.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::response::RawResponse;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Content type the service expects on every request.
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=UTF-8";

/// One synchronous POST per call.
pub trait Transport {
    /// POST `body` to `url` and read the full response.
    ///
    /// Network-level failures (DNS, refused connection, timeout, body read)
    /// are returned as [`GroovesharkError::Http`](crate::GroovesharkError::Http).
    fn post(&self, url: &str, body: Vec<u8>) -> Result<RawResponse>;
}

/// Blocking [`reqwest`] transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a transport honoring the config's timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<RawResponse> {
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_TEXT)
            .body(body)
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::Transport;
    use crate::client::GroovesharkClient;
    use crate::config::ClientConfig;
    use crate::credentials::Credentials;
    use crate::error::Result;
    use crate::response::RawResponse;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// A request captured by [`MockTransport`].
    #[derive(Debug, Clone)]
    pub(crate) struct Recorded {
        pub url: String,
        pub body: serde_json::Value,
        pub raw_body: Vec<u8>,
    }

    /// Replays canned responses in order and records every request.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        replies: RefCell<VecDeque<RawResponse>>,
        requests: RefCell<Vec<Recorded>>,
    }

    impl MockTransport {
        pub(crate) fn replying(bodies: &[&str]) -> Self {
            let mock = Self::default();
            for body in bodies {
                mock.push(RawResponse::new(200, *body));
            }
            mock
        }

        pub(crate) fn push(&self, reply: RawResponse) {
            self.replies.borrow_mut().push_back(reply);
        }

        pub(crate) fn requests(&self) -> Vec<Recorded> {
            self.requests.borrow().clone()
        }

        pub(crate) fn last(&self) -> Recorded {
            self.requests
                .borrow()
                .last()
                .cloned()
                .expect("no request was sent")
        }
    }

    /// Client with keys `pub`/`secrets` over a [`MockTransport`].
    pub(crate) fn client(replies: &[&str]) -> GroovesharkClient<MockTransport> {
        GroovesharkClient::with_transport(
            Credentials::new("pub", "secrets"),
            ClientConfig::default(),
            MockTransport::replying(replies),
        )
    }

    impl Transport for MockTransport {
        fn post(&self, url: &str, body: Vec<u8>) -> Result<RawResponse> {
            self.requests.borrow_mut().push(Recorded {
                url: url.to_owned(),
                body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
                raw_body: body,
            });
            Ok(self
                .replies
                .borrow_mut()
                .pop_front()
                .expect("mock transport ran out of replies"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroovesharkError;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    #[test]
    fn posts_signed_text_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/ws3.php")
            .match_query(Matcher::UrlEncoded("sig".into(), "deadbeef".into()))
            .match_header("content-type", CONTENT_TYPE_TEXT)
            .match_header("user-agent", Matcher::Regex("^grooveshark-rs/".into()))
            .match_body(r#"{"method":"pingService"}"#)
            .with_status(200)
            .with_body(r#"{"header":{},"result":"Hello World"}"#)
            .create();

        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        let url = format!("{}/ws3.php?sig=deadbeef", server.url());
        let raw = transport
            .post(&url, br#"{"method":"pingService"}"#.to_vec())
            .unwrap();

        mock.assert();
        assert_eq!(raw.status, 200);
        assert_eq!(raw.body, r#"{"header":{},"result":"Hello World"}"#);
    }

    #[test]
    fn non_200_status_is_returned_not_raised() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/ws3.php")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("busy")
            .create();

        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        let raw = transport
            .post(&format!("{}/ws3.php?sig=00", server.url()), Vec::new())
            .unwrap();
        assert_eq!(raw, RawResponse::new(503, "busy"));
    }

    #[test]
    fn connection_failure_is_http_error() {
        let config = ClientConfig::default().timeout(Duration::from_secs(2));
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .post("http://127.0.0.1:1/ws3.php?sig=00", Vec::new())
            .unwrap_err();
        assert!(matches!(err, GroovesharkError::Http(_)));
    }
}
