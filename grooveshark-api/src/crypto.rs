//! Request signing and password hashing.
//!
//! Every request is signed with HMAC-MD5 over the exact body bytes, keyed
//! by the client's secret key, and sent as `?sig=<hex>`. Passwords go over
//! the wire as plain MD5 hex; the service requires it.

use hmac::{Hmac, Mac};
use md5::Md5;

type HmacMd5 = Hmac<Md5>;

/// Compute the lowercase hex HMAC-MD5 of `payload` keyed by `secret_key`.
pub fn sign(payload: &[u8], secret_key: &[u8]) -> String {
    let mut mac = HmacMd5::new_from_slice(secret_key).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Lowercase hex MD5 digest of a password, as `authenticate` expects it.
pub fn password_digest(password: &str) -> String {
    use md5::Digest;
    hex::encode(Md5::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_matches_known_vector() {
        let sig = sign(
            b"{'x': 'some json value'}",
            b"1234567890abcdefghijklmnopqrstuv",
        );
        assert_eq!(sig, "9bdf0ebbb4cb2c945022670a16c6b5dc");
    }

    #[test]
    fn sign_is_deterministic() {
        let a = sign(b"{\"method\":\"pingService\"}", b"secret");
        let b = sign(b"{\"method\":\"pingService\"}", b"secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sign_depends_on_key() {
        assert_ne!(sign(b"payload", b"key-one"), sign(b"payload", b"key-two"));
    }

    #[test]
    fn password_digest_is_md5_hex() {
        assert_eq!(password_digest("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(password_digest(""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
