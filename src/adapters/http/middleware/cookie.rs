//! Signed session cookie.
//!
//! The cookie value is `<session uuid>.<hex HMAC-SHA256 of the uuid>`. A
//! value whose signature does not verify is treated exactly like a missing
//! cookie.

use std::time::Duration;

use http::{header::COOKIE, HeaderMap};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::SessionId;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session ids.
#[derive(Clone)]
pub struct CookieSigner {
    secret: SecretString,
}

impl CookieSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Produce the cookie value for a session id.
    pub fn sign(&self, id: &SessionId) -> String {
        let id = id.to_string();
        format!("{}.{}", id, hex::encode(self.mac(&id)))
    }

    /// Recover the session id from a cookie value, if the signature holds.
    pub fn verify(&self, value: &str) -> Option<SessionId> {
        let (id, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;
        let expected = self.mac(id);

        if signature.len() != expected.len() || !bool::from(signature.ct_eq(&expected)) {
            return None;
        }
        id.parse().ok()
    }

    fn mac(&self, payload: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieSigner").finish_non_exhaustive()
    }
}

/// Attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub max_age: Duration,
    pub secure: bool,
}

impl SessionCookie {
    /// Find this cookie's raw value among the request's `Cookie` headers.
    pub fn read<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value)
    }

    /// Render a `Set-Cookie` header value carrying `value`.
    pub fn render(&self, value: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name,
            value,
            self.max_age.as_secs()
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
