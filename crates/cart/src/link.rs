//! Messaging deep-links.
//!
//! A deep-link opens an external chat prefilled with text:
//! `<base-url>/<destination>?text=<percent-encoded message>`. The base URL
//! and destination are fixed configuration; only the text varies.

use thiserror::Error;
use url::Url;

/// Default messaging base URL.
pub const DEFAULT_BASE_URL: &str = "https://wa.me/";

/// Deep-link configuration errors.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid messaging base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("messaging base URL must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("messaging destination must be non-empty ASCII letters or digits, got {0:?}")]
    InvalidDestination(String),
}

/// Opens a URL in a new external navigation context.
///
/// Fire-and-forget: callers never learn whether the link actually opened.
pub trait LinkOpener {
    fn open(&self, url: &Url);
}

/// Validated deep-link template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    target: Url,
}

impl DeepLink {
    /// Build a template for `destination` under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError`] if the base URL does not parse, is not
    /// http(s), or the destination is not plain alphanumeric.
    pub fn new(base_url: &str, destination: &str) -> Result<Self, LinkError> {
        if destination.is_empty() || !destination.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(LinkError::InvalidDestination(destination.to_owned()));
        }

        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(LinkError::UnsupportedScheme(base.scheme().to_owned()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let target = base.join(destination)?;
        Ok(Self { target })
    }

    /// The link without any text, e.g. `https://wa.me/918866998866`.
    #[must_use]
    pub const fn target(&self) -> &Url {
        &self.target
    }

    /// The link carrying `message` as its prefilled text.
    ///
    /// Every byte outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is
    /// percent-encoded, so newlines and currency symbols survive intact.
    #[must_use]
    pub fn with_text(&self, message: &str) -> Url {
        let mut url = self.target.clone();
        url.set_query(Some(&format!("text={}", urlencoding::encode(message))));
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_target_joins_destination() {
        let link = DeepLink::new(DEFAULT_BASE_URL, "918866998866").unwrap();
        assert_eq!(link.target().as_str(), "https://wa.me/918866998866");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let link = DeepLink::new("https://chat.example.com/send", "42").unwrap();
        assert_eq!(link.target().as_str(), "https://chat.example.com/send/42");
    }

    #[test]
    fn test_with_text_percent_encodes_everything_reserved() {
        let link = DeepLink::new(DEFAULT_BASE_URL, "918866998866").unwrap();
        let url = link.with_text("Naan x2 - ₹80.00\nTotal: ₹80.00 & more?");
        assert_eq!(
            url.as_str(),
            "https://wa.me/918866998866?text=Naan%20x2%20-%20%E2%82%B980.00%0ATotal%3A%20%E2%82%B980.00%20%26%20more%3F"
        );
    }

    #[test]
    fn test_text_roundtrips_through_query_pairs() {
        let link = DeepLink::new(DEFAULT_BASE_URL, "1").unwrap();
        let message = "Hello! I'd like:\n\nDal x1 - ₹150.00";
        let url = link.with_text(message);
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, message);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(matches!(
            DeepLink::new("not a url", "1"),
            Err(LinkError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            DeepLink::new("ftp://wa.me/", "1"),
            Err(LinkError::UnsupportedScheme(_))
        ));
        for destination in ["", "+91 88", "../admin", "91?x=1"] {
            assert!(matches!(
                DeepLink::new(DEFAULT_BASE_URL, destination),
                Err(LinkError::InvalidDestination(_))
            ));
        }
    }
}
