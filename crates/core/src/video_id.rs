use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::error::{CloudError, Result};

pub const VIDEO_ID_LEN: usize = 11;

static URL_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|youtu\.be/)([A-Za-z0-9_-]{11})").expect("valid video id pattern")
});

/// An 11-character YouTube video identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Parse a bare identifier such as `dQw4w9WgXcQ`.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CloudError::invalid_input(input, "video id is empty"));
        }
        if input.len() != VIDEO_ID_LEN {
            return Err(CloudError::invalid_input(
                input,
                format!("video id must be {VIDEO_ID_LEN} characters"),
            ));
        }
        if !input.bytes().all(is_id_byte) {
            return Err(CloudError::invalid_input(
                input,
                "video id may only contain letters, digits, '-' and '_'",
            ));
        }
        Ok(Self(input.to_string()))
    }

    /// Extract the identifier from a watch or short link URL.
    pub fn from_url(url: &str) -> Result<Self> {
        URL_VIDEO_ID
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| CloudError::invalid_input(url, "no video id found in URL"))
    }

    /// Accept either a bare identifier or a URL containing one.
    pub fn from_input(input: &str) -> Result<Self> {
        Self::parse(input).or_else(|err| {
            if input.contains("v=") || input.contains("youtu.be/") {
                Self::from_url(input)
            } else {
                Err(err)
            }
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

impl FromStr for VideoId {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_input(s)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_identifier() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn rejects_wrong_shape() {
        for input in ["", "invalid!", "dQw4w9WgXc", "dQw4w9WgXcQQ", "dQw4w9WgXc!"] {
            let err = VideoId::parse(input).unwrap_err();
            assert!(matches!(err, CloudError::InvalidInput { .. }), "{input}");
        }
    }

    #[test]
    fn extracts_from_watch_and_short_urls() {
        let watch = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        let short = VideoId::from_url("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap();
        assert_eq!(watch, short);
    }

    #[test]
    fn from_input_accepts_both_forms() {
        assert!(VideoId::from_input("a_b-c1234XY").is_ok());
        assert!(VideoId::from_input("https://youtube.com/watch?v=a_b-c1234XY").is_ok());
        assert!("https://example.com/video".parse::<VideoId>().is_err());
    }
}
