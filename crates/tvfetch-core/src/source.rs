//! Remote resource location: base URL plus `<key>.json`.

use crate::error::FetchError;
use crate::keys::Key;
use url::Url;

/// Directory holding the 6502 (NES variant) test vectors. Must end in `/`.
pub const BASE_URL: &str =
    "https://raw.githubusercontent.com/TomHarte/ProcessorTests/main/nes6502/v1/";

/// Parsed base URL for the resources. A trailing `/` is added if missing so
/// that joining a file name appends rather than replaces the last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    base: Url,
}

impl Source {
    pub fn parse(base: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Source { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of the resource for `key`.
    pub fn resource_url(&self, key: Key) -> Result<Url, FetchError> {
        Ok(self.base.join(&key.file_name())?)
    }
}

impl Default for Source {
    fn default() -> Self {
        Source {
            base: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
        }
    }
}
