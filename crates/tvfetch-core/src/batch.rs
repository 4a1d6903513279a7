//! Batch fetcher: for every key in order, GET, parse, write, report.
//!
//! Strictly sequential. The first failure stops the run; files written for
//! earlier keys are left in place and nothing records where it stopped.

use crate::artifact;
use crate::error::{FetchError, KeyFailure};
use crate::http::{self, HttpOptions};
use crate::keys::{self, Key};
use crate::source::Source;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;

/// Outcome of a batch that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Artifacts written, in key order.
    pub written: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Key(#[from] KeyFailure),
    /// Writing a progress line failed (e.g. stdout closed).
    #[error("progress output")]
    Output(#[source] io::Error),
}

/// Fetches every key from `source` into `out_dir`.
#[derive(Debug, Clone)]
pub struct BatchFetcher {
    source: Source,
    out_dir: PathBuf,
    http: HttpOptions,
}

impl BatchFetcher {
    pub fn new(source: Source, out_dir: impl Into<PathBuf>, http: HttpOptions) -> Self {
        Self {
            source,
            out_dir: out_dir.into(),
            http,
        }
    }

    /// Fetch one key and write its artifact. Returns the artifact path.
    pub fn fetch_one(&self, key: Key) -> Result<PathBuf, FetchError> {
        let url = self.source.resource_url(key)?;
        let resp = http::get(&url, &self.http)?;
        if !resp.is_success() {
            return Err(FetchError::Http {
                status: resp.status,
            });
        }
        let value: Value = serde_json::from_slice(&resp.body)?;
        let path = self.out_dir.join(key.file_name());
        artifact::write_pretty(&path, &value)?;
        Ok(path)
    }

    /// Run the whole key space, writing the key list and one `Got <key>`
    /// line per artifact to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BatchSummary, BatchError> {
        writeln!(out, "{}", key_list()).map_err(BatchError::Output)?;
        tracing::info!(
            source = %self.source.base(),
            out_dir = %self.out_dir.display(),
            count = keys::KEY_COUNT,
            "starting batch"
        );

        let mut written = Vec::with_capacity(keys::KEY_COUNT);
        for key in keys::key_space() {
            let path = self.fetch_one(key).map_err(|error| {
                tracing::error!(key = %key, kind = error.kind(), error = ?error, "fetch failed, halting");
                KeyFailure { key, error }
            })?;
            writeln!(out, "Got {}", key).map_err(BatchError::Output)?;
            tracing::debug!(key = %key, path = %path.display(), "artifact written");
            written.push(path);
        }

        tracing::info!(count = written.len(), "batch complete");
        Ok(BatchSummary { written })
    }
}

/// The key space as a quoted list: `['00', '01', ..., 'ff']`.
fn key_list() -> String {
    let quoted: Vec<String> = keys::key_space().map(|k| format!("'{}'", k)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Fetch all vectors from the fixed source into the current directory,
/// reporting progress on stdout.
pub fn run(http: HttpOptions) -> Result<BatchSummary, BatchError> {
    let fetcher = BatchFetcher::new(Source::default(), ".", http);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    fetcher.run(&mut out)
}
