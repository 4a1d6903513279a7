//! Local artifact writer: a JSON value tree pretty-printed with 4-space indent.

use crate::error::FetchError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serialize `value` with 4-space indentation into `w`. No trailing newline.
pub fn write_pretty_to<W: Write>(w: W, value: &Value) -> Result<(), serde_json::Error> {
    let mut ser = serde_json::Serializer::with_formatter(w, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)
}

/// In-memory form of what `write_pretty` puts on disk.
pub fn to_pretty_string(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    write_pretty_to(&mut buf, value)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Create or truncate `path` and write `value` to it. The file is closed when
/// this returns, whether or not the write succeeded.
pub fn write_pretty(path: &Path, value: &Value) -> Result<(), FetchError> {
    let io_err = |source: std::io::Error| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    write_pretty_to(&mut w, value).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            FetchError::Json(e)
        }
    })?;
    w.flush().map_err(io_err)?;
    Ok(())
}
