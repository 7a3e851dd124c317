//! JSON output for `--json` mode: one event per line.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a typed event to `out` as a single NDJSON line.
pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
