#![forbid(unsafe_code)]

//! Golden trace fixtures for regression testing.
//!
//! Script runs emit JSONL traces ([`crate::script::ScriptReport`]);
//! this module validates those lines, checksums whole traces, and moves
//! them to and from fixture files. A changed checksum means the command
//! protocol drifted, which is exactly what a golden test exists to
//! catch.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

/// Checksum prefix for clarity in logs.
const CHECKSUM_PREFIX: &str = "fnv:";

/// Parses one trace line as a JSON object.
///
/// Returns `None` for malformed JSON and for well-formed JSON that is
/// not an object (a bare array or scalar). Trace consumers treat both
/// the same way: the trace is broken.
pub fn parse_trace_line(line: &str) -> Option<Value> {
    let value: Value = serde_json::from_str(line).ok()?;
    value.is_object().then_some(value)
}

/// Field lookup for one trace line, by JSON key.
pub fn trace_field<'a>(line: &'a Value, key: &str) -> Option<&'a Value> {
    line.as_object().and_then(|object| object.get(key))
}

/// Deterministic checksum of a whole trace.
///
/// FNV-1a over every line plus a separator, hex encoded. Stable across
/// runs and platforms; any reordering, insertion, or edit changes it.
#[must_use]
pub fn compute_trace_checksum(lines: &[String]) -> String {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x1000_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for line in lines {
        for byte in line.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash ^= u64::from(b'\n');
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("{CHECKSUM_PREFIX}{hash:016x}")
}

/// Writes a trace to a fixture file, one JSONL line per row.
pub fn write_trace_fixture(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)
}

/// Loads a trace fixture written by [`write_trace_fixture`].
pub fn load_trace_fixture(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_object_lines_parse() {
        let value = parse_trace_line(r#"{"event":"grab","index":2}"#).unwrap();
        assert_eq!(
            trace_field(&value, "event").and_then(Value::as_str),
            Some("grab")
        );
        assert_eq!(
            trace_field(&value, "index").and_then(Value::as_u64),
            Some(2)
        );
    }

    #[test]
    fn non_objects_and_garbage_do_not_parse() {
        assert!(parse_trace_line("[1,2,3]").is_none());
        assert!(parse_trace_line("not json").is_none());
        assert!(parse_trace_line("42").is_none());
    }

    #[test]
    fn checksum_is_stable_and_order_sensitive() {
        let lines = vec![r#"{"event":"grab"}"#.to_owned(), r#"{"event":"move"}"#.to_owned()];
        let reversed: Vec<String> = lines.iter().rev().cloned().collect();
        assert_eq!(compute_trace_checksum(&lines), compute_trace_checksum(&lines));
        assert_ne!(compute_trace_checksum(&lines), compute_trace_checksum(&reversed));
        assert!(compute_trace_checksum(&lines).starts_with(CHECKSUM_PREFIX));
    }
}
