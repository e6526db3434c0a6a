//! Input decoding — CSV/JSON text to raw records.
//!
//! This is the upstream collaborator the core pipeline relies on: the
//! core never parses text formats itself. A malformed *container*
//! (broken JSON, unreadable CSV) is a hard error here — misuse of the
//! tool, nonzero exit. Malformed *field values* pass through as raw
//! records so the validator can reject them one by one.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use workforce_core::record::{RawRecord, RawValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Accepted JSON payload shapes: `{"teams": [...]}`, a bare array, or a
/// single team object.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Wrapped { teams: Vec<JsonObject> },
    Batch(Vec<JsonObject>),
    Single(JsonObject),
}

pub fn resolve_format(arg: &str, text: &str) -> Result<InputFormat> {
    match arg {
        "csv" => Ok(InputFormat::Csv),
        "json" => Ok(InputFormat::Json),
        "auto" => detect_format(text)
            .context("unrecognized input format; pass --format csv or --format json"),
        other => bail!("unknown --format value '{other}' (expected csv, json, or auto)"),
    }
}

/// Format sniffing: JSON payloads open with an object or array bracket;
/// CSV needs at least one comma and one line break.
pub fn detect_format(text: &str) -> Option<InputFormat> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        Some(InputFormat::Json)
    } else if text.contains(',') && text.contains('\n') {
        Some(InputFormat::Csv)
    } else {
        None
    }
}

pub fn decode(text: &str, format: InputFormat) -> Result<Vec<RawRecord>> {
    match format {
        InputFormat::Json => decode_json(text),
        InputFormat::Csv => decode_csv(text),
    }
}

fn decode_json(text: &str) -> Result<Vec<RawRecord>> {
    let payload: JsonPayload = serde_json::from_str(text).context("invalid JSON input")?;
    let objects = match payload {
        JsonPayload::Wrapped { teams } => teams,
        JsonPayload::Batch(objects) => objects,
        JsonPayload::Single(object) => vec![object],
    };
    Ok(objects.iter().map(to_raw_record).collect())
}

fn to_raw_record(object: &JsonObject) -> RawRecord {
    object
        .iter()
        .map(|(name, value)| (name.clone(), to_raw_value(value)))
        .collect()
}

/// Scalars keep their type; anything else (null, bool, nested values) is
/// carried as text for the validator to reject with a field-level error.
fn to_raw_value(value: &serde_json::Value) -> RawValue {
    match value {
        serde_json::Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => RawValue::Text(s.clone()),
        other => RawValue::Text(other.to_string()),
    }
}

fn decode_csv(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().context("reading CSV header row")?.clone();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // Header is line 1; data rows start at line 2.
        let row = row.with_context(|| format!("reading CSV line {}", i + 2))?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.to_string(), RawValue::Text(cell.to_string())))
            .collect();
        records.push(record);
    }
    Ok(records)
}
