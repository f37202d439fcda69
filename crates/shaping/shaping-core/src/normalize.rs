//! Record normalizer
//!
//! Coerces loosely-typed JSON rows into [`UsageRecord`]s. Never fails:
//! missing, null and non-numeric values become `0.0`, missing labels
//! become `"Unknown"` and an unparseable date becomes `None`.

use serde_json::{Map, Value};
use shaping_spi::{parse_calendar_day, DayOfWeek, UsageRecord, DECLARED_FEATURES, UNKNOWN_LABEL};
use tracing::{debug, warn};

const DATE: &str = "date";
const REGION: &str = "region";
const RESOURCE_TYPE: &str = "resource_type";
const USAGE_CPU: &str = "usage_cpu";
const USAGE_STORAGE: &str = "usage_storage";
const DAY_OF_WEEK: &str = "day_of_week";

/// Coerce a JSON value to a finite number, `0.0` otherwise.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

fn day_code(value: Option<&Value>) -> Option<i64> {
    let raw = parse_number(value)?;
    (raw.fract() == 0.0).then_some(raw as i64)
}

/// Normalize one row. Non-object rows yield an all-default record.
pub fn normalize_row(row: &Value) -> UsageRecord {
    let empty = Map::new();
    let fields = row.as_object().unwrap_or(&empty);

    let date = fields
        .get(DATE)
        .and_then(Value::as_str)
        .and_then(|raw| parse_calendar_day(raw).ok());

    let mut record = UsageRecord::new(
        date,
        label(fields.get(REGION)),
        label(fields.get(RESOURCE_TYPE)),
        coerce_number(fields.get(USAGE_CPU)),
        coerce_number(fields.get(USAGE_STORAGE)),
    );
    record.day_of_week =
        day_code(fields.get(DAY_OF_WEEK)).or_else(|| date.map(|d| DayOfWeek::from_date(d).code()));

    for name in DECLARED_FEATURES {
        record.features.insert(name.to_string(), coerce_number(fields.get(name)));
    }
    for (name, value) in fields {
        if is_reserved(name) || record.features.contains_key(name) {
            continue;
        }
        if let Some(number) = parse_number(Some(value)) {
            record.features.insert(name.clone(), number);
        }
    }

    record
}

fn is_reserved(name: &str) -> bool {
    matches!(
        name,
        DATE | REGION | RESOURCE_TYPE | USAGE_CPU | USAGE_STORAGE | DAY_OF_WEEK
    )
}

/// Normalize a batch; the output has exactly one record per input row.
pub fn normalize_rows(rows: &[Value]) -> Vec<UsageRecord> {
    let records: Vec<UsageRecord> = rows.iter().map(normalize_row).collect();

    let undated = records.iter().filter(|r| r.date.is_none()).count();
    if undated > 0 {
        warn!(undated, total = records.len(), "rows without a parseable date");
    }
    debug!(rows = records.len(), "normalized usage rows");

    records
}
