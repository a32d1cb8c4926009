use crate::error::{TimetableError, TimetableResult};
use crate::loader::{self, InputSource};
use crate::types::Timetable;
use serde_json::Value;
use tracing::debug;

/// Load and parse a timetable from a file or stdin
pub fn parse_timetable(source: &InputSource) -> TimetableResult<Timetable> {
    let content = loader::load_text(source)?;
    parse_timetable_str(&content)
}

/// Parse timetable JSON text
pub fn parse_timetable_str(content: &str) -> TimetableResult<Timetable> {
    if content.trim().is_empty() {
        return Err(TimetableError::EmptyInput);
    }

    let root: Value = serde_json::from_str(content)?;

    let Value::Object(map) = &root else {
        return Err(TimetableError::Schema(format!(
            "expected a JSON object at the root, found {}",
            json_kind(&root)
        )));
    };

    if !map.contains_key("days") {
        return Err(TimetableError::MissingDays);
    }

    let timetable: Timetable =
        serde_json::from_value(root).map_err(|e| TimetableError::Schema(e.to_string()))?;

    debug!(
        days = timetable.days.len(),
        slots = timetable.slot_count(),
        "parsed timetable"
    );

    Ok(timetable)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
