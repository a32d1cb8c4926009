use serde::Deserialize;

//==============================================================================
// Timetable document (JSON export of the school planning software)
//==============================================================================

/// Label used for a day whose date string is missing
pub const UNKNOWN_DAY_LABEL: &str = "???";

/// Label used for a resource whose short name is missing
pub const UNKNOWN_TEACHER_LABEL: &str = "?";

/// Root of the timetable JSON
///
/// Only `days` and `slots` are read; every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Timetable {
    pub days: Vec<Day>,
    /// Slot definitions. Only the number of entries matters.
    pub slots: Vec<serde_json::Value>,
}

impl Timetable {
    /// Number of slot columns per day
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// One school day with the per-resource rows of that day
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceRow>,
}

impl Day {
    /// Date string as shown in the header row
    pub fn label(&self) -> &str {
        self.day.as_deref().unwrap_or(UNKNOWN_DAY_LABEL)
    }
}

/// A teacher (resource) and its slot cells for one day
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRow {
    pub resource: Resource,
    #[serde(default)]
    pub cells: Vec<SlotCell>,
}

impl ResourceRow {
    pub fn short_name(&self) -> &str {
        self.resource
            .short_name
            .as_deref()
            .unwrap_or(UNKNOWN_TEACHER_LABEL)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub short_name: Option<String>,
}

/// One time slot of one resource on one day
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCell {
    #[serde(default)]
    pub grid_entries: Vec<serde_json::Value>,
}

impl SlotCell {
    /// A slot is occupied as soon as it carries any grid entry
    pub fn is_occupied(&self) -> bool {
        !self.grid_entries.is_empty()
    }
}
