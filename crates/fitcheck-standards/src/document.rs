//! Standards documents: band tables supplied as JSON instead of the
//! built-in tables.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::band::BandTable;
use crate::error::StandardsError;
use crate::evaluator::Standards;

/// Current document version. Bump this when changing the shape and add a
/// step to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsDocument {
    /// Missing or 0 = pre-versioned document.
    #[serde(default)]
    pub config_version: u32,
    pub general: BandTable,
    #[serde(default)]
    pub athlete: BandTable,
}

impl StandardsDocument {
    pub fn from_standards(standards: &Standards) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            general: standards.general().clone(),
            athlete: standards.athlete().clone(),
        }
    }

    pub fn into_standards(self) -> Result<Standards, StandardsError> {
        let standards = Standards::new(self.general, self.athlete);
        standards.validate()?;
        Ok(standards)
    }
}

/// Parse, migrate and validate a standards document.
pub fn load_standards(contents: &str) -> Result<Standards, StandardsError> {
    let json: Value = serde_json::from_str(contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| StandardsError::UnsupportedVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    let document: StandardsDocument = serde_json::from_value(migrated)?;
    let standards = document.into_standards()?;

    tracing::info!(
        version = on_disk_version,
        general = standards.general().len(),
        athlete = standards.athlete().len(),
        "standards document loaded"
    );
    Ok(standards)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: Value, from_version: u32) -> Result<Value, StandardsError> {
    if from_version > CURRENT_VERSION {
        return Err(StandardsError::UnsupportedVersion {
            found: from_version.into(),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: one flat `bands` list tagged with `table` becomes
    // separate `general` and `athlete` lists.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(StandardsError::NotAnObject)?;
        let flat = match obj.remove("bands") {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        };

        let mut general = Vec::new();
        let mut athlete = Vec::new();
        for mut row in flat {
            let table = row
                .as_object_mut()
                .and_then(|band| band.remove("table"))
                .and_then(|t| t.as_str().map(str::to_string));
            match table.as_deref() {
                Some("athlete") => athlete.push(row),
                _ => general.push(row),
            }
        }

        obj.entry("general").or_insert(Value::Array(general));
        obj.entry("athlete").or_insert(Value::Array(athlete));
        obj.insert("config_version".to_string(), Value::Number(1.into()));
        tracing::info!("migrated standards document v0 → v1 (split tables)");
    }

    Ok(json)
}
