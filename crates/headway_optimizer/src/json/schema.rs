use schemars::schema_for;

use crate::json::types;

/// JSON schema of the optimized schedule document written by the CLI and served by the API.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonOptimizedSchedule))
}
