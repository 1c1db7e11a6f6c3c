//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the ids of `content.projects`, in order.
pub fn assert_project_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let projects = json["content"]["projects"]
        .as_array()
        .context("Expected 'content.projects' array in JSON")?;

    let ids: Vec<String> = projects
        .iter()
        .map(|p| match &p["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    if ids != expected {
        anyhow::bail!("Expected project ids {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert the status badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}
