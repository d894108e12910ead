// Headless dispatch of scripted actions
//
// A script is JSON Lines, one action per line in the wire form:
//
//   # comments and blank lines are skipped
//   {"type": "ADD_PRODUCT", "payload": {"id": 1, "title": "Lamp", ...}}
//   {"type": "DELETE_PRODUCT", "payload": 1}
//
// Every line is parsed before anything is dispatched, so a malformed line
// never leaves a half-applied catalog behind.

use crate::catalog::{Action, Catalog, Store};
use anyhow::{Context, Result};
use std::io::BufRead;

/// Parse every action in a script
pub fn parse_script(reader: impl BufRead) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action: Action = serde_json::from_str(trimmed)
            .with_context(|| format!("Line {}: invalid action", line_no))?;
        if action == Action::Unknown {
            tracing::warn!(line = line_no, "unrecognized action type, dispatching as no-op");
        }
        actions.push(action);
    }

    Ok(actions)
}

/// Dispatch a script through a fresh store and return the final snapshot
pub fn apply_script(reader: impl BufRead) -> Result<Catalog> {
    let actions = parse_script(reader)?;
    let count = actions.len();

    let mut store = Store::new();
    for action in actions {
        store.dispatch(action);
    }

    tracing::info!(
        actions = count,
        products = store.state().len(),
        "script applied"
    );
    Ok(store.state().clone())
}
