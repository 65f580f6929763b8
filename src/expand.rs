//! Breaking fixture rows down along a new dimension.

use std::collections::{HashMap, HashSet};

use log::warn;
use rand::Rng;
use serde_json::Value;

use crate::error::{FixtureError, Result};
use crate::jsonl::Record;
use crate::partition::split_among;
use crate::randomize::randomize;

/// The dimension to add and how existing fields behave under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSpec {
    label: String,
    values: Vec<String>,
    split_fields: Vec<String>,
    random_fields: Vec<String>,
}

impl DimensionSpec {
    /// Rejects empty or repeated values and any field claimed by two roles.
    pub fn new(
        label: impl Into<String>,
        values: Vec<String>,
        split_fields: Vec<String>,
        random_fields: Vec<String>,
    ) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(FixtureError::InvalidConfig("dimension label is empty".into()));
        }
        if values.is_empty() {
            return Err(FixtureError::InvalidConfig(
                "at least one dimension value is required".into(),
            ));
        }
        ensure_unique("dimension value", &values)?;
        ensure_unique("split field", &split_fields)?;
        ensure_unique("random field", &random_fields)?;

        if let Some(field) = split_fields.iter().find(|f| random_fields.contains(*f)) {
            return Err(FixtureError::InvalidConfig(format!(
                "field '{field}' is listed as both split and random"
            )));
        }
        if split_fields.contains(&label) || random_fields.contains(&label) {
            return Err(FixtureError::InvalidConfig(format!(
                "dimension label '{label}' cannot also be a split or random field"
            )));
        }

        Ok(Self {
            label,
            values,
            split_fields,
            random_fields,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn split_fields(&self) -> &[String] {
        &self.split_fields
    }

    pub fn random_fields(&self) -> &[String] {
        &self.random_fields
    }
}

fn ensure_unique(what: &str, items: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Err(FixtureError::InvalidConfig(format!("duplicate {what} '{item}'")));
        }
    }
    Ok(())
}

/// Produce one record per dimension value, in `spec.values()` order.
pub fn expand<R: Rng + ?Sized>(record: &Record, spec: &DimensionSpec, rng: &mut R) -> Result<Vec<Record>> {
    let mut splits: Vec<(&str, HashMap<String, String>)> = Vec::with_capacity(spec.split_fields.len());
    for field in &spec.split_fields {
        let total = read_integer(record, field)?;
        splits.push((field.as_str(), split_among(total, &spec.values, rng)?));
    }

    let randoms: Vec<(&str, HashMap<String, f64>)> = spec
        .random_fields
        .iter()
        .map(|field| (field.as_str(), randomize(&spec.values, rng)))
        .collect();

    if record.contains_key(&spec.label) {
        warn!("record already has '{}', overwriting it", spec.label);
    }

    let mut out = Vec::with_capacity(spec.values.len());
    for value in &spec.values {
        let mut row = record.clone();
        row.insert(spec.label.clone(), Value::String(value.clone()));
        for (field, parts) in &splits {
            row.insert(field.to_string(), Value::String(parts[value].clone()));
        }
        for (field, draws) in &randoms {
            row.insert(field.to_string(), Value::from(draws[value]));
        }
        out.push(row);
    }
    Ok(out)
}

// Accepts "40", " 40 ", "+40" and the bare JSON integer 40.
fn read_integer(record: &Record, field: &str) -> Result<i64> {
    let value = record
        .get(field)
        .ok_or_else(|| FixtureError::MalformedRecord(format!("missing split field '{field}'")))?;
    let parsed = match value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        FixtureError::MalformedRecord(format!(
            "split field '{field}' is not an integer (found {value})"
        ))
    })
}
