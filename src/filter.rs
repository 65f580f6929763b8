//! Inclusive range filter on the district column of fixture rows.
//!
//! Bounds are compared as strings, so `"10"` sorts before `"9"`.

use serde_json::Value;

use crate::error::{FixtureError, Result};
use crate::jsonl::Record;

pub const DEFAULT_FIELD: &str = "district";

#[derive(Debug, Clone)]
pub struct DistrictRange {
    field: String,
    min: Option<String>,
    max: Option<String>,
}

impl DistrictRange {
    /// Fails when `min` sorts after `max`.
    pub fn new(field: impl Into<String>, min: Option<String>, max: Option<String>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (&min, &max) {
            if lo > hi {
                return Err(FixtureError::InvalidConfig(format!(
                    "district min {lo:?} sorts after max {hi:?}"
                )));
            }
        }
        Ok(Self {
            field: field.into(),
            min,
            max,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn keeps(&self, record: &Record) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(district) = record.get(&self.field).and_then(as_text) else {
            return false;
        };
        let above_min = self.min.as_deref().map_or(true, |min| district.as_str() >= min);
        let below_max = self.max.as_deref().map_or(true, |max| district.as_str() <= max);
        above_min && below_max
    }

    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        records.into_iter().filter(|r| self.keeps(r)).collect()
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(district: Value) -> Record {
        let mut r = Record::new();
        r.insert("district".into(), district);
        r
    }

    #[test]
    fn unbounded_keeps_everything() {
        let range = DistrictRange::new(DEFAULT_FIELD, None, None).unwrap();
        assert!(range.keeps(&Record::new()));
        assert!(range.keeps(&row(json!("anything"))));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DistrictRange::new(DEFAULT_FIELD, Some("3".into()), Some("5".into())).unwrap();
        assert!(range.keeps(&row(json!("3"))));
        assert!(range.keeps(&row(json!("5"))));
        assert!(!range.keeps(&row(json!("6"))));
        assert!(!range.keeps(&row(json!("2"))));
    }

    #[test]
    fn comparison_is_lexical() {
        let range = DistrictRange::new(DEFAULT_FIELD, Some("2".into()), Some("9".into())).unwrap();
        assert!(!range.keeps(&row(json!("10"))));
        assert!(range.keeps(&row(json!("25"))));
        // numbers are compared by their JSON text too
        assert!(!range.keeps(&row(json!(10))));
    }

    #[test]
    fn missing_district_is_dropped_when_bounded() {
        let range = DistrictRange::new(DEFAULT_FIELD, None, Some("9".into())).unwrap();
        assert!(!range.keeps(&Record::new()));
        assert!(!range.keeps(&row(Value::Null)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let range = DistrictRange::new(DEFAULT_FIELD, Some("9".into()), Some("10".into()));
        assert!(matches!(range, Err(FixtureError::InvalidConfig(_))));
        assert!(DistrictRange::new(DEFAULT_FIELD, Some("4".into()), Some("4".into())).is_ok());
    }

    #[test]
    fn apply_keeps_order() {
        let range = DistrictRange::new(DEFAULT_FIELD, Some("b".into()), None).unwrap();
        let kept = range.apply(vec![row(json!("c")), row(json!("a")), row(json!("b"))]);
        let names: Vec<&str> = kept.iter().map(|r| r["district"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }
}
