//! Dashboard sanitizing policy
//!
//! Resets the import inputs, drops the version and clears datasource bindings
//! whose `type` is one of the configured cleared types.

use crate::error::{Result, SanitizeError};
use crate::rewrite::Rewriter;
use crate::types::{SanitizeConfig, SanitizeStats};
use log::debug;
use serde_json::Value;

/// Applies the sanitizing policy to dashboard documents
pub struct Sanitizer {
    config: SanitizeConfig,
}

impl Sanitizer {
    pub fn new(config: SanitizeConfig) -> Self {
        Sanitizer { config }
    }

    /// Sanitize `doc` in place and return the datasource counters
    pub fn sanitize(&self, doc: &mut Value) -> Result<SanitizeStats> {
        let root = doc.as_object_mut().ok_or(SanitizeError::NotAnObject)?;

        root.insert(self.config.inputs_field.clone(), Value::Array(Vec::new()));
        // shift_remove keeps the remaining keys in document order
        root.shift_remove(&self.config.version_field);

        let mut stats = SanitizeStats::default();
        Rewriter::new(&self.config.datasource_key, |_, value| {
            stats.visited += 1;
            if self.should_clear(&value) {
                stats.cleared += 1;
                None
            } else {
                Some(value)
            }
        })
        .rewrite(doc);

        Ok(stats)
    }

    fn should_clear(&self, value: &Value) -> bool {
        match value {
            Value::Object(obj) => match obj.get("type") {
                Some(Value::String(ty)) => self.config.is_cleared_type(ty),
                _ => false,
            },
            other => {
                debug!("datasource is not an object: {}", other);
                false
            }
        }
    }
}

/// The dashboard's title, if it has a string one
pub fn dashboard_title(doc: &Value) -> Option<&str> {
    doc.get("title").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sanitize(mut doc: Value) -> (Value, SanitizeStats) {
        let stats = Sanitizer::new(SanitizeConfig::default())
            .sanitize(&mut doc)
            .unwrap();
        (doc, stats)
    }

    #[test]
    fn test_reference_dashboard() {
        let input = json!({
            "title": "T",
            "panels": [
                {"datasource": {"type": "prometheus", "uid": "x"}},
                {"datasource": {"type": "influxdb"}}
            ]
        });

        let (doc, stats) = sanitize(input);

        assert_eq!(doc["panels"][0]["datasource"], Value::Null);
        assert_eq!(doc["panels"][1]["datasource"], json!({"type": "influxdb"}));
        assert_eq!(doc["__inputs"], json!([]));
        assert!(doc.get("version").is_none());
        assert_eq!(stats.to_string(), "Found 2 datasources, changed 1");
    }

    #[test]
    fn test_counts_five_with_three_cleared() {
        let input = json!({
            "title": "Counts",
            "panels": [
                {"datasource": {"type": "prometheus"}},
                {"datasource": {"type": "prometheus", "uid": "p2"}},
                {"datasource": {"type": "loki"}},
                {"targets": [{"datasource": {"type": "prometheus"}}]},
                {"datasource": "-- Grafana --"}
            ]
        });

        let (_, stats) = sanitize(input);

        assert_eq!(stats, SanitizeStats { visited: 5, cleared: 3 });
    }

    #[test]
    fn test_structural_fields_with_and_without_existing() {
        for input in [
            json!({"title": "a"}),
            json!({"title": "b", "version": 7}),
            json!({"title": "c", "__inputs": [{"name": "DS_PROMETHEUS"}]}),
            json!({"title": "d", "__inputs": [], "version": 2}),
        ] {
            let (doc, _) = sanitize(input);
            assert_eq!(doc["__inputs"], json!([]));
            assert!(doc.get("version").is_none());
        }
    }

    #[test]
    fn test_tolerates_odd_datasource_shapes() {
        let input = json!({
            "title": "odd",
            "panels": [
                {"datasource": "${DS_PROMETHEUS}"},
                {"datasource": {"uid": "no-type"}},
                {"datasource": {"type": 42}},
                {"datasource": null},
                {"datasource": ["prometheus"]}
            ]
        });
        let expected_panels = input["panels"].clone();

        let (doc, stats) = sanitize(input);

        assert_eq!(doc["panels"], expected_panels);
        assert_eq!(stats, SanitizeStats { visited: 5, cleared: 0 });
    }

    #[test]
    fn test_key_order_preserved() {
        let input = json!({
            "version": 3,
            "title": "order",
            "__inputs": [{"x": 1}],
            "panels": [],
            "uid": "abc"
        });

        let (doc, _) = sanitize(input);

        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["title", "__inputs", "panels", "uid"]);
    }

    #[test]
    fn test_appends_inputs_when_absent() {
        let (doc, _) = sanitize(json!({"title": "t", "panels": []}));

        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["title", "panels", "__inputs"]);
    }

    #[test]
    fn test_configured_cleared_types() {
        let config = SanitizeConfig {
            cleared_types: vec!["loki".to_string(), "prometheus".to_string()],
            ..SanitizeConfig::default()
        };
        let mut doc = json!({"a": {"datasource": {"type": "loki"}}, "b": {"datasource": {"type": "tempo"}}});

        let stats = Sanitizer::new(config).sanitize(&mut doc).unwrap();

        assert_eq!(stats, SanitizeStats { visited: 2, cleared: 1 });
        assert_eq!(doc["a"]["datasource"], Value::Null);
    }

    #[test]
    fn test_rejects_non_object_root() {
        let mut doc = json!([{"datasource": {"type": "prometheus"}}]);
        let err = Sanitizer::new(SanitizeConfig::default())
            .sanitize(&mut doc)
            .unwrap_err();
        assert!(matches!(err, SanitizeError::NotAnObject));
    }

    #[test]
    fn test_dashboard_title() {
        assert_eq!(dashboard_title(&json!({"title": "Node"})), Some("Node"));
        assert_eq!(dashboard_title(&json!({"title": 5})), None);
        assert_eq!(dashboard_title(&json!({})), None);
    }
}
