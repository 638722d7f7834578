//! The convention card.
//!
//! A data-driven tree of categories, each holding named conventions
//! with an enabled flag and free-form parameters. Lookups are total:
//! an absent convention is disabled, an absent parameter yields the
//! caller's default. Cards load from YAML; `Default` is a standard
//! SAYC yellow card.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConventionEntry {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

fn default_enabled() -> bool {
    true
}

impl ConventionEntry {
    pub fn on() -> Self {
        Self {
            enabled: true,
            params: BTreeMap::new(),
        }
    }

    pub fn off() -> Self {
        Self {
            enabled: false,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: ParamValue) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConventionCatalog {
    categories: BTreeMap<String, BTreeMap<String, ConventionEntry>>,
}

impl ConventionCatalog {
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn insert(&mut self, category: &str, name: &str, entry: ConventionEntry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), entry);
    }

    fn entry(&self, name: &str) -> Option<&ConventionEntry> {
        self.categories.values().find_map(|c| c.get(name))
    }

    /// Whether a convention is enabled, searching every category.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entry(name).map_or(false, |e| e.enabled)
    }

    pub fn is_enabled_in(&self, category: &str, name: &str) -> bool {
        self.categories
            .get(category)
            .and_then(|c| c.get(name))
            .map_or(false, |e| e.enabled)
    }

    /// An integer parameter, clamped to u8 range. Missing or mistyped
    /// values yield the default.
    pub fn level_param(&self, name: &str, key: &str, default: u8) -> u8 {
        match self.entry(name).and_then(|e| e.params.get(key)) {
            Some(ParamValue::Int(v)) if (0..=255).contains(v) => *v as u8,
            _ => default,
        }
    }

    pub fn bool_param(&self, name: &str, key: &str, default: bool) -> bool {
        match self.entry(name).and_then(|e| e.params.get(key)) {
            Some(ParamValue::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn str_param(&self, name: &str, key: &str, default: &str) -> String {
        match self.entry(name).and_then(|e| e.params.get(key)) {
            Some(ParamValue::Text(v)) => v.clone(),
            _ => default.to_string(),
        }
    }
}

impl Default for ConventionCatalog {
    /// A standard SAYC card.
    fn default() -> Self {
        let mut catalog = Self::empty();

        catalog.insert("responses", "stayman", ConventionEntry::on());
        catalog.insert("responses", "jacoby_transfers", ConventionEntry::on());
        catalog.insert("responses", "texas_transfers", ConventionEntry::on());
        catalog.insert("responses", "minor_transfer", ConventionEntry::off());
        catalog.insert("responses", "jacoby_2nt", ConventionEntry::on());
        catalog.insert("responses", "splinters", ConventionEntry::on());
        catalog.insert("responses", "bergen", ConventionEntry::off());
        catalog.insert("responses", "drury", ConventionEntry::on());
        catalog.insert("responses", "lebensohl", ConventionEntry::on());

        catalog.insert(
            "asking",
            "blackwood",
            ConventionEntry::on().with_param("variant", ParamValue::Text("classic".into())),
        );
        catalog.insert("asking", "gerber", ConventionEntry::on());

        catalog.insert(
            "two_suited",
            "michaels",
            ConventionEntry::on().with_param("style", ParamValue::Text("wide".into())),
        );
        catalog.insert(
            "two_suited",
            "unusual_nt",
            ConventionEntry::on()
                .with_param("direct_only", ParamValue::Bool(true))
                .with_param("over_minors", ParamValue::Bool(false)),
        );

        catalog.insert(
            "doubles",
            "negative",
            ConventionEntry::on().with_param("thru", ParamValue::Int(2)),
        );
        catalog.insert(
            "doubles",
            "support",
            ConventionEntry::on().with_param("thru", ParamValue::Int(2)),
        );
        catalog.insert(
            "doubles",
            "responsive",
            ConventionEntry::on().with_param("thru", ParamValue::Int(3)),
        );
        catalog.insert("doubles", "reopening", ConventionEntry::on());
        catalog.insert(
            "doubles",
            "takeout",
            ConventionEntry::on().with_param("relaxed", ParamValue::Bool(false)),
        );

        catalog.insert("nt_defense", "dont", ConventionEntry::on());
        catalog.insert("nt_defense", "meckwell", ConventionEntry::off());

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card() {
        let catalog = ConventionCatalog::default();
        assert!(catalog.is_enabled("stayman"));
        assert!(catalog.is_enabled("michaels"));
        assert!(catalog.is_enabled_in("nt_defense", "dont"));
        assert!(!catalog.is_enabled("bergen"));
        assert!(!catalog.is_enabled("meckwell"));
        assert!(!catalog.is_enabled("no_such_convention"));
    }

    #[test]
    fn test_typed_params_with_defaults() {
        let catalog = ConventionCatalog::default();
        assert_eq!(catalog.level_param("negative", "thru", 9), 2);
        assert_eq!(catalog.level_param("negative", "missing", 9), 9);
        assert_eq!(catalog.str_param("blackwood", "variant", "classic"), "classic");
        assert!(catalog.bool_param("unusual_nt", "direct_only", false));
        assert!(!catalog.bool_param("unusual_nt", "over_minors", false));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
asking:
  blackwood:
    enabled: true
    params:
      variant: rkcb1430
  gerber:
    enabled: false
doubles:
  negative:
    params:
      thru: 3
"#;
        let catalog = ConventionCatalog::from_yaml(yaml).unwrap();
        assert!(catalog.is_enabled("blackwood"));
        assert_eq!(catalog.str_param("blackwood", "variant", "classic"), "rkcb1430");
        assert!(!catalog.is_enabled("gerber"));
        // `enabled` defaults to true when omitted.
        assert!(catalog.is_enabled("negative"));
        assert_eq!(catalog.level_param("negative", "thru", 2), 3);
    }

    #[test]
    fn test_mistyped_param_yields_default() {
        let mut catalog = ConventionCatalog::empty();
        catalog.insert(
            "doubles",
            "negative",
            ConventionEntry::on().with_param("thru", ParamValue::Text("two".into())),
        );
        assert_eq!(catalog.level_param("negative", "thru", 2), 2);
    }
}
