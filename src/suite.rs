//! Suite configuration
//!
//! A suite configuration is a YAML mapping (`actor`, `modules`, `namespace`, ...).
//! Before an actor is generated the suite's own values are merged over the
//! framework defaults with [`merge_configs`].

use anyhow::Result;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::ScaffoldError;

pub type SuiteConfig = Mapping;

/// Step decorator that adds `can*`/`cant*` variants of assertions
pub const CONDITIONAL_ASSERTION: &str = "Codeception\\Step\\ConditionalAssertion";

const DEFAULT_SUITE_SETTINGS: &str = r#"
actor: ~
modules:
    enabled: []
    config: {}
    depends: []
step_decorators: Codeception\Step\ConditionalAssertion
path: ~
extends: ~
namespace: ~
groups: []
formats: []
shuffle: false
extensions:
    enabled: []
    config: {}
    commands: []
error_level: "E_ALL & ~E_STRICT & ~E_DEPRECATED"
"#;

/// Framework defaults every suite configuration is merged over
pub fn default_suite_settings() -> Value {
    serde_yaml::from_str(DEFAULT_SUITE_SETTINGS).unwrap_or(Value::Mapping(Mapping::new()))
}

/// Merge `overlay` over `base`
///
/// - mappings merge key by key, overlay keys first, then keys only in base
/// - two non-empty sequences are united, overlay items first, duplicates dropped
/// - a null overlay never replaces a base value
/// - a collection in base survives a scalar overlay
/// - anything else: the overlay wins
pub fn merge_configs(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            let mut merged = Mapping::new();
            for (key, value) in overlay {
                let value = match base.get(key) {
                    Some(base_value) => merge_configs(base_value, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            for (key, value) in base {
                if !merged.contains_key(key) {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Mapping(merged)
        }
        (Value::Sequence(base), Value::Sequence(overlay)) => {
            let mut merged: Vec<Value> = Vec::with_capacity(base.len() + overlay.len());
            for item in overlay.iter().chain(base.iter()) {
                if !merged.contains(item) {
                    merged.push(item.clone());
                }
            }
            Value::Sequence(merged)
        }
        (Value::Mapping(_) | Value::Sequence(_), Value::Mapping(_) | Value::Sequence(_)) => {
            if is_empty_collection(overlay) {
                base.clone()
            } else {
                overlay.clone()
            }
        }
        (_, Value::Null) | (Value::Mapping(_) | Value::Sequence(_), _) => base.clone(),
        _ => overlay.clone(),
    }
}

fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        _ => false,
    }
}

/// Parse a suite configuration from YAML text
pub fn parse_suite_config(yaml: &str) -> Result<SuiteConfig> {
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(ScaffoldError::InvalidSuiteConfig(format!(
            "expected a mapping, found {}",
            type_name(&other)
        ))
        .into()),
    }
}

/// Pull the mapping for `suites.<name>` out of a global configuration
pub fn suite_section(global: &str, name: &str) -> Result<SuiteConfig> {
    let config = parse_suite_config(global)?;
    match config.get("suites").and_then(|suites| suites.get(name)) {
        Some(Value::Mapping(section)) => Ok(section.clone()),
        _ => Err(ScaffoldError::InvalidSuiteConfig(format!("suite '{name}' is not defined")).into()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Typed view of a merged suite configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteSettings {
    #[serde(default)]
    pub actor: Option<String>,
    /// Older configurations name the actor `class_name`
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub modules: ModulesSection,
    #[serde(default)]
    pub step_decorators: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModulesSection {
    /// Module names, or single-key mappings of name to module config
    #[serde(default)]
    pub enabled: Vec<Value>,
}

impl SuiteSettings {
    pub fn from_config(config: &Value) -> Result<Self> {
        serde_yaml::from_value(config.clone())
            .map_err(|e| ScaffoldError::InvalidSuiteConfig(e.to_string()).into())
    }

    /// Actor class as configured: `actor`, then `class_name`
    pub fn actor_class(&self) -> Option<&str> {
        [self.actor.as_deref(), self.class_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("").trim_matches('\\')
    }

    /// Names of the enabled modules, in order
    pub fn enabled_modules(&self) -> Result<Vec<String>> {
        self.modules
            .enabled
            .iter()
            .map(|entry| match entry {
                Value::String(name) => Ok(name.clone()),
                Value::Mapping(m) if m.len() == 1 => match m.keys().next() {
                    Some(Value::String(name)) => Ok(name.clone()),
                    _ => Err(ScaffoldError::InvalidSuiteConfig(
                        "module name must be a string".to_string(),
                    )
                    .into()),
                },
                other => Err(ScaffoldError::InvalidSuiteConfig(format!(
                    "enabled module entry must be a name or a single-key mapping, found {}",
                    type_name(other)
                ))
                .into()),
            })
            .collect()
    }

    pub fn has_step_decorator(&self, decorator: &str) -> bool {
        match &self.step_decorators {
            Value::String(name) => name == decorator,
            Value::Sequence(names) => names.iter().any(|n| n.as_str() == Some(decorator)),
            _ => false,
        }
    }
}
