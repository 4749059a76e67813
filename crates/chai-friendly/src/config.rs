//! ESLint-style rule settings: a severity, optionally followed by the rule's options object.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Options of `no-unused-expressions`. Every switch defaults to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Options {
    /// Allow `a && b()` style short circuit evaluation in statement position.
    pub allow_short_circuit: bool,
    /// Allow `a ? b() : c()` style ternaries in statement position.
    pub allow_ternary: bool,
    /// Allow tagged template literals in statement position.
    pub allow_tagged_templates: bool,
    /// Report bare JSX elements and fragments.
    #[serde(rename = "enforceForJSX")]
    pub enforce_for_jsx: bool,
}

impl Options {
    /// Parses the options object of a rule setting.
    pub fn from_json(value: &Value) -> Result<Self> {
        serde_path_to_error::deserialize(value)
            .map_err(|err| anyhow!("invalid options at `{}`: {}", err.path(), err.inner()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "Value")]
pub enum Severity {
    Off,
    Warn,
    #[default]
    Error,
}

impl Severity {
    /// Accepts `"off" | "warn" | "error"` and `0 | 1 | 2`.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => match name.as_str() {
                "off" => Ok(Severity::Off),
                "warn" => Ok(Severity::Warn),
                "error" => Ok(Severity::Error),
                _ => bail!("unknown severity \"{name}\", expected \"off\", \"warn\" or \"error\""),
            },
            Value::Number(level) => match level.as_u64() {
                Some(0) => Ok(Severity::Off),
                Some(1) => Ok(Severity::Warn),
                Some(2) => Ok(Severity::Error),
                _ => bail!("unknown severity {level}, expected 0, 1 or 2"),
            },
            _ => bail!("expected a severity, got {value}"),
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Severity::Off
    }
}

impl TryFrom<Value> for Severity {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        Severity::from_json(&value)
    }
}

/// How a single rule is configured, e.g. `["error", { "allowTernary": true }]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub options: Options,
}

impl RuleSetting {
    pub fn off() -> Self {
        RuleSetting {
            severity: Severity::Off,
            options: Options::default(),
        }
    }

    pub fn warn(options: Options) -> Self {
        RuleSetting {
            severity: Severity::Warn,
            options,
        }
    }

    pub fn error(options: Options) -> Self {
        RuleSetting {
            severity: Severity::Error,
            options,
        }
    }

    /// Parses any of the shapes ESLint accepts for a rule entry: `"error"`, `2`,
    /// `["warn"]` or `["error", { ... }]`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Ok(RuleSetting {
                severity: Severity::from_json(value)?,
                options: Options::default(),
            });
        };

        let (severity, rest) = items
            .split_first()
            .context("rule setting arrays must start with a severity")?;
        let severity = Severity::from_json(severity)?;
        let options = match rest {
            [] => Options::default(),
            [options] => Options::from_json(options)?,
            _ => bail!(
                "expected at most one options object after the severity, got {}",
                rest.len()
            ),
        };

        Ok(RuleSetting { severity, options })
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options == Options::default() {
            self.severity.serialize(serializer)
        } else {
            (self.severity, self.options).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleSetting::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn options_default_to_off() {
        let options = Options::from_json(&json!({})).unwrap();
        assert_eq!(options, Options::default());
        assert!(!options.allow_short_circuit);
        assert!(!options.allow_ternary);
        assert!(!options.allow_tagged_templates);
        assert!(!options.enforce_for_jsx);
    }

    #[test]
    fn options_use_camel_case_keys() {
        let options = Options::from_json(&json!({
            "allowShortCircuit": true,
            "allowTernary": true,
            "allowTaggedTemplates": true,
            "enforceForJSX": true,
        }))
        .unwrap();
        assert_eq!(
            options,
            Options {
                allow_short_circuit: true,
                allow_ternary: true,
                allow_tagged_templates: true,
                enforce_for_jsx: true,
            }
        );
    }

    #[test]
    fn options_reject_unknown_keys() {
        let err = Options::from_json(&json!({ "allowTernery": true })).unwrap_err();
        assert!(err.to_string().contains("allowTernery"), "{err}");
    }

    #[test]
    fn options_reject_wrong_types() {
        let err = Options::from_json(&json!({ "allowTernary": "yes" })).unwrap_err();
        assert!(err.to_string().contains("allowTernary"), "{err}");
    }

    #[test]
    fn severity_names_and_levels() {
        assert_eq!(Severity::from_json(&json!("off")).unwrap(), Severity::Off);
        assert_eq!(Severity::from_json(&json!("warn")).unwrap(), Severity::Warn);
        assert_eq!(Severity::from_json(&json!("error")).unwrap(), Severity::Error);
        assert_eq!(Severity::from_json(&json!(0)).unwrap(), Severity::Off);
        assert_eq!(Severity::from_json(&json!(1)).unwrap(), Severity::Warn);
        assert_eq!(Severity::from_json(&json!(2)).unwrap(), Severity::Error);
        assert!(Severity::from_json(&json!("fatal")).is_err());
        assert!(Severity::from_json(&json!(3)).is_err());
        assert!(Severity::from_json(&json!(true)).is_err());
    }

    #[test]
    fn rule_setting_shapes() {
        assert_eq!(
            RuleSetting::from_json(&json!("warn")).unwrap(),
            RuleSetting::warn(Options::default())
        );
        assert_eq!(
            RuleSetting::from_json(&json!([2])).unwrap(),
            RuleSetting::error(Options::default())
        );
        assert_eq!(
            RuleSetting::from_json(&json!(["error", { "allowTernary": true }])).unwrap(),
            RuleSetting::error(Options {
                allow_ternary: true,
                ..Default::default()
            })
        );
        assert_eq!(RuleSetting::from_json(&json!("off")).unwrap(), RuleSetting::off());
    }

    #[test]
    fn rule_setting_rejects_malformed_arrays() {
        assert!(RuleSetting::from_json(&json!([])).is_err());
        assert!(RuleSetting::from_json(&json!(["error", {}, {}])).is_err());
        assert!(RuleSetting::from_json(&json!(["error", { "allowAll": true }])).is_err());
    }

    #[test]
    fn rule_setting_serializes_like_eslint() {
        assert_eq!(
            serde_json::to_value(RuleSetting::error(Options::default())).unwrap(),
            json!("error")
        );
        assert_eq!(
            serde_json::to_value(RuleSetting::warn(Options {
                allow_short_circuit: true,
                ..Default::default()
            }))
            .unwrap(),
            json!([
                "warn",
                {
                    "allowShortCircuit": true,
                    "allowTernary": false,
                    "allowTaggedTemplates": false,
                    "enforceForJSX": false,
                }
            ])
        );
    }

    #[test]
    fn rule_setting_deserializes_from_config_maps() {
        let rules: indexmap::IndexMap<String, RuleSetting> = serde_json::from_value(json!({
            "no-unused-expressions": "off",
            "chai-friendly/no-unused-expressions": ["error", { "enforceForJSX": true }],
        }))
        .unwrap();
        assert_eq!(rules["no-unused-expressions"], RuleSetting::off());
        assert!(rules["chai-friendly/no-unused-expressions"].options.enforce_for_jsx);
    }
}
