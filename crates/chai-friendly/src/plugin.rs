//! The rule set as a plugin: rule metadata plus shareable presets.
//!
//! Both presets turn the generic `no-unused-expressions` off, otherwise every chai
//! assertion would still be reported once by the built-in rule.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    config::{Options, RuleSetting},
    rules::{NAMESPACE, no_unused_expressions},
};

/// Name of the host's own rule that this plugin replaces.
pub const BUILTIN_RULE: &str = "no-unused-expressions";

#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
}

/// How a preset refers to the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetStyle {
    /// eslintrc: `"plugins": ["chai-friendly"]`.
    Legacy,
    /// Flat config: `"plugins": { "chai-friendly": <plugin> }`.
    Flat,
}

#[derive(Debug, Clone)]
pub struct Preset {
    pub style: PresetStyle,
    pub rules: IndexMap<String, RuleSetting>,
}

impl Preset {
    fn recommended(style: PresetStyle) -> Self {
        let rules = [
            (BUILTIN_RULE.to_string(), RuleSetting::off()),
            (
                no_unused_expressions::RULE_ID.to_string(),
                RuleSetting::error(Options::default()),
            ),
        ]
        .into_iter()
        .collect();
        Preset { style, rules }
    }

    /// The setting this preset applies to `rule_id`, if any.
    pub fn rule(&self, rule_id: &str) -> Option<&RuleSetting> {
        self.rules.get(rule_id)
    }

    /// Renders the preset as an ESLint config object.
    pub fn to_json(&self, meta: &PluginMeta) -> Value {
        let plugins = match self.style {
            PresetStyle::Legacy => json!([NAMESPACE]),
            PresetStyle::Flat => json!({ NAMESPACE: { "meta": meta } }),
        };
        json!({
            "plugins": plugins,
            "rules": self.rules,
        })
    }
}

/// Everything the host needs to register this crate's rules. Built once, read only after.
#[derive(Debug, Clone)]
pub struct Plugin {
    pub meta: PluginMeta,
    pub rules: IndexMap<&'static str, no_unused_expressions::RuleMeta>,
    pub configs: IndexMap<&'static str, Preset>,
}

impl Plugin {
    pub fn new() -> Self {
        Plugin {
            meta: PluginMeta {
                name: NAMESPACE,
                version: env!("CARGO_PKG_VERSION"),
            },
            rules: [(no_unused_expressions::RULE_NAME, no_unused_expressions::meta())]
                .into_iter()
                .collect(),
            configs: [
                ("recommended", Preset::recommended(PresetStyle::Legacy)),
                ("recommended-flat", Preset::recommended(PresetStyle::Flat)),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Looks up a preset by name, e.g. `recommended`.
    pub fn config(&self, name: &str) -> Option<&Preset> {
        self.configs.get(name)
    }

    /// Renders the whole plugin (`meta`, `rules` and `configs`) as JSON.
    pub fn to_json(&self) -> Value {
        let configs: IndexMap<_, _> = self
            .configs
            .iter()
            .map(|(name, preset)| (*name, preset.to_json(&self.meta)))
            .collect();
        json!({
            "meta": self.meta,
            "rules": self.rules,
            "configs": configs,
        })
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Plugin::new()
    }
}
