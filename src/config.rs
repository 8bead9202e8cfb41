//! Bundle configuration.
//!
//! Every knob has a stock default that reproduces the T-Bank copywriting
//! guide build: six sections, the keyword table routing exported pages into
//! them, and the fixed document texts. A user `config.toml` passed with
//! `--config` is merged on top of the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - stock defaults shown by `guide-bundle gen-config`
//!
//! assets_dir_name = "t-bank-copywriting-assets"
//!
//! sections = ["Общие принципы", "Как мы пишем"]
//!
//! [[rules]]
//! keyword = "Полезно"
//! section = "Общие принципы"
//! order = 1
//!
//! [document]
//! lang = "ru"
//! title = "Редполитика интерфейсов — Т-Банк"
//! heading = "Редполитика интерфейсов"
//! subtitle = "Т-Банк — Руководство по написанию текстов в интерфейсах"
//! source_url = "https://design.tbank.ru/docs/Редполитика%20интерфейсов/"
//! source_label = "design.tbank.ru"
//! copyright_holder = "Т-Банк"
//! ```
//!
//! ## Partial Configuration
//!
//! Tables are merged key by key, arrays are replaced wholesale. Overriding
//! `rules` therefore replaces the whole keyword table, which keeps its
//! declared order meaningful. Unknown keys are rejected to catch typos early.

use crate::classify::{ClassificationTable, Placement};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full bundle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Name of the flat asset directory, as referenced from the output HTML.
    pub assets_dir_name: String,
    /// Section display order. Sections absent here are never rendered.
    pub sections: Vec<String>,
    /// Keyword table, matched in declared order against source filenames.
    pub rules: Vec<RuleConfig>,
    /// Fixed texts of the document shell.
    pub document: DocumentConfig,
}

/// One row of the keyword table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub keyword: String,
    pub section: String,
    pub order: u32,
}

/// Static texts rendered into the document head, header and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    pub lang: String,
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub source_url: String,
    pub source_label: String,
    pub copyright_holder: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            lang: "ru".to_string(),
            title: "Редполитика интерфейсов — Т-Банк".to_string(),
            heading: "Редполитика интерфейсов".to_string(),
            subtitle: "Т-Банк — Руководство по написанию текстов в интерфейсах".to_string(),
            source_url: "https://design.tbank.ru/docs/Редполитика%20интерфейсов/".to_string(),
            source_label: "design.tbank.ru".to_string(),
            copyright_holder: "Т-Банк".to_string(),
        }
    }
}

const STOCK_SECTIONS: &[&str] = &[
    "Общие принципы",
    "Как мы пишем",
    "Тон и правила общения",
    "Типографика",
    "Элементы интерфейса",
    "Ошибки",
];

const STOCK_RULES: &[(&str, &str, u32)] = &[
    ("Полезно", "Общие принципы", 1),
    ("Понятно", "Общие принципы", 2),
    ("Просто", "Общие принципы", 3),
    ("Вступление", "Как мы пишем", 1),
    ("Консистентно", "Как мы пишем", 2),
    ("Без повторов", "Как мы пишем", 3),
    ("Без многозначности", "Как мы пишем", 4),
    ("В активном залоге", "Как мы пишем", 5),
    ("Без модальных глаголов", "Как мы пишем", 6),
    ("Без отглагольных", "Как мы пишем", 7),
    ("Пишем точное время", "Как мы пишем", 8),
    ("На равных", "Тон и правила общения", 1),
    ("Нейтрально", "Тон и правила общения", 2),
    ("Точки", "Типографика", 1),
    ("Тире", "Типографика", 2),
    ("Неразрывные", "Типографика", 3),
    ("Даты", "Типографика", 4),
    ("Валюты", "Типографика", 5),
    ("Числа", "Типографика", 6),
    ("Слова", "Типографика", 7),
    ("Остальные знаки", "Типографика", 8),
    ("Заголовки", "Элементы интерфейса", 1),
    ("Кнопки", "Элементы интерфейса", 2),
    ("Лейблы", "Элементы интерфейса", 3),
    ("Списки", "Элементы интерфейса", 4),
    ("Алерты", "Элементы интерфейса", 5),
    ("Тултипы", "Элементы интерфейса", 6),
    ("Тогглы", "Элементы интерфейса", 7),
    ("Лигалы", "Элементы интерфейса", 8),
    ("Экран ввода", "Элементы интерфейса", 9),
    ("Ошибки", "Ошибки", 1),
];

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            assets_dir_name: "t-bank-copywriting-assets".to_string(),
            sections: STOCK_SECTIONS.iter().map(|s| s.to_string()).collect(),
            rules: STOCK_RULES
                .iter()
                .map(|&(keyword, section, order)| RuleConfig {
                    keyword: keyword.to_string(),
                    section: section.to_string(),
                    order,
                })
                .collect(),
            document: DocumentConfig::default(),
        }
    }
}

impl BundleConfig {
    /// Validate cross-references between the section list and the keyword table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::Validation("sections must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "section '{section}' is listed twice"
                )));
            }
        }
        for rule in &self.rules {
            if rule.keyword.is_empty() {
                return Err(ConfigError::Validation(
                    "rules.keyword must not be empty".into(),
                ));
            }
            if !seen.contains(rule.section.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "rule '{}' targets unknown section '{}'",
                    rule.keyword, rule.section
                )));
            }
        }
        if self.assets_dir_name.is_empty() || self.assets_dir_name.contains(['/', '\\', '"']) {
            return Err(ConfigError::Validation(
                "assets_dir_name must be a plain directory name".into(),
            ));
        }
        Ok(())
    }

    /// Build the immutable keyword table, preserving declared order.
    pub fn classification_table(&self) -> ClassificationTable {
        ClassificationTable::new(self.rules.iter().map(|r| {
            (
                r.keyword.as_str(),
                Placement {
                    section: r.section.clone(),
                    order: r.order,
                },
            )
        }))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BundleConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<BundleConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BundleConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the bundle config.
///
/// `None` yields the validated stock defaults; a path must point at an
/// existing TOML file.
pub fn load_config(path: Option<&Path>) -> Result<BundleConfig, ConfigError> {
    let overlay = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}

/// Render the stock configuration as a commented TOML document.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(&BundleConfig::default())?;
    Ok(format!(
        "# guide-bundle configuration\n\
         # ==========================\n\
         # All settings are optional; values below are the defaults.\n\
         # Tables merge key by key, arrays (sections, rules) replace the defaults.\n\
         # Rules are matched in the order listed: the first keyword contained in\n\
         # a page's filename decides its section and position.\n\n{body}"
    ))
}
