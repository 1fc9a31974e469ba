#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas for the reminder notifier.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section has defaults; the slot catalog ships as `defaults/reminder.toml`
//!   and is compiled in, so a bare `reminder <task>` works without any file.
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Built-in catalog, used when no `--config` is given.
pub const BUILTIN_TOML: &str = include_str!("../defaults/reminder.toml");

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Day 0 of the two-day cycle, "YYYY-MM-DD".
    pub anchor_date: NaiveDate,
    /// IANA timezone name used to decide what "today" is.
    pub timezone: Tz,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            anchor_date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap_or_default(),
            timezone: chrono_tz::Asia::Shanghai,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// Name of the environment variable holding the endpoint URL.
    pub url_env: String,
    /// Optional client timeout; library default when absent.
    pub timeout_ms: Option<u64>,
}

impl Default for Webhook {
    fn default() -> Self {
        Self {
            url_env: "FEISHU_WEBHOOK".to_string(),
            timeout_ms: None,
        }
    }
}

/// Header template colors accepted by the card renderer.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeaderColor {
    Blue,
    Wathet,
    Turquoise,
    Green,
    Yellow,
    Orange,
    Red,
    Carmine,
    Violet,
    Purple,
    Indigo,
    Grey,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardCfg {
    pub title_prefix: String,
    /// Plain-text note rendered under the separator.
    pub closing_remark: String,
    pub wide_screen: bool,
    pub ordinary_color: HeaderColor,
    pub escalated_color: HeaderColor,
    /// Markup prepended to bodies of slots with `mention_all = true`.
    pub mention_marker: String,
}

impl Default for CardCfg {
    fn default() -> Self {
        Self {
            title_prefix: "🚨 ".to_string(),
            closing_remark: "彪哥语录：做人要诚实，身体是自己的！".to_string(),
            wide_screen: true,
            ordinary_color: HeaderColor::Red,
            escalated_color: HeaderColor::Orange,
            mention_marker: "<at id='all'></at>".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DoseCfg {
    pub not_started: String,
    pub full: String,
    pub half: String,
}

impl Default for DoseCfg {
    fn default() -> Self {
        Self {
            not_started: "⏳ 尚未开始".to_string(),
            full: "💊 1 片 (整片)".to_string(),
            half: "🔪 0.5 片 (半片)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Ordinary,
    Escalated,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct Slot {
    pub id: String,
    pub title: String,
    /// lark_md body; `{dose}` is replaced with the current dose label.
    pub body: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default = "default_true")]
    pub mention_all: bool,
    /// Informational "HH:MM" the external scheduler fires this slot at.
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub schedule: Schedule,
    pub webhook: Webhook,
    pub card: CardCfg,
    pub dose: DoseCfg,
    pub logging: Logging,
    pub slots: Vec<Slot>,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a config file.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))?;
    cfg.validate()
        .map_err(|e| eyre::eyre!("invalid configuration in {:?}: {}", path, e))?;
    Ok(cfg)
}

impl Config {
    /// The compiled-in catalog.
    pub fn builtin() -> eyre::Result<Self> {
        let cfg = load_toml(BUILTIN_TOML)
            .map_err(|e| eyre::eyre!("parse built-in config: {}", e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> eyre::Result<()> {
        // Webhook
        if self.webhook.url_env.trim().is_empty() {
            eyre::bail!("webhook.url_env must not be empty");
        }
        if self.webhook.timeout_ms == Some(0) {
            eyre::bail!("webhook.timeout_ms must be >= 1");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly, got {rot:?}");
        }

        // Slots
        if self.slots.is_empty() {
            eyre::bail!("at least one [[slots]] entry is required");
        }
        let mut seen = HashSet::new();
        for (idx, slot) in self.slots.iter().enumerate() {
            if slot.id.is_empty() {
                eyre::bail!("slots[{idx}].id must not be empty");
            }
            if slot.id.chars().any(char::is_whitespace) {
                eyre::bail!("slots[{idx}].id {:?} must not contain whitespace", slot.id);
            }
            if !seen.insert(slot.id.as_str()) {
                eyre::bail!("duplicate slot id {:?}", slot.id);
            }
            if slot.title.trim().is_empty() {
                eyre::bail!("slot {:?}: title must not be empty", slot.id);
            }
            if slot.body.trim().is_empty() {
                eyre::bail!("slot {:?}: body must not be empty", slot.id);
            }
            if let Some(at) = slot.at.as_deref()
                && NaiveTime::parse_from_str(at, "%H:%M").is_err()
            {
                eyre::bail!("slot {:?}: at must be HH:MM, got {at:?}", slot.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let cfg = Config::builtin().expect("builtin config");
        assert_eq!(cfg.slots.len(), 8);
        assert_eq!(cfg.schedule.timezone, chrono_tz::Asia::Shanghai);
        assert_eq!(
            cfg.schedule.anchor_date,
            NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
        );
        assert_eq!(cfg.webhook.url_env, "FEISHU_WEBHOOK");
    }

    #[test]
    fn check_slots_are_escalated_in_builtin() {
        let cfg = Config::builtin().unwrap();
        for s in &cfg.slots {
            let expect = if s.id.ends_with("_check") {
                Urgency::Escalated
            } else {
                Urgency::Ordinary
            };
            assert_eq!(s.urgency, expect, "slot {}", s.id);
        }
    }

    #[test]
    fn only_first_slot_uses_dose_placeholder() {
        let cfg = Config::builtin().unwrap();
        let with_dose: Vec<_> = cfg
            .slots
            .iter()
            .filter(|s| s.body.contains("{dose}"))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(with_dose, vec!["morning_8"]);
    }
}
