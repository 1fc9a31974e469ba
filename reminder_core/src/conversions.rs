//! `From` implementations bridging `reminder_config` types to `reminder_core` types.

use crate::card::{CardStyle, HeaderColor, Urgency};
use crate::catalog::{SlotCatalog, SlotDef};
use crate::dose::DoseLabels;
use crate::error::CatalogError;

// ── Card ─────────────────────────────────────────────────────────────────────

impl From<reminder_config::HeaderColor> for HeaderColor {
    fn from(c: reminder_config::HeaderColor) -> Self {
        use reminder_config::HeaderColor as C;
        match c {
            C::Blue => Self::Blue,
            C::Wathet => Self::Wathet,
            C::Turquoise => Self::Turquoise,
            C::Green => Self::Green,
            C::Yellow => Self::Yellow,
            C::Orange => Self::Orange,
            C::Red => Self::Red,
            C::Carmine => Self::Carmine,
            C::Violet => Self::Violet,
            C::Purple => Self::Purple,
            C::Indigo => Self::Indigo,
            C::Grey => Self::Grey,
        }
    }
}

impl From<reminder_config::Urgency> for Urgency {
    fn from(u: reminder_config::Urgency) -> Self {
        match u {
            reminder_config::Urgency::Ordinary => Self::Ordinary,
            reminder_config::Urgency::Escalated => Self::Escalated,
        }
    }
}

impl From<&reminder_config::CardCfg> for CardStyle {
    fn from(c: &reminder_config::CardCfg) -> Self {
        Self {
            title_prefix: c.title_prefix.clone(),
            closing_remark: c.closing_remark.clone(),
            wide_screen: c.wide_screen,
            ordinary_color: c.ordinary_color.into(),
            escalated_color: c.escalated_color.into(),
        }
    }
}

// ── Dose ─────────────────────────────────────────────────────────────────────

impl From<&reminder_config::DoseCfg> for DoseLabels {
    fn from(c: &reminder_config::DoseCfg) -> Self {
        Self {
            not_started: c.not_started.clone(),
            full: c.full.clone(),
            half: c.half.clone(),
        }
    }
}

// ── Slots ────────────────────────────────────────────────────────────────────

impl From<&reminder_config::Slot> for SlotDef {
    fn from(s: &reminder_config::Slot) -> Self {
        Self {
            id: s.id.clone(),
            title: s.title.clone(),
            body: s.body.clone(),
            urgency: s.urgency.into(),
            mention_all: s.mention_all,
            at: s.at.clone(),
        }
    }
}

impl TryFrom<&reminder_config::Config> for SlotCatalog {
    type Error = CatalogError;
    fn try_from(cfg: &reminder_config::Config) -> Result<Self, Self::Error> {
        SlotCatalog::new(
            cfg.slots.iter().map(SlotDef::from).collect(),
            cfg.card.mention_marker.clone(),
        )
    }
}
