//! Data-driven slot lookup: task id -> (title, body template, urgency).

use crate::card::Urgency;
use crate::error::CatalogError;
use std::collections::HashMap;

/// Replaced with the dose label when rendering.
pub const DOSE_PLACEHOLDER: &str = "{dose}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDef {
    pub id: String,
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
    pub mention_all: bool,
    pub at: Option<String>,
}

impl SlotDef {
    pub fn needs_dose(&self) -> bool {
        self.body.contains(DOSE_PLACEHOLDER)
    }
}

/// A rendered reminder, ready for the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone)]
pub struct SlotCatalog {
    slots: Vec<SlotDef>,
    index: HashMap<String, usize>,
    mention_marker: String,
}

impl SlotCatalog {
    pub fn new(
        slots: Vec<SlotDef>,
        mention_marker: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(slots.len());
        for (i, s) in slots.iter().enumerate() {
            if s.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if index.insert(s.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(s.id.clone()));
            }
        }
        Ok(Self {
            slots,
            index,
            mention_marker: mention_marker.into(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&SlotDef> {
        self.index.get(id).map(|&i| &self.slots[i])
    }

    /// Ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotDef> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn render(&self, slot: &SlotDef, dose_label: Option<&str>) -> Message {
        let mut body = match dose_label {
            Some(label) => slot.body.replace(DOSE_PLACEHOLDER, label),
            None => slot.body.clone(),
        };
        if slot.mention_all && !self.mention_marker.is_empty() {
            body = format!("{} {}", self.mention_marker, body);
        }
        Message {
            title: slot.title.clone(),
            body,
            urgency: slot.urgency,
        }
    }
}
