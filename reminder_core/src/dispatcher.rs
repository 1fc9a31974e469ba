//! Task id -> rendered reminder -> notifier.

use crate::card::WebhookMessage;
use crate::catalog::{Message, SlotCatalog};
use crate::dose::{DoseLabels, DoseSchedule};
use crate::error::{CatalogError, NotifyError};
use crate::notifier::{Delivery, Notifier};
use chrono::NaiveDate;
use reminder_traits::Transport;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No task id was supplied.
    NoTask,
    /// The id matched no slot; nothing was sent.
    UnknownTask(String),
    Sent { slot: String, delivery: Delivery },
    Failed { slot: String, error: NotifyError },
}

impl DispatchOutcome {
    pub fn slot(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Sent { slot, .. } | DispatchOutcome::Failed { slot, .. } => {
                Some(slot.as_str())
            }
            _ => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent { .. })
    }
}

pub struct Dispatcher<T> {
    catalog: SlotCatalog,
    schedule: DoseSchedule,
    labels: DoseLabels,
    notifier: Notifier<T>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(
        catalog: SlotCatalog,
        schedule: DoseSchedule,
        labels: DoseLabels,
        notifier: Notifier<T>,
    ) -> Self {
        Self {
            catalog,
            schedule,
            labels,
            notifier,
        }
    }

    /// Wire a dispatcher from typed config; `endpoint` is the resolved webhook URL.
    pub fn from_config(
        cfg: &reminder_config::Config,
        endpoint: Option<String>,
        transport: T,
    ) -> Result<Self, CatalogError> {
        let catalog = SlotCatalog::try_from(cfg)?;
        Ok(Self::new(
            catalog,
            DoseSchedule::new(cfg.schedule.anchor_date),
            (&cfg.dose).into(),
            Notifier::new(endpoint, transport, (&cfg.card).into()),
        ))
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn schedule(&self) -> &DoseSchedule {
        &self.schedule
    }

    /// Render the reminder for `task` as of `today`, without sending.
    pub fn message_for(&self, task: &str, today: NaiveDate) -> Option<Message> {
        let slot = self.catalog.get(task)?;
        let label = slot
            .needs_dose()
            .then(|| self.labels.label(self.schedule.dose_on(today)));
        Some(self.catalog.render(slot, label))
    }

    pub fn preview(&self, task: &str, today: NaiveDate) -> Option<WebhookMessage> {
        self.message_for(task, today)
            .map(|m| self.notifier.preview(&m.title, &m.body, m.urgency))
    }

    pub fn dispatch(&self, task: Option<&str>, today: NaiveDate) -> DispatchOutcome {
        let Some(task) = task else {
            return DispatchOutcome::NoTask;
        };
        let Some(msg) = self.message_for(task, today) else {
            warn!(task, "unknown task id, nothing sent");
            return DispatchOutcome::UnknownTask(task.to_string());
        };
        info!(task, urgency = ?msg.urgency, %today, "dispatching reminder");
        match self.notifier.notify(&msg.title, &msg.body, msg.urgency) {
            Ok(delivery) => DispatchOutcome::Sent {
                slot: task.to_string(),
                delivery,
            },
            Err(error) => DispatchOutcome::Failed {
                slot: task.to_string(),
                error,
            },
        }
    }
}
