#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core reminder logic.
//!
//! This crate turns a task id into a delivered group-chat card. All outbound
//! I/O goes through `reminder_traits::Transport`; "now" comes from
//! `reminder_traits::Clock`.
//!
//! ## Architecture
//!
//! - **Dose**: alternating full/half tablet from a fixed anchor date (`dose` module)
//! - **Card**: typed interactive-card payload (`card` module)
//! - **Notifier**: one POST per card, explicit outcome (`notifier` module)
//! - **Catalog**: slot id -> title/body/urgency lookup table (`catalog` module)
//! - **Dispatcher**: glue from task id to notifier (`dispatcher` module)

pub mod card;
pub mod catalog;
pub mod conversions;
pub mod dispatcher;
pub mod dose;
pub mod error;
pub mod http;
pub mod mocks;
pub mod notifier;

pub use card::{CardStyle, HeaderColor, Urgency, WebhookMessage};
pub use catalog::{Message, SlotCatalog, SlotDef};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use dose::{Dose, DoseLabels, DoseSchedule, local_date};
pub use error::{CatalogError, NotifyError};
pub use http::HttpTransport;
pub use notifier::{Delivery, Notifier};
