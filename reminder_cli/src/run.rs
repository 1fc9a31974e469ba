//! One invocation: load config, resolve today, dispatch, report.

use crate::cli::{Cli, json_mode};
use crate::error_fmt::{describe_notify, notify_reason_name};
use chrono::NaiveDate;
use reminder_config::Config;
use reminder_core::{DispatchOutcome, Dispatcher, HttpTransport, SlotCatalog, Urgency, local_date};
use reminder_traits::{Clock, SystemClock};
use serde_json::json;
use std::time::Duration;

pub fn load_config(cli: &Cli) -> eyre::Result<Config> {
    match cli.config.as_deref() {
        Some(path) => reminder_config::load_file(path),
        None => Config::builtin(),
    }
}

pub fn resolve_today(cli: &Cli, cfg: &Config, clock: &impl Clock) -> NaiveDate {
    cli.date
        .unwrap_or_else(|| local_date(clock, cfg.schedule.timezone))
}

fn urgency_name(u: Urgency) -> &'static str {
    match u {
        Urgency::Ordinary => "ordinary",
        Urgency::Escalated => "escalated",
    }
}

pub fn print_catalog(catalog: &SlotCatalog) {
    if json_mode() {
        let slots: Vec<_> = catalog
            .iter()
            .map(|s| {
                json!({
                    "id": s.id,
                    "at": s.at,
                    "urgency": urgency_name(s.urgency),
                    "title": s.title,
                    "uses_dose": s.needs_dose(),
                })
            })
            .collect();
        println!("{}", json!({ "slots": slots }));
        return;
    }
    for s in catalog.iter() {
        println!(
            "{:<20} {:<5} {:<9} {}",
            s.id,
            s.at.as_deref().unwrap_or("-"),
            urgency_name(s.urgency),
            s.title
        );
    }
}

fn usage_hint(catalog: &SlotCatalog) -> String {
    let ids: Vec<&str> = catalog.ids().collect();
    format!(
        "Usage: reminder [OPTIONS] <TASK>\nKnown tasks: {}",
        ids.join(", ")
    )
}

pub fn run(cli: &Cli, cfg: &Config) -> eyre::Result<()> {
    let timeout = cfg.webhook.timeout_ms.map(Duration::from_millis);
    let transport = HttpTransport::new(timeout);
    let endpoint = std::env::var(&cfg.webhook.url_env).ok();
    let dispatcher = Dispatcher::from_config(cfg, endpoint, transport)?;

    if cli.list {
        print_catalog(dispatcher.catalog());
        return Ok(());
    }

    let today = resolve_today(cli, cfg, &SystemClock::new());
    tracing::debug!(%today, anchor = %dispatcher.schedule().anchor(), "resolved dates");

    if cli.dry_run {
        let preview = cli
            .task
            .as_deref()
            .and_then(|t| dispatcher.preview(t, today));
        match preview {
            Some(card) => println!("{}", serde_json::to_string_pretty(&card)?),
            None => eprintln!("{}", usage_hint(dispatcher.catalog())),
        }
        return Ok(());
    }

    let outcome = dispatcher.dispatch(cli.task.as_deref(), today);
    report(&outcome, dispatcher.catalog(), &cfg.webhook.url_env);
    Ok(())
}

/// Print the outcome. Every outcome is a successful exit.
pub fn report(outcome: &DispatchOutcome, catalog: &SlotCatalog, url_env: &str) {
    let json = json_mode();
    match outcome {
        DispatchOutcome::NoTask => {
            if json {
                println!("{}", json!({ "result": "no_task" }));
            }
            eprintln!("{}", usage_hint(catalog));
        }
        DispatchOutcome::UnknownTask(task) => {
            if json {
                println!("{}", json!({ "result": "unknown_task", "task": task }));
            }
            eprintln!("Unknown task {task:?}; nothing sent.\n{}", usage_hint(catalog));
        }
        DispatchOutcome::Sent { slot, delivery } => {
            if json {
                println!(
                    "{}",
                    json!({ "result": "sent", "slot": slot, "status": delivery.status })
                );
            } else {
                println!("Sent {slot} (HTTP {})", delivery.status);
            }
        }
        DispatchOutcome::Failed { slot, error } => {
            if json {
                println!(
                    "{}",
                    json!({
                        "result": if error.is_config() { "skipped" } else { "failed" },
                        "slot": slot,
                        "reason": notify_reason_name(error),
                        "message": error.to_string(),
                    })
                );
            }
            eprintln!("{}", describe_notify(error, url_env));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clap::Parser;
    use reminder_traits::FixedClock;

    #[test]
    fn date_flag_overrides_clock() {
        let cli = Cli::parse_from(["reminder", "--date", "2026-02-13", "morning_8"]);
        let cfg = Config::builtin().unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            resolve_today(&cli, &cfg, &clock),
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
        );
    }

    #[test]
    fn today_uses_configured_zone() {
        let cli = Cli::parse_from(["reminder", "morning_8"]);
        let cfg = Config::builtin().unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 2, 12, 17, 0, 0).unwrap());
        assert_eq!(
            resolve_today(&cli, &cfg, &clock),
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
        );
    }

    #[test]
    fn usage_lists_every_builtin_task() {
        let cfg = Config::builtin().unwrap();
        let cat = SlotCatalog::try_from(&cfg).unwrap();
        let hint = usage_hint(&cat);
        for id in cat.ids() {
            assert!(hint.contains(id));
        }
    }
}
