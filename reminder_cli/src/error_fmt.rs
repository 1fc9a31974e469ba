//! Human-readable error descriptions and structured JSON error formatting.

use reminder_core::{CatalogError, NotifyError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(ce) = err.downcast_ref::<CatalogError>() {
        return format!(
            "What happened: The reminder catalog is inconsistent ({ce}).\nLikely causes: Two [[slots]] entries share an id, or one has no id.\nHow to fix: Give every slot a unique, non-empty id."
        );
    }

    // String-based heuristics for errors coming from config loading
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("open log file") {
        let cause = err
            .source()
            .map(|src| format!(" Cause: {src}"))
            .unwrap_or_default();
        return format!(
            "What happened: The log file could not be opened ({msg}).{cause}\nLikely causes: logging.file points below a regular file or into a directory without write permission.\nHow to fix: Point [logging] file at a writable location, or remove it to log to the console only."
        );
    }

    if lower.contains("read config") {
        return format!(
            "What happened: The config file could not be read.\nLikely causes: Wrong --config path or missing permissions.\nHow to fix: Check the path, or drop --config to use the built-in catalog. Original: {msg}"
        );
    }

    if lower.contains("parse config") || lower.contains("parse built-in config") {
        return format!(
            "What happened: The config file is not valid TOML for this tool.\nLikely causes: Typo, unknown header color, bad anchor_date (expects \"YYYY-MM-DD\") or unknown timezone name.\nHow to fix: Fix the reported line and rerun. Original: {msg}"
        );
    }

    if lower.contains("invalid configuration") {
        return format!(
            "What happened: Configuration is invalid or incomplete ({msg}).\nLikely causes: Missing [[slots]], empty title/body, duplicate ids, or out-of-range values.\nHow to fix: Edit the TOML config and try again."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Explanation for a non-fatal delivery outcome. `url_env` names the webhook variable.
pub fn describe_notify(err: &NotifyError, url_env: &str) -> String {
    match err {
        NotifyError::MissingEndpoint => format!(
            "What happened: No webhook endpoint is configured, so nothing was sent.\nHow to fix: export {url_env}=<webhook url> and rerun."
        ),
        NotifyError::Transport(e) => format!(
            "What happened: The card could not be delivered ({e}).\nLikely causes: No network, DNS failure, or a wrong webhook host.\nHow to fix: Check connectivity and the value of {url_env}. The reminder is not retried."
        ),
        NotifyError::Rejected { status } => format!(
            "What happened: The webhook answered HTTP {status}.\nLikely causes: Revoked or mistyped webhook token.\nHow to fix: Regenerate the bot webhook and update {url_env}. The reminder is not retried."
        ),
    }
}

pub fn notify_reason_name(err: &NotifyError) -> &'static str {
    match err {
        NotifyError::MissingEndpoint => "MissingEndpoint",
        NotifyError::Transport(_) => "Transport",
        NotifyError::Rejected { .. } => "Rejected",
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    if let Some(ce) = err.downcast_ref::<CatalogError>() {
        return json!({ "reason": "Catalog", "details": ce.to_string(), "message": humanize(err) })
            .to_string();
    }
    json!({ "reason": "Error", "message": humanize(err) }).to_string()
}
