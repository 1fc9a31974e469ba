use clap::Parser;

mod cli;
mod error_fmt;
mod logging;
mod run;

use cli::{Cli, JSON_MODE};
use error_fmt::{format_error_json, humanize};

fn real_main(cli: &Cli) -> eyre::Result<()> {
    color_eyre::install()?;
    let cfg = run::load_config(cli)?;

    let level = cli
        .log_level
        .as_deref()
        .or(cfg.logging.level.as_deref())
        .unwrap_or("info");
    let _log_guard = logging::init_tracing(cli.json, level, &cfg.logging)?;
    tracing::debug!(task = ?cli.task, config = ?cli.config, "starting");

    run::run(cli, &cfg)
}

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(e) = real_main(&cli) {
        if cli.json {
            eprintln!("{}", format_error_json(&e));
        } else {
            eprintln!("{}", humanize(&e));
        }
        // Only configuration and setup errors get here; dispatch outcomes always exit 0.
        std::process::exit(1);
    }
}
