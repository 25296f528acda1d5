//! CLI smoke driver for `taskboard_core`.
//!
//! # Responsibility
//! - Boot a board session from the built-in or a JSON seed.
//! - Replay an optional JSON-lines event script through the dashboard.
//! - Print the resulting lanes for quick local sanity checks.
//!
//! Usage: `taskboard_cli [SEED_JSON] [EVENTS_JSONL]`

use std::process::ExitCode;
use taskboard_core::{
    core_version, load_seed_file, CoreConfig, Dashboard, DashboardEvent, DashboardView,
    EventOutcome, Seed, TaskStatus,
};

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    CoreConfig::from_env().apply_logging()?;
    println!("taskboard_core version={}", core_version());

    let seed = match args.first() {
        Some(path) => load_seed_file(path).map_err(|err| err.to_string())?,
        None => Seed::builtin(),
    };
    let mut dashboard = Dashboard::from_seed(seed).map_err(|err| err.to_string())?;

    if let Some(script) = args.get(1) {
        replay(&mut dashboard, script)?;
    }

    print_view(dashboard.view());
    Ok(())
}

fn replay(dashboard: &mut Dashboard, script: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(script)
        .map_err(|err| format!("failed to read event script `{script}`: {err}"))?;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event: DashboardEvent = serde_json::from_str(line)
            .map_err(|err| format!("{script}:{}: invalid event: {err}", line_no + 1))?;
        match dashboard.handle(event) {
            EventOutcome::Applied => {}
            EventOutcome::Ignored => println!("{script}:{}: ignored", line_no + 1),
            EventOutcome::Rejected(err) => {
                log::warn!("event=replay module=cli status=rejected line={}", line_no + 1);
                println!("{script}:{}: rejected: {err}", line_no + 1);
            }
        }
    }
    Ok(())
}

fn print_view(view: &DashboardView) {
    for status in TaskStatus::ALL {
        let lane = view.lanes.lane(status);
        println!("[{status}] ({})", lane.len());
        for task in lane {
            println!(
                "  #{} {} (assignee: {}, due: {})",
                task.id, task.title, task.assignee, task.due_date
            );
        }
    }
    println!("activities={}", view.activities.len());
}
