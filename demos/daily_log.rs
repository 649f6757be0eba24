//! A minimal view layer over the challenge controller.
//!
//! Usage:
//!   cargo run --example daily_log -- show
//!   cargo run --example daily_log -- log <day 1-30> <count>
//!   cargo run --example daily_log -- reset
//!
//! The store location and log filter come from the tracker config file
//! (see `TrackerConfig::default_path`).

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use pushup_challenge::config::TrackerConfig;
use pushup_challenge::controller::{ChallengeController, Snapshot};

fn main() -> Result<()> {
    let config = TrackerConfig::from_file(&TrackerConfig::default_path())
        .context("Failed to load tracker config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let today = Local::now().date_naive();
    let mut controller = ChallengeController::new(config.open_store());
    let snapshot = controller.initialize(today);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("show") => render(&snapshot, today),
        Some("log") => {
            let (Some(day), Some(count)) = (args.get(1), args.get(2)) else {
                bail!("usage: daily_log log <day 1-30> <count>");
            };
            let day: usize = day.parse().context("Day must be a number from 1 to 30")?;
            let outcome = controller.submit_day(day.saturating_sub(1), count, today)?;

            if let Some(warning) = &outcome.warning {
                println!("warning: progress not saved ({warning})");
            }
            if outcome.leveled_up {
                println!(
                    "Level up! You are now level {}: {}",
                    outcome.snapshot.user_level, outcome.snapshot.level.name
                );
            } else if outcome.met_target {
                println!("Daily target met!");
            }
            render(&outcome.snapshot, today);
        }
        Some("reset") => render(&controller.reset(today), today),
        Some(other) => bail!("unknown command: {other}"),
    }

    Ok(())
}

fn render(snapshot: &Snapshot, today: NaiveDate) {
    let stats = &snapshot.stats;
    println!("Day {} of 30", snapshot.current_day);
    if let Some(period) = snapshot.period {
        println!("Challenge period: {} - {}", period.start, period.end);
        println!("{} days left in the challenge window", period.days_remaining(today));
    }
    match snapshot.last_update {
        Some(at) => println!("Last updated: {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M")),
        None => println!("No updates yet"),
    }
    println!(
        "Level {}: {} (daily target {})",
        snapshot.user_level, snapshot.level.name, stats.daily_target
    );
    if stats.has_next_level {
        println!(
            "{} more push-ups until level {}",
            stats.pushups_till_next_level,
            snapshot.user_level + 1
        );
    }
    println!(
        "Total {} | completed {} | perfect {} | avg {} | best {}",
        stats.total_volume, stats.completed_days, stats.perfect_days, stats.avg_per_day, stats.best_day
    );
    println!(
        "Streak {} | perfect streak {} | remaining today {} | progress {}%",
        stats.current_streak, stats.perfect_streak, stats.remaining_today, stats.overall_progress_percent
    );

    for week in snapshot.record.values().chunks(6) {
        let row: Vec<String> = week.iter().map(|count| format!("{count:>4}")).collect();
        println!("{}", row.join(""));
    }
    if snapshot.is_complete {
        println!("Challenge complete!");
    }
}
