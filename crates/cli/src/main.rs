//! The `wfcrun` binary: validates paths, loads the job manifest, runs every
//! accepted job through the trial scheduler against the configured engine,
//! persists successful outputs, and reports a success summary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wfcrun_engine::SubprocessEngine;
use wfcrun_manifest::{load_jobs, JobFamily, Manifest};
use wfcrun_pipeline::{run_all, write_outputs, RunSummary};

#[derive(Parser)]
#[command(
    name = "wfcrun",
    about = "Batch runner for an external WFC generation engine"
)]
struct Cli {
    /// Path to the XML manifest enumerating the jobs.
    config: PathBuf,

    /// Directory containing one input image per job.
    input: PathBuf,

    /// Names of jobs to run; all manifest jobs when omitted.
    #[arg(short, long, num_args = 1..)]
    name: Vec<String>,

    /// Maximum number of trials per job.
    #[arg(short, long, default_value_t = 1)]
    trial: u32,

    /// Output directory for generated images.
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Engine executable invoked once per trial.
    #[arg(long, default_value = "wfc-engine")]
    engine: PathBuf,

    /// Increase log verbosity.
    #[arg(short, long)]
    verbose: bool,

    /// Colorize the report.
    #[arg(short, long)]
    color: bool,

    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    if !cli.config.is_file() {
        bail!("the XML manifest file does not exist: {}", cli.config.display());
    }
    if !cli.input.is_dir() {
        bail!("the input directory does not exist: {}", cli.input.display());
    }
    // Created before any job runs, not lazily per result.
    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating output directory {}", cli.output.display()))?;

    let manifest = Manifest::from_path(&cli.config)?;
    let jobs = load_jobs(&manifest, &[JobFamily::Overlapping], &cli.input, &cli.name)?;
    tracing::info!(accepted = jobs.len(), "Manifest loaded");

    let engine = SubprocessEngine::new(&cli.engine);
    let results = run_all(&engine, &jobs, cli.trial);
    write_outputs(&results, &cli.output)?;

    let summary = RunSummary::from_results(&results);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary, cli.color);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_report(summary: &RunSummary, color: bool) {
    for job in &summary.jobs {
        let status = if job.converged {
            paint("ok", color, true)
        } else {
            paint("failed", color, false)
        };
        println!(
            "{:<24} {status}  seed={} attempts={} wall={:.3}s cpu={:.3}s",
            job.name, job.seed, job.attempts_used, job.wall_time_secs, job.cpu_time_secs,
        );
    }
    println!("{}/{} jobs succeeded", summary.successes, summary.total);
}

fn paint(text: &str, color: bool, ok: bool) -> String {
    if !color {
        return text.to_string();
    }
    if ok {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["wfcrun", "samples.xml", "samples"]);
        assert_eq!(cli.trial, 1);
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.name.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.color);
        assert!(!cli.json);
    }

    #[test]
    fn name_filter_accepts_multiple_values() {
        let cli = Cli::parse_from(["wfcrun", "s.xml", "in", "-n", "maze", "other"]);
        assert_eq!(cli.name, ["maze", "other"]);
    }

    #[test]
    fn paint_is_plain_without_the_color_flag() {
        assert_eq!(paint("ok", false, true), "ok");
        assert_ne!(paint("ok", true, true), "ok");
    }
}
