//! whiteboard-kiosk: fullscreen touch kiosk for a remote whiteboard.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use whiteboard_kiosk_shell::{setup, Config, ShellError};
use whiteboard_kiosk_touch::{replay, script};

const ENGINE_HINT: &str = "Please ensure WebKit2GTK is installed: \
    sudo apt-get install libwebkit2gtk-4.1-0 (or equivalent)";

#[derive(Parser)]
#[command(
    name = "whiteboard-kiosk",
    about = "Fullscreen touch kiosk for a remote whiteboard",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Load this URL instead of the configured one.
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the kiosk window (the default).
    Run,

    /// Print the touch bridge script that is injected into pages.
    PrintScript,

    /// Print the default configuration as TOML.
    DefaultConfig,

    /// Feed a recorded input trace through the touch translator.
    Replay {
        /// Trace file, one JSON record per line. `-` reads stdin.
        trace: PathBuf,

        /// Scroll suppression window, overriding the configured one.
        #[arg(long)]
        quiescence_ms: Option<u64>,

        /// Print one JSON object per step.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = report_failure(&e, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Print a fatal error, plus the install hint when the engine is missing.
fn report_failure(err: &anyhow::Error, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "error: {err:#}")?;
    if matches!(
        err.downcast_ref::<ShellError>(),
        Some(ShellError::EngineUnavailable(_))
    ) {
        writeln!(out, "{ENGINE_HINT}")?;
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = setup::load_config(cli.config.as_deref());
    init_tracing(
        loaded
            .as_ref()
            .map_or("info", |l| l.config.log_level.as_str()),
    );
    let loaded = loaded.context("loading configuration")?;
    loaded.report();
    let mut config = loaded.config;
    if let Some(url) = cli.url {
        config.browser.url = url;
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            tracing::info!(url = %config.browser.url, "starting whiteboard kiosk");
            whiteboard_kiosk_shell::launch(&config)?;
        }
        Commands::PrintScript => {
            print!("{}", script::render(&config.touch.script_options()));
        }
        Commands::DefaultConfig => {
            let toml = toml::to_string_pretty(&Config::default())
                .context("serializing default config")?;
            print!("{toml}");
        }
        Commands::Replay {
            trace,
            quiescence_ms,
            json,
        } => {
            let quiescence = quiescence_ms
                .map_or_else(|| config.touch.quiescence(), Duration::from_millis);
            replay_trace(&trace, quiescence, json)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn replay_trace(path: &Path, quiescence: Duration, json: bool) -> anyhow::Result<()> {
    let records = if path == Path::new("-") {
        replay::parse_trace(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        replay::parse_trace(BufReader::new(file))
    }
    .with_context(|| format!("reading trace {}", path.display()))?;

    tracing::debug!(records = records.len(), ?quiescence, "replaying trace");
    let steps = replay::replay(&records, quiescence);

    let mut out = io::stdout().lock();
    for step in &steps {
        if json {
            serde_json::to_writer(&mut out, step)?;
            writeln!(out)?;
        } else {
            let emitted: Vec<String> = step.emitted.iter().map(|e| e.kind.to_string()).collect();
            write!(out, "{:>8}ms  {:<14} {:<8}", step.at_ms, step.input, step.disposition)?;
            if step.viewport_reset {
                write!(out, " scroll-reset")?;
            }
            if !emitted.is_empty() {
                write!(out, " -> {}", emitted.join(" "))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_text(err: &anyhow::Error) -> String {
        let mut out = Vec::new();
        report_failure(err, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn engine_failure_prints_error_once_with_hint() {
        let err = anyhow::Error::new(ShellError::EngineUnavailable(
            "no display".to_string(),
        ))
        .context("launching kiosk");
        let text = failure_text(&err);
        assert_eq!(text.matches("no display").count(), 1);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("error: launching kiosk: "));
        assert!(text.contains("libwebkit2gtk-4.1-0"));
    }

    #[test]
    fn other_failures_have_no_hint() {
        let err = anyhow::Error::new(ShellError::Config("bad".to_string()));
        let text = failure_text(&err);
        assert_eq!(text, "error: configuration error: bad\n");
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["whiteboard-kiosk", "--url", "https://board.test"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.url.as_deref(), Some("https://board.test"));
    }
}
