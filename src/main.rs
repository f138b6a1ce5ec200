use aidr::feeds::{CaptureFilter, FileSource, MonitoredPaths, RawSource, ReaderSource};
use aidr::output::{render, Format};
use aidr::{Config, ReportEngine};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aidr", about = "aidr — normalize AIDE scan output into structured reports")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    /// Configuration file layered over the built-in defaults.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize one scan output and print the report.
    Report {
        /// Scan output to read; stdin when absent or `-`.
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Input was already capture-filtered (e.g. stored output).
        #[arg(long)]
        no_capture: bool,
    },
    /// List monitored paths and rule groups from a scan configuration file.
    Rules {
        #[arg(value_name = "AIDE_CONF")]
        conf: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    match cli.command {
        Command::Report {
            input,
            format,
            no_capture,
        } => report(cli.config.as_deref(), input.as_deref(), format, no_capture),
        Command::Rules { conf } => rules(&conf),
    }
}

fn report(
    config_path: Option<&Path>,
    input: Option<&Path>,
    format: Format,
    no_capture: bool,
) -> anyhow::Result<()> {
    let settings = Config::load(config_path)
        .context("loading configuration")?
        .settings()
        .context("resolving configuration")?;
    let engine = ReportEngine::new(&settings);

    let mut source: Box<dyn RawSource> = match input {
        Some(path) if path != Path::new("-") => Box::new(FileSource::new(path)),
        _ => Box::new(ReaderSource::stdin()),
    };
    let raw = source
        .read_lines()
        .with_context(|| format!("reading scan output from {}", source.name()))?;

    let lines = if no_capture {
        raw
    } else {
        CaptureFilter::new().apply(&raw)
    };
    tracing::info!(source = %source.name(), lines = lines.len(), %format, "normalizing");

    let report = engine.normalize(&lines);
    let rendered = render(&report, format).context("serializing report")?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn rules(conf: &Path) -> anyhow::Result<()> {
    let paths = MonitoredPaths::from_path(conf)
        .with_context(|| format!("reading monitored paths from {}", conf.display()))?;
    println!("{}", serde_json::to_string_pretty(&paths).context("serializing rules")?);
    Ok(())
}
