use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use skyron_charts::{Artifact, MetricsReport, ReportOpts};

#[derive(Parser, Debug)]
#[command(name = "skyron", version, about = "Render the Skyron projection charts")]
struct Cli {
    /// Defaults to `render` into the current directory.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render chart artifacts (PNG + animated GIF).
    Render(RenderArgs),
    /// Print projection table, margin sweep, and payback/ROI as JSON.
    Metrics(MetricsArgs),
    /// List artifact file names in render order.
    List,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Render only these artifacts (slug or file name); repeatable.
    #[arg(long = "only")]
    only: Vec<Artifact>,

    /// Stop at the first artifact that fails.
    #[arg(long, default_value_t = false)]
    fail_fast: bool,

    /// Animation frame delay in milliseconds.
    #[arg(long, default_value_t = 200)]
    frame_delay_ms: u32,
}

impl Default for RenderArgs {
    fn default() -> Self {
        let opts = ReportOpts::default();
        Self {
            out_dir: opts.out_dir,
            only: Vec::new(),
            fail_fast: opts.fail_fast,
            frame_delay_ms: opts.gif_frame_delay_ms,
        }
    }
}

#[derive(Parser, Debug)]
struct MetricsArgs {
    /// Write JSON to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or_else(|| Command::Render(RenderArgs::default())) {
        Command::Render(args) => cmd_render(args),
        Command::Metrics(args) => cmd_metrics(args),
        Command::List => cmd_list(),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skyron_charts=info,skyron=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = ReportOpts {
        out_dir: args.out_dir,
        artifacts: if args.only.is_empty() {
            Artifact::ALL.to_vec()
        } else {
            args.only
        },
        fail_fast: args.fail_fast,
        gif_frame_delay_ms: args.frame_delay_ms,
    };

    let summary = skyron_charts::render_report(&opts).context("build projection")?;
    for outcome in summary.written() {
        eprintln!("wrote {}", outcome.path.display());
    }

    let failed: Vec<String> = summary
        .failed()
        .map(|o| match &o.error {
            Some(e) => format!("{}: {e}", o.path.display()),
            None => o.path.display().to_string(),
        })
        .collect();
    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} artifacts failed:\n  {}",
            failed.len(),
            summary.outcomes.len(),
            failed.join("\n  ")
        );
    }
    Ok(())
}

fn cmd_metrics(args: MetricsArgs) -> anyhow::Result<()> {
    let json = MetricsReport::skyron()?.to_json_pretty()?;
    match args.out {
        Some(path) => {
            skyron_charts::ensure_parent_dir(&path)?;
            std::fs::write(&path, json)
                .with_context(|| format!("write metrics '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for artifact in Artifact::ALL {
        println!("{:<20} {}", artifact.slug(), artifact.file_name());
    }
    Ok(())
}
