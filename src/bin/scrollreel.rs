use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scrollreel::{
    AnimationRequest, AnimationRunner, DocumentGeometry, HeadlessHost, InitFailurePolicy,
    RunnerOptions, ScrollTimelineRunner, ViewportData, compute_time_range,
};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    /// Log filter (e.g. `info`, `scrollreel=debug`).
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shared time range of a batch.
    TimeRange(TimeRangeArgs),
    /// Start a batch on a headless document and sample every player at scroll offsets.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct TimeRangeArgs {
    /// Input batch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input batch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Comma-separated scroll offsets to sample at.
    #[arg(long, value_delimiter = ',', required = true)]
    scroll: Vec<f64>,

    /// What to do with already-bound players if a request fails to bind.
    #[arg(long, value_enum, default_value_t = FailureChoice::Rollback)]
    on_init_failure: FailureChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FailureChoice {
    Rollback,
    KeepPartial,
}

/// Everything needed to run a batch against a headless document.
#[derive(serde::Deserialize, Debug)]
struct BatchFile {
    document: DocumentGeometry,
    viewport: ViewportData,
    requests: Vec<AnimationRequest>,
}

#[derive(serde::Serialize)]
struct PlayerReport<'a> {
    target: &'a str,
    current_time: Option<f64>,
    sample: Option<scrollreel::EffectSample>,
}

#[derive(serde::Serialize)]
struct SampleReport<'a> {
    scroll: f64,
    players: Vec<PlayerReport<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = tracing_subscriber::EnvFilter::try_new(&cli.log)
        .with_context(|| format!("invalid --log filter '{}'", cli.log))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::TimeRange(args) => cmd_time_range(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_batch_json(path: &Path) -> anyhow::Result<BatchFile> {
    let f = File::open(path).with_context(|| format!("open batch '{}'", path.display()))?;
    let r = BufReader::new(f);
    let batch: BatchFile = serde_json::from_reader(r).with_context(|| "parse batch JSON")?;
    Ok(batch)
}

fn cmd_time_range(args: TimeRangeArgs) -> anyhow::Result<()> {
    let batch = read_batch_json(&args.in_path)?;
    let range = compute_time_range(&batch.requests);
    println!("{}", serde_json::to_string(&range)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let batch = read_batch_json(&args.in_path)?;
    let host = HeadlessHost::new(batch.document)?;
    let options = RunnerOptions {
        on_init_failure: match args.on_init_failure {
            FailureChoice::Rollback => InitFailurePolicy::Rollback,
            FailureChoice::KeepPartial => InitFailurePolicy::KeepPartial,
        },
    };

    let mut runner =
        ScrollTimelineRunner::with_options(host, batch.requests, batch.viewport, options);
    runner.start().with_context(|| "start runner")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for offset in args.scroll {
        runner.host_mut().scroll_to(offset);
        let host = runner.host();

        let mut players = Vec::with_capacity(runner.players().len());
        for player in runner.players() {
            players.push(PlayerReport {
                target: player.effect().target.as_str(),
                current_time: player.current_time(host)?,
                sample: player.sample(host)?,
            });
        }

        let report = SampleReport {
            scroll: host.current_scroll(),
            players,
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }

    runner.cancel();
    Ok(())
}
