use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "piece-motion", version)]
struct Cli {
    /// Log pipeline details (resolved style, counts) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan and compile motion, printing the result as JSON.
    Plan(PlanArgs),
    /// Evaluate the compiled expressions at given times.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Seed override; falls back to the config seed, then to entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Seed override; falls back to the config seed, then to entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Times in seconds.
    #[arg(long, num_args = 1.., required = true)]
    at: Vec<f64>,
}

#[derive(serde::Serialize)]
struct Expressions<'a> {
    x: &'a str,
    y: &'a str,
    rotation: &'a str,
}

#[derive(serde::Serialize)]
struct PlanReport<'a> {
    seed: u64,
    fingerprint: String,
    source_image: Option<piece_motion::Rect>,
    #[serde(flatten)]
    outcome: &'a piece_motion::PlanOutcome,
    expressions: Expressions<'a>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config_json(path: &Path) -> anyhow::Result<piece_motion::PlanConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: piece_motion::PlanConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(cfg)
}

struct Run {
    seed: u64,
    config: piece_motion::PlanConfig,
    outcome: piece_motion::PlanOutcome,
    compiled: piece_motion::CompiledPlan,
}

fn plan_from_config(config_path: &Path, seed: Option<u64>) -> anyhow::Result<Run> {
    let config = read_config_json(config_path)?;
    let req = config
        .to_request()
        .with_context(|| format!("invalid config '{}'", config_path.display()))?;
    let seed = seed
        .or(config.seed)
        .unwrap_or_else(piece_motion::Rng64::entropy_seed);

    let mut rng = piece_motion::Rng64::new(seed);
    let outcome = piece_motion::plan_motion(&req, &mut rng).context("plan motion")?;
    if outcome.report.downgraded {
        eprintln!(
            "alignments reduced from {} to {}",
            outcome.report.requested, outcome.report.granted
        );
    }
    let compiled =
        piece_motion::compile_plan(&outcome.plan, &config.render).context("compile plan")?;

    Ok(Run {
        seed,
        config,
        outcome,
        compiled,
    })
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let run = plan_from_config(&args.config, args.seed)?;

    let source_image = run
        .config
        .image
        .map(|image| {
            piece_motion::place_source_image(run.config.frame, image, run.config.image_coverage)
        })
        .transpose()?;

    let report = PlanReport {
        seed: run.seed,
        fingerprint: format!("{:016x}", run.outcome.plan.fingerprint()),
        source_image,
        outcome: &run.outcome,
        expressions: Expressions {
            x: &run.compiled.x.expr,
            y: &run.compiled.y.expr,
            rotation: &run.compiled.rotation.expr,
        },
    };
    let json = serde_json::to_string_pretty(&report).context("serialize plan")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let run = plan_from_config(&args.config, args.seed)?;

    let mut poses = Vec::with_capacity(args.at.len());
    for t in args.at {
        let pose = run
            .compiled
            .sample_rendered(t)
            .with_context(|| format!("evaluate expressions at t={t}"))?;
        poses.push(pose);
    }
    let json = serde_json::to_string_pretty(&poses).context("serialize samples")?;
    println!("{json}");
    Ok(())
}
