use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hullkit::{AlgoMode, HullCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

#[derive(Parser)]
#[command(name = "hullkit")]
#[command(about = "Convex hull, membership, Minkowski and overlap queries on JSON scenes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run one algorithm mode on a scene file
    Run {
        #[arg(long, value_enum)]
        mode: ModeArg,
        #[arg(long)]
        input: PathBuf,
        /// Result path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// QuickHull recursion ceiling
        #[arg(long)]
        max_depth: Option<usize>,
        /// Membership slack (cross-product units)
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Print version and default limits as JSON
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    QuickHull,
    PointInHull,
    MinkowskiSum,
    MinkowskiDifference,
    /// Origin-in-Minkowski-difference test
    Overlap,
}

impl From<ModeArg> for AlgoMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::QuickHull => AlgoMode::QuickHull,
            ModeArg::PointInHull => AlgoMode::PointInHull,
            ModeArg::MinkowskiSum => AlgoMode::MinkowskiSum,
            ModeArg::MinkowskiDifference => AlgoMode::MinkowskiDifference,
            ModeArg::Overlap => AlgoMode::Overlap,
        }
    }
}

fn main() -> Result<()> {
    // stdout carries results
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            mode,
            input,
            out,
            max_depth,
            eps,
        } => run(mode.into(), input, out, max_depth, eps),
        Action::Report => report(),
    }
}

fn run(
    mode: AlgoMode,
    input: PathBuf,
    out: Option<PathBuf>,
    max_depth: Option<usize>,
    eps: f64,
) -> Result<()> {
    let mut cfg = HullCfg {
        eps,
        ..HullCfg::default()
    };
    if max_depth.is_some() {
        cfg.max_depth = max_depth;
    }
    tracing::info!(mode = scene::mode_name(mode), input = %input.display(), out = ?out, "run");
    let scene = scene::load_scene(&input)?;
    let outcome = scene::run_mode(mode, &scene, &cfg)?;
    tracing::info!(inside = ?outcome.inside, "done");
    scene::write_outcome(&outcome, out.as_deref())
}

fn report() -> Result<()> {
    let cfg = HullCfg::default();
    let modes: Vec<&str> = AlgoMode::ALL.iter().map(|m| scene::mode_name(*m)).collect();
    let obj = serde_json::json!({
        "version": hullkit::VERSION,
        "modes": modes,
        "defaults": {
            "max_depth": cfg.max_depth,
            "max_points": cfg.max_points,
            "eps": cfg.eps
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
