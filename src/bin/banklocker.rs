use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "banklocker", version, about = "Render the bank-locker diagram animation")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed scene layout as JSON.
    Layout,
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a range of frames as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render config JSON (canvas, fps, background, text template).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the end of the scene.
    #[arg(long)]
    end: Option<u64>,

    /// Render config JSON (canvas, fps, background, text template).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.cmd {
        Command::Layout => cmd_layout(),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<banklocker::RenderConfig> {
    match path {
        Some(p) => Ok(banklocker::RenderConfig::from_json_path(p)?),
        None => Ok(banklocker::RenderConfig::default()),
    }
}

fn build_scene(cfg: &banklocker::RenderConfig) -> anyhow::Result<banklocker::Scene> {
    let scene = banklocker::Scene::bank_locker(&banklocker::LayoutParams::BANK_LOCKER, cfg.fps)
        .context("build bank-locker scene")?;
    tracing::info!(
        frames = scene.duration.0,
        secs = scene.duration_secs(),
        "scene ready"
    );
    Ok(scene)
}

fn cmd_layout() -> anyhow::Result<()> {
    let layout = banklocker::compute_layout(&banklocker::LayoutParams::BANK_LOCKER);
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let scene = build_scene(&cfg)?;
    let mut renderer = banklocker::CpuRenderer::new(&cfg)?;

    let frame = banklocker::render_frame(&scene, banklocker::FrameIndex(args.frame), &mut renderer)
        .with_context(|| format!("render frame {}", args.frame))?;
    banklocker::write_png(&args.out, &frame)?;

    tracing::info!(out = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let scene = build_scene(&cfg)?;
    let mut renderer = banklocker::CpuRenderer::new(&cfg)?;

    let end = args.end.unwrap_or(scene.duration.0);
    let range =
        banklocker::FrameRange::new(banklocker::FrameIndex(args.start), banklocker::FrameIndex(end))?;
    let mut sink = banklocker::PngSequenceSink::new(&args.out_dir);

    let stats = banklocker::render_range(&scene, range, &mut renderer, &mut sink)?;
    tracing::info!(
        frames = stats.frames_rendered,
        dir = %args.out_dir.display(),
        "wrote frames"
    );
    Ok(())
}
