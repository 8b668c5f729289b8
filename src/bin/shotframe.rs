use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use shotframe::{
    Aspect, ChromeTheme, Color, DEFAULT_FILE_NAME, LayoutConfig, Padding, Position,
    RenderSettings, SWATCHES, Session, Shadow,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shotframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame a screenshot and write it as a PNG.
    Render(RenderArgs),
    /// List the built-in background swatches.
    Swatches,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (PNG, JPEG, WebP, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout config JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    out: PathBuf,

    /// Also copy the result to the system clipboard.
    #[arg(long)]
    copy: bool,

    /// auto, square or widescreen.
    #[arg(long)]
    aspect: Option<Aspect>,

    /// none, small, medium, large or a pixel value.
    #[arg(long)]
    padding: Option<Padding>,

    #[arg(long)]
    outer_radius: Option<f64>,

    #[arg(long)]
    inner_radius: Option<f64>,

    /// none, light, medium, heavy or a strength in 0..=1.
    #[arg(long)]
    shadow: Option<Shadow>,

    /// center, top, bottom, top-left, top-right, bottom-left or bottom-right.
    #[arg(long)]
    position: Option<Position>,

    /// Swatch name or #RRGGBB[AA].
    #[arg(long)]
    background: Option<Color>,

    /// Enable the grain overlay.
    #[arg(long)]
    noise: bool,

    /// Grain density in 0..=1 (implies --noise).
    #[arg(long)]
    noise_amount: Option<f64>,

    /// none, light or dark.
    #[arg(long)]
    chrome: Option<ChromeTheme>,

    /// Device pixel ratio of the output.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Largest output side in pixels; padding shrinks to fit.
    #[arg(long, default_value_t = RenderSettings::DEFAULT_MAX_SIDE)]
    max_side: u32,

    /// Seed for reproducible grain.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Swatches => {
            for (name, color) in SWATCHES {
                println!("{name:<8} {color}");
            }
            Ok(())
        }
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    match path {
        Some(p) => LayoutConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(LayoutConfig::default()),
    }
}

fn apply_overrides(config: &mut LayoutConfig, args: &RenderArgs) {
    if let Some(v) = args.aspect {
        config.aspect = v;
    }
    if let Some(v) = args.padding {
        config.padding = v;
    }
    if let Some(v) = args.outer_radius {
        config.outer_radius = v;
    }
    if let Some(v) = args.inner_radius {
        config.inner_radius = v;
    }
    if let Some(v) = args.shadow {
        config.shadow = v;
    }
    if let Some(v) = args.position {
        config.position = v;
    }
    if let Some(v) = args.background {
        config.background = v;
    }
    if args.noise {
        config.noise.enabled = true;
    }
    if let Some(v) = args.noise_amount {
        config.noise.enabled = true;
        config.noise.amount = v;
    }
    if let Some(v) = args.chrome {
        config.chrome = v;
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;

    let settings = RenderSettings {
        device_scale: args.scale,
        max_surface_side: args.max_side,
    };
    let mut session = Session::with_config(settings, config);
    match args.seed {
        Some(seed) => {
            session.load_image_with_rng(&bytes, &mut rand::rngs::StdRng::seed_from_u64(seed))
        }
        None => session.load_image(&bytes),
    }
    .with_context(|| format!("render '{}'", args.in_path.display()))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    shotframe::write_png(session.surface(), &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        session.surface().width(),
        session.surface().height()
    );

    if args.copy {
        session.copy_to_clipboard().context("copy to clipboard")?;
        eprintln!("copied to clipboard");
    }
    Ok(())
}
