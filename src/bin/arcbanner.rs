use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{Rng as _, SeedableRng as _};

#[derive(Parser, Debug)]
#[command(name = "arcbanner", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a prompt to `banner.png`.
    Generate(GenerateArgs),
    /// Sample parameters and print the resolved layout as JSON without rendering.
    Plan(PlanArgs),
    /// Show how each catalog font resolves on this machine.
    Fonts(FontArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Text to render.
    #[arg(long)]
    prompt: String,

    /// Sampler seed (defaults to $ARCBANNER_SEED, then a random seed).
    #[arg(long)]
    seed: Option<u64>,

    /// Force a layout instead of sampling one.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1400)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 900)]
    height: u32,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Directory `banner.png` is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also print the banner plan as JSON on stdout.
    #[arg(long)]
    dump_plan: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Measure with fixed per-character advances instead of real fonts.
    #[arg(long)]
    fixed_metrics: bool,
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Extra directory of .ttf/.otf/.ttc files (defaults to $ARCBANNER_FONTS_DIR).
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Do not load system fonts.
    #[arg(long)]
    no_system_fonts: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Arc,
    Straight,
}

impl From<ModeChoice> for arcbanner::LayoutMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Arc => arcbanner::LayoutMode::Arc,
            ModeChoice::Straight => arcbanner::LayoutMode::Straight,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn opts_from(common: &CommonArgs) -> anyhow::Result<arcbanner::BannerOpts> {
    let env = arcbanner::BannerOpts::from_env();
    let canvas = arcbanner::Canvas::new(common.width, common.height)?;
    Ok(arcbanner::BannerOpts::default()
        .with_canvas(canvas)
        .with_seed(common.seed.or(env.seed))
        .with_mode(common.mode.map(Into::into))
        .with_fonts_dir(common.fonts.fonts_dir.clone().or(env.fonts_dir))
        .with_system_fonts(!common.fonts.no_system_fonts))
}

fn font_store(args: &FontArgs) -> arcbanner::FontStore {
    let dir = args
        .fonts_dir
        .clone()
        .or_else(|| arcbanner::BannerOpts::from_env().fonts_dir);
    arcbanner::FontStore::new(!args.no_system_fonts, dir.as_deref())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let opts = opts_from(&args.common)?;
    let mut generator = arcbanner::Generator::new(opts)?;

    if generator.generate(&args.common.prompt).is_none() {
        if let Some(err) = generator.last_error() {
            anyhow::bail!("render failed: {err}");
        }
        anyhow::bail!("prompt is empty; nothing to render");
    }

    if args.dump_plan
        && let Some(plan) = generator.last_plan()
    {
        println!(
            "{}",
            serde_json::to_string_pretty(plan).context("serialize banner plan")?
        );
    }

    let image = generator
        .image()
        .context("renderer produced no image")?;
    let path = image.save_to_dir(&args.out_dir)?;
    eprintln!("wrote {} (seed {})", path.display(), generator.seed());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let opts = opts_from(&args.common)?;
    let text = args.common.prompt.trim();
    if text.is_empty() {
        anyhow::bail!("prompt is empty; nothing to plan");
    }

    let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let params = arcbanner::sample_params(&mut rng, text, opts.mode);

    let plan = if args.fixed_metrics {
        arcbanner::compile_banner(
            text,
            &params,
            opts.canvas,
            &mut arcbanner::FixedAdvanceMetrics,
        )?
    } else {
        let mut engine = arcbanner::TextLayoutEngine::new(font_store(&args.common.fonts));
        arcbanner::compile_banner(text, &params, opts.canvas, &mut engine)?
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("serialize banner plan")?
    );
    eprintln!("seed {seed}");
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    let store = font_store(&args);
    println!("{} faces loaded", store.face_count());
    for choice in &arcbanner::FONT_CATALOG {
        match store.resolve(choice) {
            Ok(f) => println!(
                "{:<16} -> {} (face {}){}",
                choice.family,
                f.family_name,
                f.index,
                if f.exact { "" } else { " [fallback]" }
            ),
            Err(err) => println!("{:<16} -> unresolved: {err}", choice.family),
        }
    }
    Ok(())
}
