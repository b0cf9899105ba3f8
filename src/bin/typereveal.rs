use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "typereveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every caption frame as a PNG file.
    Render(RenderArgs),
    /// Print the laid-out cells without rendering.
    Plan(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Service configuration JSON (canvas, default style, output naming).
    #[arg(long)]
    config: PathBuf,

    /// Caption data JSON (array of groups).
    #[arg(long)]
    data: PathBuf,

    /// Directory font files are resolved against. Defaults to the config file's directory.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output root directory, overriding `output_root` from the config.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

struct Loaded {
    config: typereveal::ServiceConfig,
    groups: Vec<typereveal::GroupSpec>,
    backend: typereveal::CpuBackend,
}

fn load(args: &InputArgs) -> anyhow::Result<Loaded> {
    let config = typereveal::ServiceConfig::from_path(&args.config)?;
    config
        .validate()
        .with_context(|| format!("invalid config '{}'", args.config.display()))?;
    let groups = typereveal::load_groups(&args.data)?;

    let assets_root = args.assets.clone().unwrap_or_else(|| {
        args.config
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });
    Ok(Loaded {
        config,
        groups,
        backend: typereveal::CpuBackend::new(assets_root),
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let Loaded {
        config,
        groups,
        mut backend,
    } = load(&args.input)?;

    let mut naming = config.output_naming();
    if let Some(out) = args.out {
        naming.root = out;
    }
    let root = naming.root.clone();
    let mut sink = typereveal::FileSink::new(naming, typereveal::PngEncoder);

    let report = typereveal::run(
        &groups,
        &config.default_style(),
        config.canvas()?,
        &mut backend,
        &mut sink,
    )?;

    for w in &report.warnings {
        eprintln!("warning: {w}");
    }
    eprintln!(
        "wrote {} frames to {}",
        report.exported.len(),
        root.display()
    );
    Ok(())
}

fn cmd_plan(args: InputArgs) -> anyhow::Result<()> {
    let Loaded {
        config,
        groups,
        mut backend,
    } = load(&args)?;

    let plan = typereveal::plan_captions(
        &groups,
        &config.default_style(),
        config.canvas()?,
        &mut backend,
    )?;

    println!("seq\tgroup\tline\tx\tdrawable\texport\ttext");
    for cell in &plan.cells {
        println!(
            "{:03}\t{:03}\t{}\t{:.1}\t{}\t{}\t{}",
            cell.seq.0,
            cell.group.0,
            cell.line,
            cell.x,
            cell.is_drawable(),
            cell.export,
            cell.text
        );
    }
    for w in &plan.warnings {
        eprintln!("warning: {w}");
    }
    Ok(())
}
