use anyhow::{Context, Result};
use clap::Parser;
use paintcanvas::Config;
use paintcanvas::input::CanvasController;
use paintcanvas::script::Script;
use std::cell::Cell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAINTCANVAS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "paintcanvas")]
#[command(version = VERSION, about = "Headless raster canvas driven by pointer gestures")]
struct Cli {
    /// Gesture script to replay ("-" reads standard input)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/paintcanvas/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Initial drawing mode (pen, line, triangle, text, or eraser)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let source = read_script(script_path)?;
    let script = Script::parse(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    if script.is_empty() {
        log::warn!("Script {} contains no commands", script_path.display());
    } else {
        log::info!("Replaying {} commands from {}", script.len(), script_path.display());
    }

    let mut controller =
        CanvasController::from_config(&config).context("Failed to allocate canvas")?;
    if let Some(mode) = cli.mode.as_deref() {
        if !controller.set_mode_named(mode) {
            anyhow::bail!("Unknown mode '{mode}'");
        }
    }

    let regions = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&regions);
    controller.on_buffer_changed(move |_| counter.set(counter.get() + 1));

    let stats = script
        .replay(&mut controller)
        .with_context(|| format!("Failed to replay {}", script_path.display()))?;

    let background = controller.background();
    let changed = controller.surface_mut().count_pixels_unlike(background);

    println!(
        "Canvas {}x{}, mode {}",
        config.canvas.width,
        config.canvas.height,
        controller.mode()
    );
    println!("Commands replayed: {}", stats.commands);
    println!("Dirty regions: {}", regions.get());
    println!("Pending requests: {}", stats.pending_requests);
    println!("Pixels differing from background: {changed}");

    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

fn print_usage() {
    println!("paintcanvas: Headless raster canvas driven by pointer gestures");
    println!();
    println!("Usage:");
    println!("  paintcanvas --script FILE    Replay a gesture script and print a summary");
    println!("  paintcanvas --script -       Read the script from standard input");
    println!("  paintcanvas --help           Show help");
    println!();
    println!("Script commands (one per line, # starts a comment):");
    println!("  mode pen|line|triangle|text|eraser");
    println!("  color NAME|#rrggbb|rainbow    thickness thin|regular|thick|PIXELS");
    println!("  background NAME|#rrggbb       clear");
    println!("  down X Y    drag X Y    up X Y");
    println!("  request-color stroke|background");
    println!("  text STRING    pick COLOR    cancel");
}
