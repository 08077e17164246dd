//! Cordiform CLI
//!
//! Usage:
//!   cordiform [OPTIONS] [CONFIG]
//!
//! Options:
//!   -W, --width <PX>       Canvas width
//!   -H, --height <PX>      Canvas height
//!   -p, --padding <PX>     Padding on every side
//!   -l, --left <N>         Left lobe progress
//!   -r, --right <N>        Right lobe progress
//!   -b, --bottom <N>       Bottom path progress
//!   -o, --output <FILE>    Write the SVG here instead of stdout
//!   -d, --debug            Print the computed geometry to stderr
//!   -h, --help             Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use cordiform::{
    compute_geometry, render_with_config, BoundingBox, Padding, ProgressState, RenderConfig,
    StyleConfig,
};

#[derive(Parser)]
#[command(name = "cordiform")]
#[command(about = "Render a three-segment heart-shaped progress indicator to SVG")]
struct Cli {
    /// Style file (TOML format)
    config: Option<PathBuf>,

    /// Canvas width
    #[arg(short = 'W', long, default_value_t = 300.0)]
    width: f64,

    /// Canvas height
    #[arg(short = 'H', long, default_value_t = 300.0)]
    height: f64,

    /// Padding on every side
    #[arg(short, long, default_value_t = 0.0)]
    padding: f64,

    /// Left lobe progress (wraps modulo 101)
    #[arg(short, long, default_value_t = 0)]
    left: u32,

    /// Right lobe progress (wraps modulo 101)
    #[arg(short, long, default_value_t = 0)]
    right: u32,

    /// Bottom path progress (wraps modulo 101)
    #[arg(short, long, default_value_t = 0)]
    bottom: u32,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: print the computed geometry
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Load style
    let style = match &cli.config {
        Some(path) => load_style(path),
        None => StyleConfig::default(),
    };

    let bounds =
        BoundingBox::new(cli.width, cli.height).with_padding(Padding::uniform(cli.padding));
    let progress = ProgressState::new(cli.left, cli.right, cli.bottom);

    if cli.debug {
        print_geometry(&bounds, &style);
    }

    let config = RenderConfig::new().with_style(style);
    let svg = render_with_config(&bounds, &progress, &config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", svg),
    }
}

fn load_style(path: &Path) -> StyleConfig {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };

    match StyleConfig::from_str(&source) {
        Ok(style) => style,
        Err(e) => {
            eprint!("{}", e.format(&source, &path.display().to_string()));
            std::process::exit(1);
        }
    }
}

fn print_geometry(bounds: &BoundingBox, style: &StyleConfig) {
    eprintln!("=== Geometry Debug ===");
    match compute_geometry(bounds, style) {
        Ok(g) => {
            eprintln!(
                "drawable x={:.1} y={:.1} w={:.1} h={:.1}",
                g.drawable.x, g.drawable.y, g.drawable.width, g.drawable.height
            );
            eprintln!("side={:.2} stroke={:.2}", g.side_length, g.stroke_width);
            eprintln!(
                "left lobe  x={:.1} y={:.1} side={:.1}",
                g.left_arc_rect.x, g.left_arc_rect.y, g.left_arc_rect.width
            );
            eprintln!(
                "right lobe x={:.1} y={:.1} side={:.1}",
                g.right_arc_rect.x, g.right_arc_rect.y, g.right_arc_rect.width
            );
            eprintln!(
                "bottom arc center=({:.1}, {:.1}) r={:.2}",
                g.bottom_rect.center().x,
                g.bottom_rect.center().y,
                g.bottom_arc_radius
            );
            eprintln!(
                "path length={:.2} right line bound={:.2} bottom arc bound={:.2}",
                g.path_length, g.right_line_progress_bound, g.bottom_arc_progress_bound
            );
        }
        Err(e) => eprintln!("{}", e),
    }
    eprintln!("======================");
}
