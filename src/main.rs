use clap::{Parser, Subcommand};
use memeframe::caption::{AdvanceMeasure, layout};
use memeframe::controller::MemeController;
use memeframe::geometry::{Dimensions, fit};
use memeframe::render::{self, Style, SvgSurface};
use memeframe::{config, output};
use std::path::PathBuf;

/// Caption text shared by commands that lay out captions.
#[derive(clap::Args, Clone)]
struct CaptionArgs {
    /// Text anchored to the top edge
    #[arg(long, default_value = "")]
    top: String,
    /// Text anchored to the bottom edge
    #[arg(long, default_value = "")]
    bottom: String,
}

#[derive(Parser)]
#[command(name = "memeframe")]
#[command(about = "Fit an image into a canvas and add meme captions")]
#[command(long_about = "\
Fit an image into a canvas and add meme captions

The image is scaled to fill the canvas along one axis and centered along
the other. Top text wraps downward from the top edge, bottom text wraps
upward from the bottom edge. A line wraps once it would reach 95% of the
canvas width.

Run 'memeframe gen-config' to generate a documented memeframe.toml.")]
#[command(version)]
struct Cli {
    /// Config file (stock defaults when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show where an image of the given size lands on the canvas
    Fit {
        width: f64,
        height: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the caption lines for the given text
    Layout {
        #[command(flatten)]
        captions: CaptionArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render an image with captions to SVG
    Render {
        /// Source image (JPEG, PNG, WebP, GIF, BMP)
        image: PathBuf,
        #[command(flatten)]
        captions: CaptionArgs,
        /// SVG output path
        #[arg(short, long, default_value = "meme.svg")]
        output: PathBuf,
        /// Also write the image layer (background + fitted image) as PNG
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Print a stock memeframe.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config_path = cli.config;
    let load = || config::load_config(config_path.as_deref());

    match cli.command {
        Command::Fit {
            width,
            height,
            json,
        } => {
            let canvas = load()?.canvas.dimensions();
            let content = Dimensions::new(width, height);
            if content.is_degenerate() {
                return Err(format!("image size must be positive, got {width}x{height}").into());
            }
            let placement = fit(canvas, content);
            if json {
                println!("{}", serde_json::to_string_pretty(&placement)?);
            } else {
                output::print_placement(canvas, &placement);
            }
        }
        Command::Layout { captions, json } => {
            let config = load()?;
            let measure = AdvanceMeasure::from(&config.font);
            let lines = layout(
                Some(captions.top.as_str()),
                Some(captions.bottom.as_str()),
                config.canvas.dimensions(),
                &measure,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                output::print_lines(&lines);
            }
        }
        Command::Render {
            image,
            captions,
            output: svg_path,
            png,
        } => {
            let config = load()?;
            let bytes = std::fs::read(&image)?;
            let mut controller = MemeController::new(&config);
            controller.on_image_selected(&bytes)?;
            let measure = AdvanceMeasure::from(&config.font);
            let frame =
                controller.on_generate_requested(&captions.top, &captions.bottom, &measure)?;

            let style = Style::from_config(&config)?;
            let mut surface = SvgSurface::new(config.canvas.width, config.canvas.height);
            let pixels = controller
                .image()
                .ok_or("image was not retained after selection")?;
            render::render_meme(&mut surface, pixels, &frame, &style)?;

            std::fs::write(&svg_path, surface.to_svg_string()?)?;
            if let Some(png_path) = &png {
                surface.raster().save(png_path)?;
            }
            output::print_render_output(&svg_path, png.as_deref(), frame.lines.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
