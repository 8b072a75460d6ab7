use std::path::PathBuf;

use crate::{
    image::SvgOpts,
    profile::{ProfileConfig, DEFAULT_PX_PER_INCH},
    ring::RingPlan,
    sketch::{Sketch, DEFAULT_HORIZONTAL_DIVISION, DEFAULT_SIZE},
    Canvas, Page, Result,
};

#[derive(clap::Parser, Debug)]
#[command(name = "lathe-sketch", version, about = "Sketches for segmented bowls", long_about = None)]
pub struct Arguments {
    /// Write the SVG to this file instead of stdout
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// The reference page: a 500x500 canvas inside a page container
    Page,
    /// A canvas with a centreline and the base marker
    Canvas {
        #[arg(long, default_value = "500")]
        width: String,
        #[arg(long, default_value = "500")]
        height: String,
    },
    /// The plan view of a segmented ring
    Ring {
        #[arg(long, default_value_t = 12)]
        segments: usize,
        /// Outer radius of the ring, in inches
        #[arg(long, default_value_t = (6.0 + 5.0 / 8.0) / 2.0)]
        radius: f32,
        /// Wall thickness of the ring, in inches
        #[arg(long, default_value_t = 3.0 / 4.0)]
        thickness: f32,
        /// Side length of the sketch, in drawing units
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: f32,
    },
    /// The cross-section of a bowl
    Profile {
        /// A JSON bowl profile.  The built-in bowl is used if this isn't given
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
}

impl Arguments {
    /// Renders the requested sketch, then writes it to the output file or stdout
    pub fn run(self) -> Result<()> {
        let markup = self.command.render()?;
        match self.output {
            Some(path) => {
                std::fs::write(&path, markup)?;
                log::info!("Wrote {}", path.display());
            }
            None => println!("{}", markup),
        }
        Ok(())
    }
}

impl Command {
    /// Generates the markup for this sketch.  Everything except the page is a standalone SVG file.
    pub fn render(&self) -> Result<String> {
        let opts = SvgOpts::standalone();
        let markup = match self {
            Command::Page => Page.markup(),
            Command::Canvas { width, height } => {
                Canvas::new(width, height)?.compose().svg_string(&opts)
            }
            Command::Ring {
                segments,
                radius,
                thickness,
                size,
            } => {
                let sketch = Sketch::new(*size, DEFAULT_HORIZONTAL_DIVISION)?;
                let plan = RingPlan::new(
                    sketch.origin(),
                    radius * DEFAULT_PX_PER_INCH,
                    thickness * DEFAULT_PX_PER_INCH,
                    *segments,
                )?;
                let mut image = sketch.set_up();
                plan.draw(&mut image)?;

                let metrics = plan.metrics().in_inches(DEFAULT_PX_PER_INCH);
                log::info!("segments: {}", metrics.segments);
                log::info!("outer_segment_length: {} in", metrics.outer_segment_length);
                log::info!("inner_segment_length: {} in", metrics.inner_segment_length);
                log::info!("all_segments_length: {} in", metrics.all_segments_length);
                image.svg_string(&opts)
            }
            Command::Profile { config } => {
                let config = match config {
                    Some(path) => ProfileConfig::load(path)?,
                    None => ProfileConfig::default(),
                };
                config.render()?.svg_string(&opts)
            }
        };
        Ok(markup)
    }
}
