use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn};

use star_map::catalog::star::angular_separation_deg;
use star_map::search::{load_search_results, resolve_from_catalog};
use star_map::{CanvasSize, CelestialPoint, InputEvent, SkyView, StarCatalog, StarMapConfig};

#[derive(Parser)]
#[command(
    name = "star_map",
    about = "Projects a star catalog and search results onto a 2D sky map"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one frame and print its draw commands as JSON
    Render {
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON array of search results to plot
        #[arg(long)]
        results: Option<PathBuf>,
        /// JSON array of input events replayed before rendering
        #[arg(long)]
        events: Option<PathBuf>,
        /// seed for the background stars, overrides the config
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// output file, stdout when left out
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the angular distance in degrees between two sky positions
    Separation {
        ra1_hours: f64,
        #[arg(allow_hyphen_values = true)]
        dec1_degrees: f64,
        ra2_hours: f64,
        #[arg(allow_hyphen_values = true)]
        dec2_degrees: f64,
    },
}

fn main() -> star_map::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            config,
            results,
            events,
            seed,
            width,
            height,
            output,
        } => {
            let mut config = StarMapConfig::load_or_default(config.as_deref())?;
            if seed.is_some() {
                config.catalog.seed = seed;
            }
            config.canvas = CanvasSize::new(
                width.unwrap_or(config.canvas.width),
                height.unwrap_or(config.canvas.height),
            );
            config.validate()?;
            let _logger = star_map::logging::setup_logging(&config.log_level)?;

            let mut view = SkyView::new(StarCatalog::build(&config.catalog), config.canvas);
            view.set_constellations_visible(config.show_constellations);

            if let Some(path) = results {
                let mut results = load_search_results(&path)?;
                let resolved = resolve_from_catalog(&mut results, view.catalog());
                if resolved > 0 {
                    info!("took coordinates of {} search results from the catalog", resolved);
                }
                let plotted = view.plot_search_results(&results);
                info!("plotted {} of {} search results", plotted, results.len());
                if plotted == 0 && !results.is_empty() {
                    warn!("none of the search results in {} have coordinates", path.display());
                }
            }

            if let Some(path) = events {
                let events: Vec<InputEvent> =
                    serde_json::from_reader(BufReader::new(File::open(path)?))?;
                for event in events {
                    view.handle_input(event);
                }
            }

            let frame = view.frame();
            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(io::stdout()),
            };
            let mut writer = BufWriter::new(writer);
            serde_json::to_writer_pretty(&mut writer, &frame)?;
            writeln!(writer)?;
        }
        Command::Separation {
            ra1_hours,
            dec1_degrees,
            ra2_hours,
            dec2_degrees,
        } => {
            let a = CelestialPoint::new("a", ra1_hours, dec1_degrees, 0.0);
            let b = CelestialPoint::new("b", ra2_hours, dec2_degrees, 0.0);
            println!("{:.4}", angular_separation_deg(&a, &b));
        }
    }
    Ok(())
}
