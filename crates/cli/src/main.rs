//! U-Loading CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use u_loading_cli::{
    render_estimate, render_summary, save_json, to_json, LoadRequest, OptimizeReport,
};
use u_loading_core::Dimensions;
use u_loading_d3::{Container, Packer3D, QuickEstimator};

#[derive(Parser)]
#[command(name = "u-loading")]
#[command(about = "Greedy pallet and box loading for a single container")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one container with pallets, then fill the leftover space with boxes
    Optimize {
        /// Container inner dimensions as W,H,D
        #[arg(short, long)]
        container: Dimensions,

        /// Maximum container weight (reported, not enforced)
        #[arg(short, long)]
        max_weight: Option<f64>,

        /// Pallet dimensions as W,H,D
        #[arg(short, long)]
        pallet: Dimensions,

        /// Box dimensions as W,H,D
        #[arg(short, long = "box")]
        box_dims: Dimensions,

        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Output file for the result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a loading request from a JSON file
    RunFile {
        /// Path to the JSON request
        file: PathBuf,

        /// Output file for the result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Quick grid estimate of how many boxes fit
    Estimate {
        /// Container inner dimensions as W,H,D
        #[arg(short, long)]
        container: Dimensions,

        /// Box dimensions as W,H,D
        #[arg(short, long = "box")]
        box_dims: Dimensions,

        /// Number of boxes to load
        #[arg(short, long)]
        quantity: usize,

        /// Stack boxes directly in the container instead of on standard pallets
        #[arg(long)]
        no_pallets: bool,

        /// Print the estimate as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn run_request(request: &LoadRequest, json: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
    request.validate()?;

    let container = request.container();
    let pallets = request.pallet_dimensions();
    let result = Packer3D::default_config().optimize(&container, &pallets, &request.box_dims)?;
    let report = OptimizeReport::new(&container, &result);

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", render_summary(&container, &result)?);
    }

    if let Some(path) = output {
        save_json(&report, &path)?;
        println!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            container,
            max_weight,
            pallet,
            box_dims,
            json,
            output,
        } => {
            let container = match max_weight {
                Some(weight) => Container::from_dimensions(container).with_max_weight(weight),
                None => Container::from_dimensions(container),
            };
            let request = LoadRequest::new(container, pallet, box_dims);
            run_request(&request, json, output)?;
        }

        Commands::RunFile { file, output } => {
            let request = LoadRequest::from_file(&file)
                .with_context(|| format!("Failed to load request {}", file.display()))?;
            run_request(&request, false, output)?;
        }

        Commands::Estimate {
            container,
            box_dims,
            quantity,
            no_pallets,
            json,
        } => {
            container.validate()?;
            box_dims.validate()?;

            let estimate = QuickEstimator::new()
                .with_pallets(!no_pallets)
                .estimate(&container, &box_dims, quantity);

            if json {
                println!("{}", to_json(&estimate)?);
            } else {
                print!("{}", render_estimate(&estimate)?);
            }
        }
    }

    Ok(())
}
