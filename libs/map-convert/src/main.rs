//! # map-convert
//!
//! Command-line front end: reads a `.map` file, reconstructs its brushes and
//! writes the scene as OBJ or JSON.
//!
//! ```text
//! map-convert -i base1.map -o base1.obj -t textures/ -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use map_convert::{convert_bytes, ConvertError, ConvertOptions, ConvertResult, OutputFormat};
use tracing::{error, info, warn, Level};

#[derive(Debug, Parser)]
#[command(name = "map-convert", version, about = "Convert Id Tech 2 .map brushes into polygon meshes")]
struct Cli {
    /// Input .map file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Texture directory used for UV generation
    #[arg(short, long)]
    textures: Option<PathBuf>,

    /// Log every step
    #[arg(short, long)]
    verbose: bool,

    /// Output format (obj or json); defaults to the output extension
    #[arg(long)]
    format: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ConvertResult<()> {
    let format = match &cli.format {
        Some(name) => OutputFormat::from_name(name)?,
        None => OutputFormat::from_path(&cli.output)?,
    };

    let bytes = std::fs::read(&cli.input).map_err(|e| ConvertError::io(&cli.input, e))?;
    info!("converting {}", cli.input.display());

    let options = ConvertOptions {
        textures: cli.textures.clone(),
        ..ConvertOptions::default()
    };
    let conversion = convert_bytes(&bytes, &options)?;

    for issue in conversion.report.errors() {
        warn!("{}", issue);
    }

    conversion.scene.write(&cli.output, format)?;
    info!(
        "wrote {} nodes, {} points to {}",
        conversion.scene.nodes.len(),
        conversion.scene.point_count(),
        cli.output.display()
    );
    Ok(())
}
