use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use scrawl::SvgRenderer;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteOutput { path: String, source: io::Error },
    #[error(transparent)]
    Convert(#[from] scrawl::ConvertError),
    #[error("could not encode commands as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML page with the rendered SVG.
    Svg,
    /// The draw-command list as JSON, for inspection.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "scrawl", about = "Render ASCII-art diagrams as hand-drawn SVG sketches")]
struct Cli {
    /// Input diagram file; stdin when omitted or "-".
    input: Option<String>,

    /// Output file; stdout when omitted or "-".
    #[arg(short, long)]
    output: Option<String>,

    /// Fixed jitter seed, for reproducible output.
    #[arg(long, env = "SCRAWL_SEED")]
    seed: Option<u64>,

    /// Edge length of one grid cell in SVG units.
    #[arg(long, env = "SCRAWL_SCALE", default_value_t = scrawl::consts::DEFAULT_SCALE)]
    scale: f64,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scrawl: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = read_input(cli.input.as_deref())?;
    let commands = scrawl::convert(&text)?;

    let output = match cli.format {
        Format::Svg => {
            let mut renderer = match cli.seed {
                Some(seed) => SvgRenderer::with_seed(cli.scale, seed),
                None => SvgRenderer::new(cli.scale),
            };
            renderer.render_document(&commands)
        }
        Format::Json => {
            let mut encoded = serde_json::to_string_pretty(&commands)?;
            encoded.push('\n');
            encoded
        }
    };
    write_output(cli.output.as_deref(), &output)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::ReadInput { path: "stdin".into(), source })?;
            Ok(text)
        }
        Some(path) => {
            fs::read_to_string(path).map_err(|source| CliError::ReadInput { path: path.into(), source })
        }
    }
}

fn write_output(path: Option<&str>, output: &str) -> Result<(), CliError> {
    match path {
        None | Some("-") => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| CliError::WriteOutput { path: "stdout".into(), source }),
        Some(path) => {
            fs::write(path, output).map_err(|source| CliError::WriteOutput { path: path.into(), source })
        }
    }
}
