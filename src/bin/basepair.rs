use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use basepair_core::diagnostics::Diagnostic;
use basepair_core::options::{CifIdScheme, Options, PartialOptions};
use basepair_core::record::{AnalysisOutput, Source};
use basepair_core::{adapter, analyse, emit};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Both,
}

/// Detects RNA/DNA base pairs, stacks, and multiplets in a structure file.
#[derive(Parser, Debug)]
#[command(name = "basepair", version)]
struct Cli {
    /// Input PDB or mmCIF file.
    input: PathBuf,

    /// Output path; defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional JSON/TOML config file, overridden by any CLI flag below.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restrict analysis to the given chain IDs (repeatable).
    #[arg(long = "chain")]
    chain_filter: Vec<String>,

    /// mmCIF identifier scheme to use.
    #[arg(long, value_enum)]
    cif_ids: Option<CliCifIds>,

    /// Representative NMR model (default: 1).
    #[arg(long)]
    nmr_model: Option<i32>,

    /// Truncate chain IDs to one character (legacy compatibility).
    #[arg(long)]
    chain_id_truncate: bool,

    /// Upstream resolution filter, recorded but not enforced by the core.
    #[arg(long)]
    resolution_max: Option<f64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliCifIds {
    Auth,
    Label,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("basepair: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), basepair_core::BasepairError> {
    let config_options = match &cli.config {
        Some(path) => load_config(path)?,
        None => Options::default(),
    };

    let overrides = PartialOptions {
        chain_filter: (!cli.chain_filter.is_empty()).then(|| cli.chain_filter.iter().cloned().collect::<BTreeSet<_>>()),
        cif_ids: cli.cif_ids.map(|c| match c {
            CliCifIds::Auth => CifIdScheme::Auth,
            CliCifIds::Label => CifIdScheme::Label,
        }),
        nmr_model: cli.nmr_model,
        chain_id_truncate: cli.chain_id_truncate.then_some(true),
        resolution_max: cli.resolution_max,
    };
    let options = config_options.merge(overrides);

    log::debug!("loading structure from {}", cli.input.display());
    let loaded = adapter::load(&cli.input, &options)?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let core = analyse(&loaded.structure, &options, &mut diagnostics)?;
    for diagnostic in &diagnostics {
        log::debug!("{diagnostic:?}");
    }

    let output = AnalysisOutput {
        schema_version: 1,
        source: Source { ..loaded.source },
        options,
        core,
    };

    write_output(&cli, &output)
}

fn load_config(path: &PathBuf) -> Result<Options, basepair_core::BasepairError> {
    let text = fs::read_to_string(path).map_err(|source| adapter::to_basepair_error(path, source))?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&text).map_err(|e| basepair_core::BasepairError::StructureParse {
            path: path.clone(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&text).map_err(|e| basepair_core::BasepairError::StructureParse {
            path: path.clone(),
            reason: e.to_string(),
        })
    }
}

fn write_output(cli: &Cli, output: &AnalysisOutput) -> Result<(), basepair_core::BasepairError> {
    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|source| adapter::to_basepair_error(path, source))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    let result = match cli.format {
        Format::Text => emit::write_text(output, &mut sink),
        Format::Json => emit::write_json(output, &mut sink),
        Format::Both => emit::write_text(output, &mut sink).and_then(|_| emit::write_json(output, &mut sink)),
    };

    result.map_err(|source| adapter::to_basepair_error(cli.output.as_ref().unwrap_or(&cli.input), source))
}
