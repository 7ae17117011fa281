mod input;
mod model;
mod panels;
mod pipeline;
mod report;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::input::load_dataset;
use crate::model::thresholds::{AssayType, ProtocolVersion, ThresholdProfile};
use crate::pipeline::{PipelineOptions, run_pipeline, stage7_assemble::run_stage7};
use crate::report::{
    SummaryContext, build_summary, json::write_summary_json, table::write_result_table,
    text::render_summary_text,
};

/// Molecular risk stratification of hepatoblastoma tumor samples.
#[derive(Parser, Debug)]
#[command(name = "hb-mrs")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one dataset and write the result table plus summary reports
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input spreadsheet (.xlsx) or delimited table (.csv/.tsv)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for results
    #[arg(short, long, default_value = "./out")]
    out: PathBuf,

    /// Assay the expression values come from; selects the C2 score cutoffs
    #[arg(long, value_enum, default_value_t = AssayType::Nanostring)]
    assay: AssayType,

    /// Classification rule revision
    #[arg(long, value_enum, default_value_t = ProtocolVersion::V3)]
    protocol: ProtocolVersion,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => run(args),
    };

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset(&args.input)?;
    let thresholds = ThresholdProfile::for_version(args.protocol);
    let options = PipelineOptions {
        assay: args.assay,
        thresholds,
    };

    let calls = run_pipeline(&dataset, &options)?;
    let rows = run_stage7(&calls);

    fs::create_dir_all(&args.out)?;
    write_result_table(&rows, &args.out.join("classification_results.csv"))?;

    let summary = build_summary(
        &calls,
        &SummaryContext {
            protocol: protocol_name(args.protocol),
            assay: assay_name(args.assay),
            n_features: dataset.n_features(),
            n_non_tumor_samples: dataset.non_tumor_columns().len(),
        },
    );
    write_summary_json(&summary, &args.out.join("summary.json"))?;
    fs::write(args.out.join("summary.txt"), render_summary_text(&summary))?;

    info!("results written to {}", args.out.display());
    Ok(())
}

fn protocol_name(version: ProtocolVersion) -> &'static str {
    match version {
        ProtocolVersion::V2 => "v2",
        ProtocolVersion::V3 => "v3",
    }
}

fn assay_name(assay: AssayType) -> &'static str {
    match assay {
        AssayType::RnaSeq => "RNA-seq",
        AssayType::Nanostring => "Nanostring",
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
