use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use dbg_assembler::cli_main::{assemble_settings, Cli, Commands};
use dbg_assembler::error::{AssemblyError, Result};
use dbg_assembler::pipeline::assemble_reads;
use dbg_assembler::stats::calculate_stats;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Assemble { .. } => {
            let (source, config) = assemble_settings(command)?;
            let report = assemble_reads(&source, &config)?;
            println!("{:.2}\t{}", report.elapsed.as_secs_f64(), report.stats.n50);
        }

        Commands::Stats { input, format } => {
            info!("Calculating assembly statistics for: {}", input.display());
            let stats = calculate_stats(input)?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
                "tsv" => {
                    println!("contigs\ttotal_len\tavg_len\tlongest\tn50");
                    println!(
                        "{}\t{}\t{:.2}\t{}\t{}",
                        stats.total_contigs, stats.total_length, stats.average_length, stats.longest, stats.n50
                    );
                }
                other => return Err(AssemblyError::Config(format!("unsupported format: {}", other))),
            }
        }
    }
    Ok(())
}
