use std::{
    path::{Path, PathBuf},
    thread,
};

use clap::{Parser, Subcommand};
use log::{info, warn};
use pitwall::{
    AccelerationConfig, AccelerationSummary, Accelerations, AnalysisConfig, DerivativeMethod,
    PitwallError, TelemetryTable, compute_accelerations_with, telemetry::load_telemetry_jsonl,
    writer::write_accelerations,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute acceleration traces for a single lap
    Accel {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        method: Option<DerivativeMethod>,
    },
    /// Compare peak accelerations between two laps
    Compare {
        #[arg(short, long)]
        first: PathBuf,

        #[arg(short, long)]
        second: PathBuf,

        #[arg(short, long, value_enum)]
        method: Option<DerivativeMethod>,
    },
}

fn analyze_lap(
    input: &Path,
    config: &AccelerationConfig,
) -> Result<(TelemetryTable, Accelerations), PitwallError> {
    let telemetry = load_telemetry_jsonl(input)?;
    let accelerations = compute_accelerations_with(&telemetry, config)?;
    Ok((telemetry, accelerations))
}

fn print_summary(label: &str, summary: &AccelerationSummary) {
    println!("{}", label);
    println!(
        "  peak braking   {:>6.2} g @ {:.0} m",
        summary.peak_braking.g, summary.peak_braking.distance_m
    );
    println!(
        "  peak traction  {:>6.2} g @ {:.0} m",
        summary.peak_traction.g, summary.peak_traction.distance_m
    );
    println!(
        "  peak lateral   {:>6.2} g @ {:.0} m",
        summary.peak_lateral.g, summary.peak_lateral.distance_m
    );
}

fn accel(
    input: &Path,
    output: Option<&Path>,
    config: &AccelerationConfig,
) -> Result<(), PitwallError> {
    let (telemetry, accelerations) = analyze_lap(input, config)?;

    if let Some(summary) = accelerations.summarize(telemetry.distance()) {
        print_summary(&format!("{}", input.display()), &summary);
    }

    if let Some(output_file) = output {
        write_accelerations(output_file, &accelerations.samples(telemetry.distance()))?;
        info!(
            "Wrote {} acceleration samples to {:?}",
            accelerations.len(),
            output_file
        );
    }
    Ok(())
}

fn compare(first: &Path, second: &Path, config: &AccelerationConfig) -> Result<(), PitwallError> {
    // the two laps share nothing, analyse them side by side
    let (first_lap, second_lap) = thread::scope(|s| {
        let first_handle = s.spawn(|| analyze_lap(first, config));
        let second_handle = s.spawn(|| analyze_lap(second, config));
        (
            first_handle.join().expect("lap analysis thread panicked"),
            second_handle.join().expect("lap analysis thread panicked"),
        )
    });

    for (path, lap) in [(first, first_lap?), (second, second_lap?)] {
        let (telemetry, accelerations) = lap;
        match accelerations.summarize(telemetry.distance()) {
            Some(summary) => print_summary(&format!("{}", path.display()), &summary),
            None => warn!("No acceleration data for {:?}", path),
        }
    }
    Ok(())
}

fn main() {
    colog::init();

    let cli = Args::parse();
    let mut config = AnalysisConfig::from_local_file().unwrap_or_default();

    match &cli.command {
        Commands::Accel {
            input,
            output,
            method,
        } => {
            if let Some(method) = method {
                config.acceleration.method = *method;
            }
            accel(input, output.as_deref(), &config.acceleration)
                .expect("Error while computing accelerations");
        }
        Commands::Compare {
            first,
            second,
            method,
        } => {
            if let Some(method) = method {
                config.acceleration.method = *method;
            }
            compare(first, second, &config.acceleration).expect("Error while comparing laps");
        }
    };
}
