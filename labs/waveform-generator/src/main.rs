//! Drives the lookup-table generator from the command line.
//!
//! `tables` prints the four lookup tables, `stream` steps the generator one
//! clock cycle at a time and prints what appears on its outputs.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hound::{SampleFormat, WavSpec, WavWriter};
use wavelut_dsp::{FunctionType, GeneratorConfig, Output};

#[derive(Parser)]
#[command(name = "waveform-generator")]
#[command(about = "Lookup-table waveform generator lab")]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lookup tables
    Tables {
        /// Number of entries per table
        #[arg(short = 'n', long, default_value = "1024")]
        size: usize,
    },

    /// Step the generator and print its outputs
    Stream {
        /// Number of entries per table
        #[arg(short = 'n', long, default_value = "1024")]
        size: usize,

        /// Function type (exp, sinc, rect)
        #[arg(short, long, default_value = "exp")]
        function: FunctionType,

        /// Number of clock cycles to run
        #[arg(short, long, default_value = "1024")]
        ticks: usize,

        /// Assert reset on these cycles (1-indexed, repeatable)
        #[arg(short, long = "reset-at")]
        reset_at: Vec<usize>,

        /// Also record the I/Q stream to a 2-channel WAV file
        #[arg(short, long)]
        wav: Option<PathBuf>,

        /// Sample rate written into the WAV header
        #[arg(short, long, default_value = "8000")]
        sample_rate: u32,

        /// Don't print the per-cycle trace
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tables { size } => print_tables(size),
        Commands::Stream {
            size,
            function,
            ticks,
            reset_at,
            wav,
            sample_rate,
            quiet,
        } => {
            let outputs = stream(GeneratorConfig::new(size, function), ticks, &reset_at, quiet)?;
            if let Some(path) = wav {
                to_wav_file(&path, sample_rate, &outputs)?;
            }
            Ok(())
        }
    }
}

fn print_tables(size: usize) -> Result<()> {
    // Tables don't depend on the function type; any will do for validation.
    let stepper = GeneratorConfig::new(size, FunctionType::Exp)
        .build()
        .context("invalid generator configuration")?;
    let luts = stepper.luts();

    println!("index\tcos\tsin\tsinc\trect");
    for i in 0..luts.len() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i,
            luts.cos()[i],
            luts.sin()[i],
            luts.sinc()[i],
            luts.rect()[i]
        );
    }
    Ok(())
}

fn stream(
    config: GeneratorConfig,
    ticks: usize,
    reset_at: &[usize],
    quiet: bool,
) -> Result<Vec<Output>> {
    let mut stepper = config
        .build()
        .context("invalid generator configuration")?;
    let resets: BTreeSet<usize> = reset_at.iter().copied().collect();

    tracing::info!(
        table_size = config.table_size,
        function = %config.function,
        ticks,
        resets = resets.len(),
        "streaming"
    );

    if !quiet {
        println!("tick\tindex\treal\timag\tvalid\tlast");
    }

    let mut outputs = Vec::with_capacity(ticks);
    let mut wraps = 0;
    for tick in 1..=ticks {
        let index = stepper.index();
        let out = stepper.tick(resets.contains(&tick));
        if out.last {
            wraps += 1;
        }
        if !quiet {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                tick, index, out.real, out.imag, out.valid as u8, out.last as u8
            );
        }
        outputs.push(out);
    }

    tracing::info!(wraps, final_index = stepper.index(), "done");
    Ok(outputs)
}

fn to_wav_file(path: &Path, sample_rate: u32, outputs: &[Output]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = WavWriter::new(
        BufWriter::new(file),
        WavSpec {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        },
    )
    .context("cannot write wav file")?;

    for out in outputs {
        let sample = out.sample();
        writer
            .write_sample(sample.re)
            .context("failed to write sample")?;
        writer
            .write_sample(sample.im)
            .context("failed to write sample")?;
    }
    writer.finalize().context("failed to finalize wav file")?;

    tracing::info!(path = %path.display(), samples = outputs.len(), "wrote wav file");
    Ok(())
}
