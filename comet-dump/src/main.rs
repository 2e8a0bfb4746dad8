use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use comet::liu::{self, ConfigError, LineConfig, WriteLog};
use comet::{LineBuildOut, LineMode};
use log::{debug, error, info};
use thiserror::Error;

use crate::output_format::OutputFormat;

mod output_format;

/// Inspect the COMET line interface tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output layout.
    #[arg(long, value_enum, default_value_t, global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every line build-out setting.
    List,
    /// Print the transmit waveform for a line build-out, given by name (`sh3`) or code (`7`).
    Waveform { lbo: LineBuildOut },
    /// Print the receive equalizer sweep for a line mode (`t1` or `e1`).
    Equalizer { mode: LineMode },
    /// Print the writes that bring up the line interface.
    Program {
        /// Line build-out to load.
        #[arg(long)]
        lbo: LineBuildOut,
        /// Line mode, defaults to the mode of the line build-out.
        #[arg(long)]
        mode: Option<LineMode>,
    },
}

#[derive(Debug, Error)]
enum DumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error writing output: {0}")]
    Io(#[from] io::Error),
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), DumpError> {
    match args.command {
        Command::List => args.format.write_list(out)?,
        Command::Waveform { lbo } => {
            if !lbo.is_supported() {
                info!("{} is not supported, only its amplitude is defined", lbo);
            }
            args.format.write_waveform(out, lbo)?
        }
        Command::Equalizer { mode } => args.format.write_equalizer(out, mode)?,
        Command::Program { lbo, mode } => {
            let config = LineConfig::new(mode.unwrap_or(lbo.mode()), lbo)?;
            let mut log = WriteLog::new();
            liu::program_line_interface(&mut log, config);
            debug!("Recorded {} writes", log.writes().len());
            args.format.write_program(out, log.writes())?
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
