//! dump-der: list the elements of a BER/DER file.
//!
//! Reads a file (or stdin), strips PEM armor if present, and prints one line per element.

use ber_dump::ber::{Encoding, MAX_RECURSION};
use ber_dump::print::PrettyPrinterFlag;
use ber_dump::{dump, WalkConfig};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// PEM if the input contains armor, raw binary otherwise
    Auto,
    Pem,
    Der,
}

/// Dump the structure of BER/DER encoded data.
#[derive(Debug, Parser)]
#[command(name = "dump-der", version, about)]
struct Args {
    /// Input file (stdin if omitted or `-`).
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Accept BER encodings, including indefinite lengths (default).
    #[arg(long, conflicts_with = "der")]
    ber: bool,

    /// Reject indefinite lengths.
    #[arg(long)]
    der: bool,

    /// Input format.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    inform: InputFormat,

    /// Maximum nesting depth.
    #[arg(long, default_value_t = MAX_RECURSION)]
    max_depth: usize,

    /// Indent descriptions by nesting depth.
    #[arg(short, long)]
    indent: bool,

    /// Show class and tag number of non-universal elements.
    #[arg(long)]
    show_class: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn init_tracing(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    fn config(&self) -> WalkConfig {
        let encoding = if self.der && !self.ber {
            Encoding::Der
        } else {
            Encoding::Ber
        };
        let mut config = WalkConfig::default()
            .with_encoding(encoding)
            .with_max_depth(self.max_depth);
        if self.indent {
            config.set_flag(PrettyPrinterFlag::Indent);
        }
        if self.show_class {
            config.set_flag(PrettyPrinterFlag::ShowClass);
        }
        config
    }

    fn read_input(&self) -> io::Result<Vec<u8>> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path),
            _ => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn looks_like_pem(data: &[u8]) -> bool {
    const BEGIN: &[u8] = b"-----BEGIN ";
    data.windows(BEGIN.len()).any(|w| w == BEGIN)
}

/// A buffer to dump, with its PEM label if it came from a PEM block
type Block = (Option<String>, Vec<u8>);

fn decode_input(data: Vec<u8>, format: InputFormat) -> Result<Vec<Block>, String> {
    let is_pem = match format {
        InputFormat::Pem => true,
        InputFormat::Der => false,
        InputFormat::Auto => looks_like_pem(&data),
    };
    if !is_pem {
        return Ok(vec![(None, data)]);
    }
    let blocks =
        pem::parse_many(&data).map_err(|e| format!("failed to decode PEM block: {}", e))?;
    if blocks.is_empty() {
        return Err("failed to decode PEM block".to_string());
    }
    Ok(blocks
        .into_iter()
        .map(|p| (Some(p.tag().to_string()), p.into_contents()))
        .collect())
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.init_tracing();

    let data = match args.read_input() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let buffers = match decode_input(data, args.inform) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = args.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let multiple = buffers.len() > 1;
    for (label, buf) in &buffers {
        if let (true, Some(label)) = (multiple, label) {
            if let Err(e) = writeln!(out, "-----{}-----", label) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        if let Err(e) = dump(buf, &config, &mut out) {
            let _ = out.flush();
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
