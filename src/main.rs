//! zawgyi-correction: reorder Myanmar syllables typed on a Zawgyi-style layout
//!
//! Reads standard input line by line and writes the corrected lines.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use zawgyi_correction::config::{load_config, load_config_from};
use zawgyi_correction::{process, word_correction, CorrectionConfig};

/// Command line options
struct Options {
    /// Print the raw 17-slot code stream instead of text
    hex: bool,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        hex: false,
        config: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hex" => options.hex = true,
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                options.config = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn hex_line(line: &str) -> String {
    let codes: Vec<i32> = line.encode_utf16().map(i32::from).collect();
    process(&codes)
        .as_slice()
        .iter()
        .map(|code| format!("{:04X}", code))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(options: &Options, config: &CorrectionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = line?;
        if options.hex {
            writeln!(out, "{}", hex_line(&line))?;
        } else {
            writeln!(out, "{}", word_correction(&line, config))?;
        }
    }
    out.flush()
}

fn main() {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: zawgyi-correction [--hex] [--config <path>]");
            std::process::exit(2);
        }
    };

    let config = match &options.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    log::debug!("config: {:?}", config);

    if let Err(e) = run(&options, &config) {
        log::error!("correction failed: {}", e);
        std::process::exit(1);
    }
}
