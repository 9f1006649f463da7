//! b24-text: command line ARIB STD-B24 text transcoder.
//!
//! Decodes hex dumps of SI strings (as pulled out of EIT/SDT payloads)
//! into readable text, encodes text back into the 8-bit code, and
//! checks whether a string is representable at all.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, warn};
use serde::Serialize;

/// b24-text - ARIB STD-B24 text transcoder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex-encoded byte stream to text
    Decode {
        /// Hex bytes, whitespace allowed; read from stdin when omitted
        hex: Option<String>,

        /// Print a JSON object with the completeness flag
        #[arg(long)]
        json: bool,
    },
    /// Encode text to a hex-encoded byte stream
    Encode {
        /// Text to encode; read from stdin when omitted
        text: Option<String>,
    },
    /// Check whether text is representable (exit status 0/1)
    Check {
        /// Text to check; read from stdin when omitted
        text: Option<String>,
    },
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    text: &'a str,
    complete: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Decode { hex, json } => {
            let data = parse_hex(&arg_or_stdin(hex)?)?;
            let decoded = b24_charset::decode(&data);
            if json {
                let report = DecodeReport {
                    text: &decoded.text,
                    complete: decoded.complete,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{}", decoded.text);
            }
            if decoded.complete {
                Ok(ExitCode::SUCCESS)
            } else {
                warn!("parts of the stream could not be decoded");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Encode { text } => {
            let text = arg_or_stdin(text)?;
            let bytes = b24_charset::encode(text.trim_end_matches('\n'))?;
            println!("{}", to_hex(&bytes));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { text } => {
            let text = arg_or_stdin(text)?;
            if b24_charset::can_encode(text.trim_end_matches('\n')) {
                println!("encodable");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("not encodable");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn arg_or_stdin(arg: Option<String>) -> std::io::Result<String> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("input contains non-hex characters".to_string());
    }
    if digits.len() % 2 != 0 {
        return Err("odd number of hex digits".to_string());
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
