use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Disassembles the tapscript of script-path taproot inputs.
///
/// The input holds either a verbose JSON transaction (getrawtransaction with
/// verbosity 2) or a raw transaction in hex. Set RUST_LOG=debug to see
/// classification decisions.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tapscript-disasm", version)]
pub struct Config {
    /// Transaction file, standard input when omitted or `-`.
    pub path: Option<PathBuf>,

    /// Only inspect this input.
    #[arg(short, long)]
    pub input: Option<usize>,

    #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Config {
    /// Reads the transaction text from the configured file or stdin.
    pub fn read_input(&self) -> Result<String> {
        match self.path.as_deref().filter(|path| path.as_os_str() != "-") {
            Some(path) => fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display())),
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).context("unable to read stdin")?;
                Ok(text)
            }
        }
    }
}
