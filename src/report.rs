use std::io::Write;

use chrono::{TimeZone, Utc};
use log::debug;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::disassemble::disassemble_default;
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use crate::witness::classify;

/// What was found in one transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    pub txid: Option<String>,
    pub input: usize,
    pub block_time: Option<String>,
    pub compatible: bool,
    pub leaf_version: Option<String>,
    pub script_hex: Option<String>,
    pub asm: Option<String>,
    pub error: Option<String>,
}

fn format_block_time(timestamp: i64) -> Option<String> {
    let datetime = Utc.timestamp_opt(timestamp, 0).single()?;
    Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
}

pub fn inspect_input(tx: &Transaction, index: usize) -> Result<InputReport> {
    let witness = tx.witnesses.get(index).ok_or(Error::InputIndexOutOfRange {
        index,
        len: tx.input_count(),
    })?;
    let mut report = InputReport {
        txid: tx.txid.clone(),
        input: index,
        block_time: tx.block_time.and_then(format_block_time),
        compatible: false,
        leaf_version: None,
        script_hex: None,
        asm: None,
        error: None,
    };

    let spend = match witness.as_deref().and_then(classify) {
        Some(spend) => spend,
        None => {
            debug!("input {} is not a tapscript spend", index);
            return Ok(report);
        }
    };

    let disassembly = disassemble_default(spend.script);
    report.compatible = true;
    report.leaf_version = Some(format!("0x{:02x}", spend.leaf_version));
    report.script_hex = Some(hex::encode(spend.script));
    report.asm = Some(disassembly.listing());
    report.error = disassembly.error.map(|e| e.to_string());
    Ok(report)
}

/// Reports every input, or just `only` when it is given.
pub fn inspect_transaction(tx: &Transaction, only: Option<usize>) -> Result<Vec<InputReport>> {
    match only {
        Some(index) => Ok(vec![inspect_input(tx, index)?]),
        None => (0..tx.input_count()).map(|index| inspect_input(tx, index)).collect(),
    }
}

fn write_text<W: Write>(reports: &[InputReport], writer: &mut W) -> Result<()> {
    for (n, report) in reports.iter().enumerate() {
        if n > 0 {
            writeln!(writer)?;
        }
        if let Some(txid) = &report.txid {
            writeln!(writer, "# txid {}", txid)?;
        }
        if let Some(block_time) = &report.block_time {
            writeln!(writer, "# block time {}", block_time)?;
        }
        match &report.leaf_version {
            Some(leaf_version) => writeln!(writer, "# input {} leaf version {}", report.input, leaf_version)?,
            None => {
                writeln!(writer, "# input {} is not a tapscript spend", report.input)?;
                continue;
            }
        }
        if let Some(asm) = report.asm.as_deref().filter(|asm| !asm.is_empty()) {
            writeln!(writer, "{}", asm)?;
        }
        if let Some(error) = &report.error {
            writeln!(writer, "# error: {}", error)?;
        }
    }
    Ok(())
}

pub fn write_reports<W: Write>(reports: &[InputReport], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(reports, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for report in reports {
                csv_writer.serialize(report)?;
            }
            csv_writer.flush()?;
            Ok(())
        }
    }
}
