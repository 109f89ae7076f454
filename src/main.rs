use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use tapscript_disasm::config::Config;
use tapscript_disasm::load_transaction;
use tapscript_disasm::report::{inspect_transaction, write_reports};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let text = config.read_input()?;
    let tx = load_transaction(&text).context("unable to decode transaction")?;
    info!(
        "transaction {} with {} input(s)",
        tx.txid.as_deref().unwrap_or("<unknown>"),
        tx.input_count()
    );

    let reports = inspect_transaction(&tx, config.input)?;
    let compatible = reports.iter().filter(|r| r.compatible).count();
    info!("{} of {} inspected input(s) are tapscript spends", compatible, reports.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_reports(&reports, config.format, &mut out)?;
    out.flush()?;

    Ok(())
}
