//! # Nokia phonebook.ib exporter

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre;
use env_logger::Env;
use log::LevelFilter;
use nokia_pb::export::{export, export_lossy};

#[derive(Parser)]
/// Options for exporting a phonebook.ib backup as vCard 3.0
struct Opts {
    /// The phonebook file to read
    infile: PathBuf,
    /// The vCard file to write
    outfile: PathBuf,
    /// Skip entries that fail to decode instead of aborting
    #[clap(long)]
    skip_invalid: bool,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env(Env::new().filter("IB_EXPORT_LOG"))
        .init();
    let opts = Opts::parse();

    let buffer = std::fs::read(&opts.infile)?;
    let mut out = BufWriter::new(File::create(&opts.outfile)?);

    let exported = if opts.skip_invalid {
        export_lossy(&buffer, &mut out)?
    } else {
        export(&buffer, &mut out)?
    };
    out.flush()?;

    println!("Exported {} entries.", exported);
    Ok(())
}
