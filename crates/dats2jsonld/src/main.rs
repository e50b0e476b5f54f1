use std::io::{stdout, ErrorKind, Write};
use std::process;

use clap::{CommandFactory, Parser};
use cli::Args;
use document::Document;
use log::{debug, error, info, LevelFilter};
use prelude::*;

mod cli;
mod config;
mod dats;
mod document;
mod error;
mod mapper;
mod prelude;
mod schema;

fn init_logger(args: &Args) {
    let level = if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Dats2JsonLdResult<()> {
    let Some(filename) = args.file.filter(|f| !f.is_empty()) else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = match args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    if let Some(path) = config.path() {
        debug!("using config {}", path.display());
    }

    let indent = args.indent.unwrap_or(config.output.indent);
    let doc = Document::from_path(&filename)?;
    debug!("read DATS document {}", doc.path().display());

    let output = match args.output {
        Some(path) => Some(path),
        None if args.stdout => None,
        None => Some(doc.output_path(args.format, &config)?),
    };

    let dataset = mapper::map(doc.into_dats())?;
    let contents = document::render(&dataset, args.format, indent)?;

    match output {
        Some(path) => {
            document::write_output(&path, &contents)?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(contents.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(&args);

    match run(args) {
        Ok(()) => process::exit(0),
        Err(Dats2JsonLdError::IO(e))
            if e.kind() == ErrorKind::BrokenPipe =>
        {
            process::exit(0)
        }
        Err(e) => {
            error!("error: {e:#}");
            process::exit(1);
        }
    }
}
