use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::document::Format;

/// Convert a DATS dataset description into a schema.org JSON-LD
/// snippet, which can be embedded into the HTML page of the dataset.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, max_term_width = 72)]
pub(crate) struct Args {
    /// The DATS file to convert. The result is written next to the
    /// file, whereby the extension `.json` is replaced by `.jsonld`.
    #[arg(short, long, value_name = "filename")]
    pub(crate) file: Option<OsString>,

    /// Write the result into `filename` instead of next to the DATS
    /// file.
    #[arg(short, long, value_name = "filename")]
    pub(crate) output: Option<PathBuf>,

    /// If set, the result will be written to the standard output
    /// (stdout).
    #[arg(long, conflicts_with = "output")]
    pub(crate) stdout: bool,

    /// The output format.
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: Format,

    /// The number of spaces used for indentation. This option takes
    /// precedence over the value of the config file (default: 4).
    #[arg(long, value_name = "n")]
    pub(crate) indent: Option<usize>,

    /// Read options from the given TOML config file.
    #[arg(short, long, value_name = "filename")]
    pub(crate) config: Option<PathBuf>,

    /// Run verbosely. Print additional progress information to the
    /// standard error stream. This option conflicts with the
    /// `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Operate quietly; only errors are reported. This option
    /// conflicts with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}
