use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::dats::DatsDocument;
use crate::prelude::*;
use crate::schema::Dataset;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// A plain JSON-LD document.
    #[default]
    JsonLd,
    /// A `<script>` element containing the JSON-LD document.
    Script,
}

/// A DATS document read from a file.
#[derive(Debug)]
pub(crate) struct Document {
    path: PathBuf,
    dats: DatsDocument,
}

impl Document {
    /// Reads and parses the DATS file at `path`.
    pub(crate) fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Dats2JsonLdResult<Self> {
        let path = path.as_ref().to_path_buf();
        let reader = BufReader::new(File::open(&path)?);
        let dats = DatsDocument::from_reader(reader)?;

        Ok(Self { path, dats })
    }

    #[inline]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub(crate) fn into_dats(self) -> DatsDocument {
        self.dats
    }

    /// Returns the location of the output file, which is placed next
    /// to the DATS file. The extension of the DATS file is replaced
    /// by the extension configured for the given format.
    pub(crate) fn output_path(
        &self,
        format: Format,
        config: &Config,
    ) -> Dats2JsonLdResult<PathBuf> {
        output_path(&self.path, format, config)
    }
}

pub(crate) fn output_path<P: AsRef<Path>>(
    path: P,
    format: Format,
    config: &Config,
) -> Dats2JsonLdResult<PathBuf> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        bail!("invalid filename '{}'", path.display());
    }

    let extension = match format {
        Format::JsonLd => &config.output.extension,
        Format::Script => &config.output.script_extension,
    };

    Ok(path.with_extension(extension))
}

/// Renders the dataset in the given format.
pub(crate) fn render(
    dataset: &Dataset,
    format: Format,
    indent: usize,
) -> Dats2JsonLdResult<String> {
    match format {
        Format::JsonLd => dataset.to_json_string(indent),
        Format::Script => dataset.to_script_tag(indent),
    }
}

/// Writes the output file at once.
#[inline]
pub(crate) fn write_output<P: AsRef<Path>>(
    path: P,
    contents: &str,
) -> Dats2JsonLdResult<()> {
    fs::write(path, contents)?;
    Ok(())
}
