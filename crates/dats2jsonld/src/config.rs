use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{bail, Dats2JsonLdError, Dats2JsonLdResult};

/// dats2jsonld config.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// The path of the config.
    #[serde(skip)]
    path: PathBuf,

    /// Output options.
    #[serde(default)]
    pub(crate) output: Output,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub(crate) struct Output {
    /// The number of spaces used to indent the JSON-LD document.
    pub(crate) indent: usize,

    /// The extension of a JSON-LD output file.
    pub(crate) extension: String,

    /// The extension of an output file containing the `<script>`
    /// element.
    pub(crate) script_extension: String,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            indent: 4,
            extension: "jsonld".into(),
            script_extension: "html".into(),
        }
    }
}

impl Config {
    /// Loads an existing config from a path.
    pub(crate) fn from_path<P>(path: P) -> Dats2JsonLdResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().into();
        let content = fs::read_to_string(&path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.path = path;
        config.validate()?;

        Ok(config)
    }

    /// Returns the location of the config, if it was loaded from a
    /// file.
    #[inline]
    pub(crate) fn path(&self) -> Option<&Path> {
        if self.path.as_os_str().is_empty() {
            None
        } else {
            Some(self.path.as_path())
        }
    }

    fn validate(&self) -> Dats2JsonLdResult<()> {
        let Output {
            extension,
            script_extension,
            ..
        } = &self.output;

        for ext in [extension, script_extension] {
            if ext.is_empty() || ext.contains(['.', '/']) {
                bail!("invalid output extension '{ext}'");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    type TestResult = anyhow::Result<()>;

    fn config_file(content: &str) -> anyhow::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn config_default() {
        let config = Config::default();
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.output.extension, "jsonld");
        assert_eq!(config.output.script_extension, "html");
        assert!(config.path().is_none());
    }

    #[test]
    fn config_from_path() -> TestResult {
        let file = config_file("[output]\nindent = 2\n")?;
        let config = Config::from_path(file.path())?;

        assert_eq!(config.output.indent, 2);
        assert_eq!(config.output.extension, "jsonld");
        assert_eq!(config.path(), Some(file.path()));

        let file = config_file("")?;
        let config = Config::from_path(file.path())?;
        assert_eq!(config.output.indent, 4);

        Ok(())
    }

    #[test]
    fn config_invalid() -> TestResult {
        let file = config_file("[output]\nindent = \"four\"\n")?;
        assert!(matches!(
            Config::from_path(file.path()),
            Err(Dats2JsonLdError::Toml(_))
        ));

        let file = config_file("[output]\nextension = \"\"\n")?;
        assert!(matches!(
            Config::from_path(file.path()),
            Err(Dats2JsonLdError::Other(_))
        ));

        assert!(matches!(
            Config::from_path("/does/not/exist.toml"),
            Err(Dats2JsonLdError::IO(_))
        ));

        Ok(())
    }
}
