pub(crate) type Dats2JsonLdResult<T> = Result<T, Dats2JsonLdError>;

macro_rules! bail {
    ($($arg:tt)*) => {{
        return Err(Dats2JsonLdError::Other(format!($($arg)*)));
    }};
}

pub(crate) use bail;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Dats2JsonLdError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// A required DATS key is absent. The value is the location of
    /// the key, e.g. `keywords` or `licenses[1].name`.
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("{0}")]
    Other(String),
}

impl Dats2JsonLdError {
    #[inline]
    pub(crate) fn other<T: ToString>(s: T) -> Self {
        Self::Other(s.to_string())
    }

    #[inline]
    pub(crate) fn missing<T: ToString>(field: T) -> Self {
        Self::MissingField(field.to_string())
    }
}
