pub(crate) use crate::config::Config;
pub(crate) use crate::error::{bail, Dats2JsonLdError, Dats2JsonLdResult};
