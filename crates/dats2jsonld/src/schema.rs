use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::prelude::*;

pub(crate) const SCHEMA_ORG_CONTEXT: &str = "https://schema.org/";

/// A schema.org `Dataset` node.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct Dataset {
    #[serde(rename = "@context")]
    pub(crate) context: &'static str,

    #[serde(rename = "@type")]
    pub(crate) kind: &'static str,

    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) version: String,
    pub(crate) license: Vec<License>,
    pub(crate) keywords: Vec<String>,
    pub(crate) creator: Vec<Agent>,
}

/// The license of a dataset is either an URL or a `CreativeWork`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum License {
    Url(String),
    CreativeWork(CreativeWork),
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub(crate) enum CreativeWork {
    CreativeWork { name: String },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub(crate) enum Agent {
    Organization(Organization),
    Person(Person),
}

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct Organization {
    pub(crate) name: String,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,

    pub(crate) name: String,

    // An absent list stays absent; a present but empty list of
    // affiliations is serialized as an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) affiliation: Option<Vec<AffiliatedOrganization>>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub(crate) enum AffiliatedOrganization {
    Organization(Organization),
}

impl License {
    /// Creates a license from a DATS license name. Names starting
    /// with `http` are taken as URLs.
    pub(crate) fn from_name<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        if name.starts_with("http") {
            Self::Url(name)
        } else {
            Self::CreativeWork(CreativeWork::CreativeWork { name })
        }
    }
}

impl Dataset {
    /// Serializes the dataset as JSON, indented by `indent` spaces.
    pub(crate) fn to_json_string(
        &self,
        indent: usize,
    ) -> Dats2JsonLdResult<String> {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);

        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| Dats2JsonLdError::other(e.to_string()))
    }

    /// Returns the dataset as `<script>` element, which can be placed
    /// into the `<head>` of a HTML page.
    pub(crate) fn to_script_tag(
        &self,
        indent: usize,
    ) -> Dats2JsonLdResult<String> {
        Ok(format!(
            "<script type=\"application/ld+json\">\n{}\n</script>\n",
            self.to_json_string(indent)?
        ))
    }
}
