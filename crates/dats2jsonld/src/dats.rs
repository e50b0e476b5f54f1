use std::io::Read;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::prelude::*;

/// A dataset description in the DATS (Data Tag Suite) schema.
///
/// Only the keys needed to build a schema.org `Dataset` are modeled;
/// everything else (`dates`, `types`, `privacy`, ...) is ignored. The
/// required keys are kept optional at this layer, so that a missing
/// key is reported by the mapper together with its location instead
/// of as a generic parse error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DatsDocument {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) licenses: Option<Vec<License>>,
    pub(crate) keywords: Option<Vec<Keyword>>,
    pub(crate) creators: Option<Vec<Creator>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct License {
    /// Either an URL or a free-text license name.
    pub(crate) name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Keyword {
    pub(crate) value: Option<String>,
}

/// A creator of the dataset.
///
/// A record with a `name` key is an organization, any other record is
/// considered to be a person.
#[derive(Debug)]
pub(crate) enum Creator {
    Organization(Organization),
    Person(Person),
}

#[derive(Debug)]
pub(crate) struct Organization {
    pub(crate) name: Option<String>,
}

#[derive(Debug)]
pub(crate) struct Person {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) full_name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) affiliations: Option<Vec<Affiliation>>,
}

/// Reads the value of `key` from a creator record. An absent key is
/// read as `null`.
fn field<T>(record: &Map<String, Value>, key: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    let result = match record.get(key) {
        Some(value) => T::deserialize(value),
        None => T::deserialize(Value::Null),
    };

    result.map_err(|e| de::Error::custom(format_args!("invalid `{key}`: {e}")))
}

impl Creator {
    fn from_record(record: &Map<String, Value>) -> serde_json::Result<Self> {
        if record.contains_key("name") {
            return Ok(Self::Organization(Organization {
                name: field(record, "name")?,
            }));
        }

        Ok(Self::Person(Person {
            first_name: field(record, "firstName")?,
            last_name: field(record, "lastName")?,
            full_name: field(record, "fullName")?,
            email: field(record, "email")?,
            affiliations: field(record, "affiliations")?,
        }))
    }
}

impl<'de> Deserialize<'de> for Creator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_record(&record).map_err(de::Error::custom)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Affiliation {
    pub(crate) name: Option<String>,
}

impl DatsDocument {
    /// Creates a DATS document from a generic JSON value.
    pub(crate) fn from_value(value: Value) -> Dats2JsonLdResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Reads a DATS document from JSON encoded data.
    pub(crate) fn from_reader<R: Read>(
        reader: R,
    ) -> Dats2JsonLdResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn creator_variant_dispatch() -> TestResult {
        let dats = DatsDocument::from_value(json!({
            "creators": [
                { "name": "Test University" },
                { "firstName": "John", "lastName": "Doe" },
                {}
            ]
        }))?;

        let creators = dats.creators.unwrap();
        assert_eq!(creators.len(), 3);
        assert!(matches!(
            creators[0],
            Creator::Organization(Organization { name: Some(ref name) })
                if name == "Test University"
        ));
        assert!(matches!(
            creators[1],
            Creator::Person(Person {
                first_name: Some(ref first_name),
                last_name: Some(ref last_name),
                full_name: None,
                affiliations: None,
                ..
            }) if first_name == "John" && last_name == "Doe"
        ));
        assert!(matches!(creators[2], Creator::Person(_)));
        Ok(())
    }

    #[test]
    fn creator_name_key_decides_variant() -> TestResult {
        let dats = DatsDocument::from_value(json!({
            "creators": [
                { "name": null, "firstName": "A", "lastName": "B" },
                { "name": "Org1", "firstName": "A" }
            ]
        }))?;

        let creators = dats.creators.unwrap();
        assert!(matches!(
            creators[0],
            Creator::Organization(Organization { name: None })
        ));
        assert!(matches!(
            creators[1],
            Creator::Organization(Organization { name: Some(ref name) })
                if name == "Org1"
        ));

        Ok(())
    }

    #[test]
    fn creator_invalid_field() {
        let err = DatsDocument::from_value(json!({
            "creators": [{ "firstName": 1 }]
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid `firstName`: "));

        let err = DatsDocument::from_value(json!({
            "creators": [{ "name": 42 }]
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid `name`: "));

        let err = DatsDocument::from_reader(
            r#"{ "creators": [{ "affiliations": [{ "name": 1 }] }] }"#
                .as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, Dats2JsonLdError::Json(_)));
    }

    #[test]
    fn unknown_keys_are_ignored() -> TestResult {
        let dats = DatsDocument::from_reader(
            r#"{
                "title": "Test Dataset",
                "privacy": "Open Access",
                "types": [{ "information": { "value": "test" } }]
            }"#
            .as_bytes(),
        )?;

        assert_eq!(dats.title.as_deref(), Some("Test Dataset"));
        assert!(dats.keywords.is_none());
        Ok(())
    }

    #[test]
    fn invalid_value_type() {
        let result = DatsDocument::from_value(json!({ "title": 1 }));
        assert!(matches!(result, Err(Dats2JsonLdError::Json(_))));
    }
}
