//! Conversion of DATS documents into schema.org JSON-LD.
//!
//! The resulting [Dataset] is meant to be embedded into the HTML page
//! of the dataset, so that search engines are able to recognize the
//! page as a dataset description. The snippet can be checked with
//! <https://search.google.com/test/rich-results>.

use crate::dats::{self, Creator, DatsDocument};
use crate::prelude::*;
use crate::schema::{
    AffiliatedOrganization, Agent, Dataset, License, Organization,
    Person, SCHEMA_ORG_CONTEXT,
};

/// The name of a person, if neither a full name nor the first and last
/// name are available. schema.org requires a `Person` to have a name.
pub(crate) const NAME_NOT_PROVIDED: &str = "Name is not provided";

#[inline]
fn require<T>(value: Option<T>, field: &str) -> Dats2JsonLdResult<T> {
    value.ok_or_else(|| Dats2JsonLdError::missing(field))
}

/// Maps a DATS document to a schema.org `Dataset`.
///
/// The conversion is all-or-nothing: if a required field is missing,
/// the error names the field and no dataset is returned.
pub(crate) fn map(dats: DatsDocument) -> Dats2JsonLdResult<Dataset> {
    let name = require(dats.title, "title")?;
    let description = require(dats.description, "description")?;
    let version = require(dats.version, "version")?;

    let license = require(dats.licenses, "licenses")?
        .into_iter()
        .enumerate()
        .map(|(i, license)| {
            require(license.name, &format!("licenses[{i}].name"))
                .map(License::from_name)
        })
        .collect::<Dats2JsonLdResult<Vec<_>>>()?;

    let keywords = require(dats.keywords, "keywords")?
        .into_iter()
        .enumerate()
        .map(|(i, keyword)| {
            require(keyword.value, &format!("keywords[{i}].value"))
        })
        .collect::<Dats2JsonLdResult<Vec<_>>>()?;

    let creator = require(dats.creators, "creators")?
        .into_iter()
        .enumerate()
        .map(|(i, creator)| match creator {
            Creator::Organization(dats::Organization { name }) => {
                require(name, &format!("creators[{i}].name"))
                    .map(|name| Agent::Organization(Organization { name }))
            }
            Creator::Person(person) => {
                map_person(person, i).map(Agent::Person)
            }
        })
        .collect::<Dats2JsonLdResult<Vec<_>>>()?;

    Ok(Dataset {
        context: SCHEMA_ORG_CONTEXT,
        kind: "Dataset",
        name,
        description,
        version,
        license,
        keywords,
        creator,
    })
}

fn map_person(
    person: dats::Person,
    idx: usize,
) -> Dats2JsonLdResult<Person> {
    let name = if let Some(full_name) = person.full_name {
        full_name
    } else if let (Some(first_name), Some(last_name)) =
        (&person.first_name, &person.last_name)
    {
        format!("{first_name} {last_name}")
    } else {
        NAME_NOT_PROVIDED.to_string()
    };

    let affiliation = person
        .affiliations
        .map(|affiliations| {
            affiliations
                .into_iter()
                .enumerate()
                .map(|(i, affiliation)| {
                    let field =
                        format!("creators[{idx}].affiliations[{i}].name");
                    require(affiliation.name, &field).map(|name| {
                        AffiliatedOrganization::Organization(
                            Organization { name },
                        )
                    })
                })
                .collect::<Dats2JsonLdResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(Person {
        given_name: person.first_name,
        family_name: person.last_name,
        email: person.email,
        name,
        affiliation,
    })
}
