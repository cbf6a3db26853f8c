//! The contact record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rolodex_core::constants::DEFAULT_VERSION;
use serde::{Deserialize, Deserializer, Serialize};

use super::address::{Address, TypedAddress};
use super::entry::{Entry, OneOrMany};
use super::media::Media;
use super::scalar::Scalar;
use super::version::MajorVersion;
use crate::error::RfcResult;
use crate::rfc::vcard::build::serialize;

/// A contact record to be written as a vCard.
///
/// Fields mirror the JSON shape accepted by [`Contact::from_json`]
/// (`camelCase` keys). Multi-valued fields accept a single entry or a list.
/// Free-text fields accept numbers and booleans, rendered as text. An explicit
/// `null` reads the same as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Display version, e.g. `"3.0"`. Written verbatim on the VERSION line.
    pub version: String,

    pub formatted_name: Option<Scalar>,
    pub first_name: Option<Scalar>,
    pub middle_name: Option<Scalar>,
    pub last_name: Option<Scalar>,
    pub name_prefix: Option<Scalar>,
    pub name_suffix: Option<Scalar>,
    pub nickname: Option<Scalar>,
    pub gender: Option<Scalar>,
    pub uid: Option<Scalar>,
    pub birthday: Option<NaiveDate>,
    pub anniversary: Option<NaiveDate>,
    /// Marks the card as representing a company rather than a person.
    #[serde(deserialize_with = "null_as_default")]
    pub is_organization: bool,

    pub email: Option<OneOrMany<Entry>>,
    pub work_email: Option<OneOrMany<Entry>>,
    pub other_email: Option<OneOrMany<Entry>>,

    #[serde(deserialize_with = "null_as_default")]
    pub logo: Media,
    #[serde(deserialize_with = "null_as_default")]
    pub photo: Media,

    pub cell_phone: Option<OneOrMany<Entry>>,
    pub pager_phone: Option<OneOrMany<Entry>>,
    pub home_phone: Option<OneOrMany<Entry>>,
    pub work_phone: Option<OneOrMany<Entry>>,
    pub home_fax: Option<OneOrMany<Entry>>,
    pub work_fax: Option<OneOrMany<Entry>>,
    pub other_phone: Option<OneOrMany<Entry>>,

    #[serde(deserialize_with = "null_as_default")]
    pub home_address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub work_address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub other_addresses: Vec<TypedAddress>,

    pub title: Option<Scalar>,
    pub role: Option<Scalar>,
    pub organization: Option<Scalar>,

    pub url: Option<OneOrMany<Entry>>,
    pub work_url: Option<OneOrMany<Entry>>,

    pub note: Option<Scalar>,
    /// Extension links keyed by network name, written in key order.
    #[serde(deserialize_with = "null_as_default")]
    pub social_urls: BTreeMap<String, Option<OneOrMany<String>>>,
    pub source: Option<Scalar>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            formatted_name: None,
            first_name: None,
            middle_name: None,
            last_name: None,
            name_prefix: None,
            name_suffix: None,
            nickname: None,
            gender: None,
            uid: None,
            birthday: None,
            anniversary: None,
            is_organization: false,
            email: None,
            work_email: None,
            other_email: None,
            logo: Media::default(),
            photo: Media::default(),
            cell_phone: None,
            pager_phone: None,
            home_phone: None,
            work_phone: None,
            home_fax: None,
            work_fax: None,
            other_phone: None,
            home_address: Address::default(),
            work_address: Address::default(),
            other_addresses: Vec::new(),
            title: None,
            role: None,
            organization: None,
            url: None,
            work_url: None,
            note: None,
            social_urls: BTreeMap::new(),
            source: None,
        }
    }
}

impl Contact {
    /// Creates an empty version 3.0 record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a record from its JSON form.
    ///
    /// ## Errors
    /// Returns an error if the input is not valid JSON or does not match the record shape.
    pub fn from_json(input: &str) -> RfcResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a record, filling in `default_version` when the input has no
    /// `version` key.
    ///
    /// ## Errors
    /// Returns an error if the input is not valid JSON or does not match the record shape.
    pub fn from_json_with_default(input: &str, default_version: &str) -> RfcResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(input)?;
        if let Some(fields) = value.as_object_mut() {
            fields
                .entry("version")
                .or_insert_with(|| default_version.into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the major version derived from [`Contact::version`].
    #[must_use]
    pub fn major_version(&self) -> MajorVersion {
        MajorVersion::resolve(&self.version)
    }

    /// Returns the formatted name.
    ///
    /// Uses `formatted_name` when set, otherwise joins first, middle and last
    /// name with single spaces, skipping absent parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.formatted_name.as_ref().filter(|n| !n.is_blank()) {
            return name.to_text().into_owned();
        }

        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_blank())
            .map(Scalar::to_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Adds a link under a social network key, keeping earlier links for the same key.
    pub fn add_social_url(&mut self, network: impl Into<String>, url: impl Into<String>) {
        let network = network.into();
        let urls = match self.social_urls.remove(&network).flatten() {
            Some(existing) => {
                let mut urls = existing.into_vec();
                urls.push(url.into());
                OneOrMany::Many(urls)
            }
            None => OneOrMany::One(url.into()),
        };
        self.social_urls.insert(network, Some(urls));
    }

    /// Serializes the record using its own version.
    #[must_use]
    pub fn formatted_string(&self) -> String {
        serialize(self, self.major_version())
    }
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
