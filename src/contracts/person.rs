//! Person match details carried by completed-search and person-found events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person as returned by a search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub identifiers: Vec<PersonalIdentifier>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
}

/// The kind of a personal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalIdentifierType {
    DriverLicense,
    SocialInsuranceNumber,
    PersonalHealthNumber,
    BirthCertificate,
    CorrectionsId,
    NativeStatusCard,
    Passport,
    Other,
}

impl Default for PersonalIdentifierType {
    fn default() -> Self {
        PersonalIdentifierType::Other
    }
}

/// An identifier attached to a person, issued by some authority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonalIdentifier {
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(rename = "Type", default)]
    pub identifier_type: PersonalIdentifierType,
    #[serde(default)]
    pub issued_by: Option<String>,
}

/// A civic address known for a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(rename = "Type", default)]
    pub address_type: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// A phone number known for a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumber {
    #[serde(rename = "Type", default)]
    pub phone_type: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}
