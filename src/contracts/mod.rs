//! # Bus Contracts
//!
//! Typed payloads exchanged with the search-provider adapters over the
//! message bus, plus the notification payloads projected from them.
//!
//! The wire format is JSON with PascalCase member names and string-valued
//! enums, matching what the provider adapters publish. Deserialization is
//! lenient where a field can be sensibly absent; the search request id is
//! the one field every message must carry.

pub mod events;
pub mod person;

pub use events::{
    PersonFound, PersonSearchAccepted, PersonSearchCompleted, PersonSearchEvent,
    PersonSearchFailed, PersonSearchRejected, ProviderProfile, ProviderSearchEventStatus,
    ValidationResult,
};
pub use person::{Address, Person, PersonalIdentifier, PersonalIdentifierType, PhoneNumber};
