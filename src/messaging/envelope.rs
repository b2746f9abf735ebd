//! Message envelope handed to consumers.

use lapin::message::Delivery;
use lapin::types::{AMQPValue, FieldTable, ShortString};
use tracing::debug;

use crate::contracts::ProviderProfile;

/// Header key under which producers attach their provider profile.
const PROVIDER_PROFILE_HEADER: &str = "ProviderProfile";

/// A consumed bus message: the raw JSON payload plus the correlation
/// metadata decoded from transport headers.
#[derive(Debug, Clone)]
pub struct MessageEnvelope {
    pub payload: Vec<u8>,
    pub provider_profile: Option<ProviderProfile>,
}

impl MessageEnvelope {
    pub fn new(payload: Vec<u8>, provider_profile: Option<ProviderProfile>) -> Self {
        Self {
            payload,
            provider_profile,
        }
    }

    pub fn from_delivery(delivery: &Delivery) -> Self {
        let provider_profile = delivery
            .properties
            .headers()
            .as_ref()
            .and_then(provider_profile_header);

        Self {
            payload: delivery.data.clone(),
            provider_profile,
        }
    }
}

/// Decode the provider profile header, a JSON object serialized into a
/// long-string header value. Absent or undecodable headers are normal and
/// yield `None`.
fn provider_profile_header(headers: &FieldTable) -> Option<ProviderProfile> {
    let value = headers
        .inner()
        .get(&ShortString::from(PROVIDER_PROFILE_HEADER))?;

    match value {
        AMQPValue::LongString(raw) => match serde_json::from_slice(raw.as_bytes()) {
            Ok(profile) => Some(profile),
            Err(error) => {
                debug!(%error, "ignoring provider profile header that is not valid json");
                None
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: AMQPValue) -> FieldTable {
        let mut headers = FieldTable::default();
        headers.insert(ShortString::from(PROVIDER_PROFILE_HEADER), value);
        headers
    }

    #[test]
    fn decodes_provider_profile_from_json_header() {
        let headers = headers_with(AMQPValue::LongString(r#"{"Name":"ICBC"}"#.into()));

        let profile = provider_profile_header(&headers).unwrap();
        assert_eq!(profile.name, "ICBC");
    }

    #[test]
    fn absent_header_is_none() {
        assert!(provider_profile_header(&FieldTable::default()).is_none());
    }

    #[test]
    fn malformed_header_is_none() {
        let headers = headers_with(AMQPValue::LongString("not json".into()));
        assert!(provider_profile_header(&headers).is_none());
    }

    #[test]
    fn non_string_header_is_none() {
        let headers = headers_with(AMQPValue::Boolean(true));
        assert!(provider_profile_header(&headers).is_none());
    }
}
