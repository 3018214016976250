//! Cloud event envelope delivered for resource lifecycle changes.
//!
//! Only `eventType` and `data.resourceId` drive reconciliation; the other
//! fields are kept so an envelope survives decoding intact. Any field that is
//! absent, or present with an unexpected shape, decodes to its default.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::exception::{TaggerException, TaggerResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OciEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub cloud_events_version: String,
    #[serde(default, rename = "eventID", deserialize_with = "lenient")]
    pub event_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub event_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient")]
    pub event_type_version: String,
    #[serde(default, deserialize_with = "lenient")]
    pub event_time: Option<DateTime<Utc>>,
    #[serde(default, rename = "schemaURL", deserialize_with = "lenient")]
    pub schema_url: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub content_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub extensions: Extensions,
    #[serde(default, deserialize_with = "lenient")]
    pub data: EventData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extensions {
    #[serde(default, deserialize_with = "lenient")]
    pub compartment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(default, deserialize_with = "lenient")]
    pub compartment_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub compartment_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub resource_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub resource_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub availability_domain: String,
    #[serde(default, deserialize_with = "lenient")]
    pub free_form_tags: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub defined_tags: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub additional_details: AdditionalDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    #[serde(default, deserialize_with = "lenient")]
    pub e_tag: String,
    #[serde(default, deserialize_with = "lenient")]
    pub namespace: String,
    /// Emitted as `archieveState` by some event sources.
    #[serde(
        default,
        rename = "archiveState",
        alias = "archieveState",
        deserialize_with = "lenient"
    )]
    pub archive_state: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub bucket_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub bucket_id: String,
}

impl OciEvent {
    /// Decode an envelope. Only a payload that is not a JSON object fails.
    pub fn decode(payload: &[u8]) -> TaggerResult<Self> {
        let object: Map<String, Value> = serde_json::from_slice(payload)?;
        Ok(Self::deserialize(Value::Object(object))?)
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Id of the resource the event concerns, an instance id for compute events.
    pub fn resource_id(&self) -> &str {
        &self.data.resource_id
    }
}

impl FromStr for OciEvent {
    type Err = TaggerException;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s.as_bytes())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const LAUNCH_EVENT: &str = indoc! {r#"
        {
            "cloudEventsVersion": "0.1",
            "eventID": "a1b2c3",
            "eventType": "com.oraclecloud.computeapi.launchinstance.end",
            "source": "ComputeApi",
            "eventTypeVersion": "2.0",
            "eventTime": "2021-09-01T12:00:00Z",
            "contentType": "application/json",
            "extensions": { "compartmentId": "ocid1.compartment.oc1..c" },
            "data": {
                "compartmentId": "ocid1.compartment.oc1..c",
                "compartmentName": "workers",
                "resourceName": "oke-node-1",
                "resourceId": "ocid1.instance.oc1..i3",
                "availabilityDomain": "AD-1",
                "freeFormTags": {},
                "definedTags": { "Oracle-Tags": { "CreatedBy": "oke" } },
                "additionalDetails": { "eTag": "x", "archieveState": null }
            },
            "somethingNew": { "nested": [1, 2, 3] }
        }
    "#};

    #[test]
    fn decode_extracts_resource_id_and_ignores_unknown_fields() {
        let event = OciEvent::decode(LAUNCH_EVENT.as_bytes()).unwrap();
        assert_eq!(event.resource_id(), "ocid1.instance.oc1..i3");
        assert_eq!(
            event.event_type(),
            "com.oraclecloud.computeapi.launchinstance.end"
        );
        assert_eq!(event.extensions.compartment_id, "ocid1.compartment.oc1..c");
        assert!(event.event_time.is_some());
        assert!(event.data.defined_tags.contains_key("Oracle-Tags"));
    }

    #[test]
    fn malformed_auxiliary_fields_fall_back_to_defaults() {
        let event: OciEvent = indoc! {r#"
            {
                "eventType": 42,
                "eventTime": "yesterday",
                "schemaURL": ["anything"],
                "data": {
                    "resourceId": "i-1",
                    "freeFormTags": "not a map",
                    "additionalDetails": 7
                }
            }
        "#}
        .parse()
        .unwrap();
        assert_eq!(event.resource_id(), "i-1");
        assert_eq!(event.event_type(), "");
        assert!(event.event_time.is_none());
        assert!(event.schema_url.is_some());
        assert!(event.data.free_form_tags.is_empty());
        assert_eq!(event.data.additional_details, AdditionalDetails::default());
    }

    #[test]
    fn missing_resource_id_is_not_a_decode_error() {
        let event = OciEvent::decode(br#"{"eventType": "x"}"#).unwrap();
        assert_eq!(event.resource_id(), "");
    }

    #[test]
    fn non_object_payload_is_a_decode_error() {
        for payload in [&b"not json"[..], b"[1, 2]", b"\"i-1\"", b""] {
            assert!(matches!(
                OciEvent::decode(payload),
                Err(TaggerException::Decode { .. })
            ));
        }
    }
}
