mod announce;
mod component;
mod hash;

pub use announce::*;
pub use component::*;
pub use hash::*;

/// An MQTT topic reporting the availability (online/offline) of an entity.
///
/// Used by most entity kinds as the `availability` list. Must not be combined with
/// `availability_topic`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Availability {
    /// The payload that represents the available state, defaults to `online`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_available: Option<String>,

    /// The payload that represents the unavailable state, defaults to `offline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_not_available: Option<String>,

    /// An MQTT topic subscribed to receive availability (online/offline) updates.
    pub topic: String,
}

impl Availability {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }
}

/// Information about the device an entity is a part of.
///
/// Ties the entity into the device registry. At least one of `identifiers` or `connections`
/// must be present to identify the device.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Device {
    /// Connections of the device to the outside world, as `[connection_type, connection_identifier]`.
    #[serde(alias = "cns")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<[String; 2]>,

    /// IDs that uniquely identify the device, for example a serial number.
    #[serde(alias = "ids")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,

    #[serde(alias = "mf")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(alias = "mdl")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Suggest an area if the device isn't in one yet.
    #[serde(alias = "sa")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_area: Option<String>,

    /// The firmware version of the device.
    #[serde(alias = "sw")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,

    /// Identifier of a device that routes messages between this device and Home Assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_device: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_serde() {
        assert_eq!(
            serde_json::to_value(Device {
                identifiers: vec!["test-id1".into()],
                connections: vec![["mac".into(), "02:5b:26:a8:dc:12".into()]],
                name: Some("Test Device 1".to_string()),
                ..Default::default()
            })
            .unwrap(),
            json!({
                "identifiers": ["test-id1"],
                "connections": [["mac", "02:5b:26:a8:dc:12"]],
                "name": "Test Device 1",
            })
        )
    }

    #[test]
    fn test_device_abbreviations() {
        let device: Device = serde_json::from_value(json!({
            "ids": ["abc"],
            "mf": "ACME",
            "mdl": "Widget",
            "sw": "1.2.3",
            "sa": "Kitchen",
        }))
        .unwrap();

        assert_eq!(
            device,
            Device {
                identifiers: vec!["abc".into()],
                manufacturer: Some("ACME".into()),
                model: Some("Widget".into()),
                sw_version: Some("1.2.3".into()),
                suggested_area: Some("Kitchen".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_availability_topic_always_present() {
        assert_eq!(
            serde_json::to_value(Availability::default()).unwrap(),
            json!({ "topic": "" })
        );
        assert_eq!(
            serde_json::to_value(Availability {
                payload_available: Some("up".into()),
                ..Availability::new("device/status")
            })
            .unwrap(),
            json!({ "topic": "device/status", "payload_available": "up" })
        );
    }
}
