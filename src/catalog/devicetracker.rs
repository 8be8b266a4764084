//! Discovery payload of the `device_tracker` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `device_tracker` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct DeviceTracker {
    /// A list of MQTT topics subscribed to receive availability (online/offline) updates. Must not
    /// be used together with `availability_topic`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<Availability>,

    /// When `availability` is configured, this controls the conditions needed to set the entity to
    /// `available`. Valid entries are `all`, `any`, and `latest`. If set to `all`,
    /// `payload_available` must be received on all configured availability topics before the entity
    /// is marked as online. If set to `any`, `payload_available` must be received on at least one
    /// configured availability topic before the entity is marked as online. If set to `latest`, the
    /// last `payload_available` or `payload_not_available` received on any configured availability
    /// topic controls the availability.
    ///
    /// Default: `latest`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_mode: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract device's availability from the `availability_topic`. To determine the devices's
    /// availability result of this template will be compared to `payload_available` and
    /// `payload_not_available`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_template: String,

    /// The MQTT topic subscribed to receive availability (online/offline) updates. Must not be used
    /// together with `availability`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// Information about the device this device tracker is a part of that ties it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). At least
    /// one of identifiers or connections must be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// [Icon](/docs/configuration/customizing-devices/#icon) for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the JSON dictionary from messages received on the `json_attributes_topic`. Usage
    /// example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-template-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary message containing device tracker
    /// attributes. This topic can be used to set the location of the device tracker under the
    /// following conditions: - If the attributes in the JSON message include `longitude`,
    /// `latitude`, and `gps_accuracy` (optional). - If the device tracker is within a configured
    /// [zone](/integrations/zone/).
    ///
    /// If these conditions are met, it is not required to configure `state_topic`.
    ///
    /// Be aware that any location message received at `state_topic` overrides the location received
    /// via `json_attributes_topic` until a message configured with `payload_reset` is received at
    /// `state_topic`. For a more generic usage example of the `json_attributes_topic`, refer to the
    /// [MQTT sensor](/integrations/sensor.mqtt/#json-attributes-topic-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// The name of the MQTT device_tracker.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// The payload that represents the available state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The payload value that represents the 'home' state for the device.
    ///
    /// Default: `home`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_home: String,

    /// The payload that represents the unavailable state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The payload value that represents the 'not_home' state for the device.
    ///
    /// Default: `not_home`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_home: String,

    /// The payload value that will have the device's location automatically derived from Home
    /// Assistant's zones.
    ///
    /// Default: `"None"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset: String,

    /// Must be `device_tracker`. Only allowed and required in [MQTT auto discovery device
    /// messages](/integrations/mqtt/#device-discovery-payload)
    pub platform: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// Attribute of a device tracker that affects state when being used to track a
    /// [person](/integrations/person/). Valid options are `gps`, `router`, `bluetooth`, or
    /// `bluetooth_le`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_type: String,

    /// The MQTT topic subscribed to receive device tracker state changes. The states defined in
    /// `state_topic` override the location states defined by the `json_attributes_topic`. This
    /// state override is turned inactive if the `state_topic` receives a message containing
    /// `payload_reset`. The `state_topic` can only be omitted if `json_attributes_topic` is used.
    /// An empty payload is ignored. Valid payloads are `not_home`, `home` or any other custom
    /// location or zone name. Payloads for `not_home`, `home` can be overridden with the
    /// `payload_not_home`and `payload_home` config options.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// An ID that uniquely identifies this device_tracker. If two device_trackers have the same
    /// unique ID, Home Assistant will raise an exception. Required when used with device-based
    /// discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) that
    /// returns a device tracker state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for DeviceTracker {
    const COMPONENT: Component = Component::DeviceTracker;

    fn object_id(&self) -> Cow<'_, str> {
        if !self.unique_id.is_empty() {
            Cow::Borrowed(self.unique_id.as_str())
        } else if !self.name.is_empty() {
            Cow::Borrowed(self.name.as_str())
        } else {
            Cow::Owned(fallback_id(self))
        }
    }
}
