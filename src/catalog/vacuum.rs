//! Discovery payload of the `vacuum` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `vacuum` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Vacuum {
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

    /// The MQTT topic to publish commands to control the vacuum.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_topic: String,

    /// Information about the device this switch is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works when [`unique_id`](#unique_id) is set. At least one of identifiers or connections must
    /// be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// The encoding of the payloads received and published messages. Set to `""` to disable
    /// decoding of incoming payload.
    ///
    /// Default: `utf-8`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub encoding: String,

    /// List of possible fan speeds for the vacuum.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fan_speed_list: Vec<String>,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the JSON dictionary from messages received on the `json_attributes_topic`. Usage
    /// example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-template-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as sensor
    /// attributes. Usage example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-topic-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// The name of the vacuum. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Vacuum`
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

    /// The payload to send to the `command_topic` to begin a spot cleaning cycle.
    ///
    /// Default: `clean_spot`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_clean_spot: String,

    /// The payload to send to the `command_topic` to locate the vacuum (typically plays a song)
    ///
    /// Default: `locate`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_locate: String,

    /// The payload that represents the unavailable state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The payload to send to the `command_topic` to pause the vacuum.
    ///
    /// Default: `pause`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_pause: String,

    /// The payload to send to the `command_topic` to tell the vacuum to return to base.
    ///
    /// Default: `return_to_base`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_return_to_base: String,

    /// The payload to send to the `command_topic` to begin the cleaning cycle.
    ///
    /// Default: `start`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_start: String,

    /// The payload to send to the `command_topic` to stop cleaning.
    ///
    /// Default: `stop`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_stop: String,

    /// Must be `vacuum`. Only allowed and required in [MQTT auto discovery device
    /// messages](/integrations/mqtt/#device-discovery-payload)
    pub platform: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// If the published message should have the retain flag on or not.
    ///
    /// Default: `false`
    #[serde(skip_serializing_if = "is_default")]
    pub retain: bool,

    /// The MQTT topic to publish custom commands to the vacuum.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub send_command_topic: String,

    /// The MQTT topic to publish commands to control the vacuum's fan speed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub set_fan_speed_topic: String,

    /// The MQTT topic subscribed to receive state messages from the vacuum. Messages received on
    /// the `state_topic` must be a valid JSON dictionary, with a mandatory `state` key and
    /// optionally `battery_level` and `fan_speed` keys as shown in the
    /// [example](#configuration-example)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// List of features that the vacuum supports (possible values are `start`, `stop`, `pause`,
    /// `return_home`, `battery`, `status`, `locate`, `clean_spot`, `fan_speed`, `send_command`)
    ///
    /// Default: `'start', 'stop', 'return_home', 'status', 'battery', 'clean_spot'`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_features: Vec<String>,

    /// An ID that uniquely identifies this vacuum. If two vacuums have the same unique ID, Home
    /// Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Vacuum {
    const COMPONENT: Component = Component::Vacuum;

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
