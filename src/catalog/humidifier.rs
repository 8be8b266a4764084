//! Discovery payload of the `humidifier` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `humidifier` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Humidifier {
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

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract
    /// device's availability from the `availability_topic`. To determine the devices's availability
    /// result of this template will be compared to `payload_available` and `payload_not_available`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_template: String,

    /// The MQTT topic subscribed to receive availability (online/offline) updates. Must not be used
    /// together with `availability`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to generate
    /// the payload to send to `command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_template: String,

    /// The MQTT topic to publish commands to change the humidifier state.
    pub command_topic: String,

    /// Information about the device this humidifier is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works through [MQTT discovery](/docs/mqtt/discovery/) and when [`unique_id`](#unique_id) is
    /// set. At least one of identifiers or connections must be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// The device class of the MQTT device. Must be either `humidifier` or `dehumidifier`.
    ///
    /// Default: `humidifier`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_class: String,

    /// Flag which defines if the entity should be enabled when first added.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub enabled_by_default: bool,

    /// The [category](https://developers.home-assistant.io/docs/core/entity#generic-properties) of
    /// the entity.
    ///
    /// Default: `None`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_category: String,

    /// [Icon](/docs/configuration/customizing-devices/#icon) for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract
    /// the JSON dictionary from messages received on the `json_attributes_topic`. Usage example can
    /// be found in [MQTT sensor](/integrations/sensor.mqtt/#json-attributes-template-configuration)
    /// documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as sensor
    /// attributes. Usage example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-topic-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// The minimum target humidity percentage that can be set.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "is_default")]
    pub max_humidity: i64,

    /// The maximum target humidity percentage that can be set.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub min_humidity: i64,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to generate
    /// the payload to send to `mode_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_command_template: String,

    /// The MQTT topic to publish commands to change the `mode` on the humidifier. This attribute
    /// ust be configured together with the `modes` attribute.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_command_topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract a
    /// value for the humidifier `mode` state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_state_template: String,

    /// The MQTT topic subscribed to receive the humidifier `mode`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_state_topic: String,

    /// List of available modes this humidifier is capable of running at. Common examples include
    /// `normal`, `eco`, `away`, `boost`, `comfort`, `home`, `sleep`, `auto` and `baby`. These
    /// examples offer built-in translations but other custom modes are allowed as well. This
    /// attribute ust be configured together with the `mode_command_topic` attribute.
    ///
    /// Default: `[]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub modes: String,

    /// The name of the humidifier.
    ///
    /// Default: `MQTT humidifier`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Flag that defines if humidifier works in optimistic mod.
    ///
    /// Default: `'true' if no state topic defined, else 'false'.`
    #[serde(skip_serializing_if = "is_default")]
    pub optimistic: bool,

    /// The payload that represents the available state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The payload that represents the unavailable state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The payload that represents the stop state.
    ///
    /// Default: `OFF`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_off: String,

    /// The payload that represents the running state.
    ///
    /// Default: `ON`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_on: String,

    /// A special payload that resets the `target_humidity` state attribute to `None` when received
    /// at the `target_humidity_state_topic`.
    ///
    /// Default: `None`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset_humidity: String,

    /// A special payload that resets the `mode` state attribute to `None` when received at the
    /// `mode_state_topic`.
    ///
    /// Default: `None`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset_mode: String,

    /// The maximum QoS level of the state topic.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// If the published message should have the retain flag on or not.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub retain: bool,

    /// The MQTT topic subscribed to receive state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract a
    /// value from the state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_value_template: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to generate
    /// the payload to send to `target_humidity_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_command_template: String,

    /// The MQTT topic to publish commands to change the humidifier target humidity state based on a
    /// percentage.
    pub target_humidity_command_topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract a
    /// value for the humidifier `target_humidity` state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_state_template: String,

    /// The MQTT topic subscribed to receive humidifier target humidity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_state_topic: String,

    /// An ID that uniquely identifies this humidifier. If two humidifiers have the same unique ID,
    /// Home Assistant will raise an exception.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Humidifier {
    const COMPONENT: Component = Component::Humidifier;

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
