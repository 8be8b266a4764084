//! Discovery payload of the `number` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `number` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Number {
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

    /// The MQTT topic subscribed to receive availability (online/offline) updates. Must not be used
    /// together with `availability`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to generate
    /// the payload to send to `command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_template: String,

    /// The MQTT topic to publish commands to change the number.
    pub command_topic: String,

    /// Information about the device this Number is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works through [MQTT discovery](/docs/mqtt/discovery/) and when [`unique_id`](#unique_id) is
    /// set. At least one of identifiers or connections must be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

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
    /// the JSON dictionary from messages received on the `json_attributes_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as number
    /// attributes. Implies `force_update` of the current number state when a message is received on
    /// this topic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// Maximum value.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max: String,

    /// Minimum value.
    ///
    /// Default: `1`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub min: String,

    /// The name of the Number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Flag that defines if number works in optimistic mode.
    ///
    /// Default: `'true' if no 'state_topic' defined, else 'false'.`
    #[serde(skip_serializing_if = "is_default")]
    pub optimistic: bool,

    /// A special payload that resets the state to `None` when received on the `state_topic`.
    ///
    /// Default: `"None"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset: String,

    /// The maximum QoS level of the state topic. Default is 0 and will also be used to publishing
    /// messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// If the published message should have the retain flag on or not.
    ///
    /// Default: `false`
    #[serde(skip_serializing_if = "is_default")]
    pub retain: bool,

    /// The MQTT topic subscribed to receive number values.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// Step value. Smallest value `0.001`.
    ///
    /// Default: `1`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub step: String,

    /// An ID that uniquely identifies this Number. If two Numbers have the same unique ID Home
    /// Assistant will raise an exception.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines the unit of measurement of the sensor, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit_of_measurement: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract
    /// the value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Number {
    const COMPONENT: Component = Component::Number;

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
