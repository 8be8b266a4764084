//! Discovery payload of the `binary_sensor` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `binary_sensor` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BinarySensor {
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

    /// The MQTT topic subscribed to receive birth and LWT messages from the MQTT device. If
    /// `availability` is not defined, the binary sensor will always be considered `available` and
    /// its state will be `on`, `off` or `unknown`. If `availability` is defined, the binary sensor
    /// will be considered as `unavailable` by default and the sensor's initial state will be
    /// `unavailable`. Must not be used together with `availability`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// Information about the device this binary sensor is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works through [MQTT discovery](/docs/mqtt/discovery/) and when [`unique_id`](#unique_id) is
    /// set. At least one of identifiers or connections must be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Sets the [class of the device](/integrations/binary_sensor/#device-class), changing the
    /// device state and icon that is displayed on the frontend.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_class: String,

    /// Flag which defines if the entity should be enabled when first added.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub enabled_by_default: bool,

    /// The encoding of the payload received at `state_topic` and availability topics
    /// `availability_topic` and `topic`. Set to `""` to disable decoding.
    ///
    /// Default: `utf-8`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub encoding: String,

    /// The [category](https://developers.home-assistant.io/docs/core/entity#generic-properties) of
    /// the entity.
    ///
    /// Default: `None`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_category: String,

    /// Defines the number of seconds after the sensor's state expires, if it's not updated. After
    /// expiry, the sensor's state becomes `unavailable`.
    #[serde(skip_serializing_if = "is_default")]
    pub expire_after: i64,

    /// Sends update events (which results in update of [state
    /// object](/docs/configuration/state_object/)'s `last_changed`) even if the sensor's state
    /// hasn't changed. Useful if you want to have meaningful value graphs in history or want to
    /// create an automation that triggers on *every* incoming state message (not only when the
    /// sensor's new state is different to the current one)
    ///
    /// Default: `false`
    #[serde(skip_serializing_if = "is_default")]
    pub force_update: bool,

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

    /// The name of the binary sensor.
    ///
    /// Default: `MQTT Binary Sensor`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// For sensors that only send `on` state updates (like PIRs), this variable sets a delay in
    /// seconds after which the sensor's state will be updated back to `off`.
    #[serde(skip_serializing_if = "is_default")]
    pub off_delay: i64,

    /// The string that represents the `online` state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The string that represents the `offline` state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The string that represents the `off` state. It will be compared to the message in the
    /// `state_topic` (see `value_template` for details.
    ///
    /// Default: `OFF`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_off: String,

    /// The string that represents the `on` state. It will be compared to the message in the
    /// `state_topic` (see `value_template` for details.
    ///
    /// Default: `ON`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_on: String,

    /// The maximum QoS level to be used when receiving messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// The MQTT topic subscribed to receive sensor's state.
    pub state_topic: String,

    /// An ID that uniquely identifies this sensor. If two sensors have the same unique ID, Home
    /// Assistant will raise an exception.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) that returns
    /// a string to be compared to `payload_on`/`payload_off` or an empty string, in which case the
    /// MQTT message will be removed. Available variables: `entity_id`. Remove this option when
    /// 'payload_on' and 'payload_off' are sufficient to match your payloads (i.e no pre-processing
    /// of original message is required)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for BinarySensor {
    const COMPONENT: Component = Component::BinarySensor;

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
