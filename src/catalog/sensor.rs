//! Discovery payload of the `sensor` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `sensor` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Sensor {
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

    /// The MQTT topic subscribed to receive availability (online/offline) updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// Information about the device this sensor is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/device_registry_index/). Only works when
    /// [`unique_id`](#unique_id) is set. At least one of identifiers or connections must be present
    /// to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// The [type/class](/integrations/sensor/#device-class) of the sensor to set the icon in the
    /// frontend. The `device_class` can be `null`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_class: String,

    /// Flag which defines if the entity should be enabled when first added.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub enabled_by_default: bool,

    /// The encoding of the payloads received. Set to `""` to disable decoding of incoming payload.
    ///
    /// Default: `utf-8`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub encoding: String,

    /// The [category](https://developers.home-assistant.io/docs/core/entity#generic-properties) of
    /// the entity. When set, the entity category must be `diagnostic` for sensors.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_category: String,

    /// Picture URL for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_picture: String,

    /// If set, it defines the number of seconds after the sensor's state expires, if it's not
    /// updated. After expiry, the sensor's state becomes `unavailable`. Default the sensors state
    /// never expires.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub expire_after: i64,

    /// Sends update events even if the value hasn't changed. Useful if you want to have meaningful
    /// value graphs in history.
    ///
    /// Default: `false`
    #[serde(skip_serializing_if = "is_default")]
    pub force_update: bool,

    /// [Icon](/docs/configuration/customizing-devices/#icon) for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the JSON dictionary from messages received on the `json_attributes_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as sensor
    /// attributes. Implies `force_update` of the current sensor state when a message is received on
    /// this topic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the last_reset. When `last_reset_value_template` is set, the `state_class` option
    /// must be `total`. Available variables: `entity_id`. The `entity_id` can be used to reference
    /// the entity's attributes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_reset_value_template: String,

    /// The name of the MQTT sensor. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Sensor`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// List of allowed sensor state value. An empty list is not allowed. The sensor's
    /// `device_class` must be set to `enum`. The `options` option cannot be used together with
    /// `state_class` or `unit_of_measurement`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub options: String,

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

    /// Must be `sensor`. Only allowed and required in [MQTT auto discovery device
    /// messages](/integrations/mqtt/#device-discovery-payload)
    pub platform: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// The
    /// [state_class](https://developers.home-assistant.io/docs/core/entity/sensor#available-state-classes)
    /// of the sensor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_class: String,

    /// The MQTT topic subscribed to receive sensor values. If `device_class`, `state_class`,
    /// `unit_of_measurement` or `suggested_display_precision` is set, and a numeric value is
    /// expected, an empty value `''` will be ignored and will not update the state, a `'null'`
    /// value will set the sensor to an `unknown` state. The `device_class` can be `null`.
    pub state_topic: String,

    /// The number of decimals which should be used in the sensor's state after rounding.
    #[serde(skip_serializing_if = "is_default")]
    pub suggested_display_precision: i64,

    /// An ID that uniquely identifies this sensor. If two sensors have the same unique ID, Home
    /// Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines the units of measurement of the sensor, if any. The `unit_of_measurement` can be
    /// `null`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit_of_measurement: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the value. If the template throws an error, the current state will be used instead.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Sensor {
    const COMPONENT: Component = Component::Sensor;

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
