//! Discovery payload of the `fan` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `fan` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Fan {
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

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_template: String,

    /// The MQTT topic to publish commands to change the fan state.
    pub command_topic: String,

    /// Information about the device this fan is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works when [`unique_id`](#unique_id) is set. At least one of identifiers or connections must
    /// be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `direction_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction_command_template: String,

    /// The MQTT topic to publish commands to change the direction state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction_command_topic: String,

    /// The MQTT topic subscribed to receive direction state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract a value from the direction.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction_value_template: String,

    /// Flag which defines if the entity should be enabled when first added.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub enabled_by_default: bool,

    /// The encoding of the payloads received and published messages. Set to `""` to disable
    /// decoding of incoming payload.
    ///
    /// Default: `utf-8`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub encoding: String,

    /// The [category](https://developers.home-assistant.io/docs/core/entity#generic-properties) of
    /// the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_category: String,

    /// Picture URL for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_picture: String,

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

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as sensor
    /// attributes. Usage example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-topic-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// The name of the fan. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Fan`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Flag that defines if fan works in optimistic mod.
    ///
    /// Default: `'true' if no state topic defined, else 'false'.`
    #[serde(skip_serializing_if = "is_default")]
    pub optimistic: bool,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `oscillation_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oscillation_command_template: String,

    /// The MQTT topic to publish commands to change the oscillation state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oscillation_command_topic: String,

    /// The MQTT topic subscribed to receive oscillation state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oscillation_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract a value from the oscillation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oscillation_value_template: String,

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

    /// The payload that represents the oscillation off state.
    ///
    /// Default: `oscillate_off`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_oscillation_off: String,

    /// The payload that represents the oscillation on state.
    ///
    /// Default: `oscillate_on`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_oscillation_on: String,

    /// A special payload that resets the `percentage` state attribute to `unknown` when received at
    /// the `percentage_state_topic`.
    ///
    /// Default: `"None"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset_percentage: String,

    /// A special payload that resets the `preset_mode` state attribute to `unknown` when received
    /// at the `preset_mode_state_topic`.
    ///
    /// Default: `"None"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset_preset_mode: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `percentage_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percentage_command_template: String,

    /// The MQTT topic to publish commands to change the fan speed state based on a percentage.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percentage_command_topic: String,

    /// The MQTT topic subscribed to receive fan speed based on percentage.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percentage_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the `percentage` value from the payload received on `percentage_state_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percentage_value_template: String,

    /// Must be `fan`. Only allowed and required in [MQTT auto discovery device
    /// messages](/integrations/mqtt/#device-discovery-payload)
    pub platform: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `preset_mode_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_command_template: String,

    /// The MQTT topic to publish commands to change the preset mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_command_topic: String,

    /// The MQTT topic subscribed to receive fan speed based on presets.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the `preset_mode` value from the payload received on `preset_mode_state_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_value_template: String,

    /// List of preset modes this fan is capable of running at. Common examples include `auto`,
    /// `smart`, `whoosh`, `eco` and `breeze`.
    ///
    /// Default: `[]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_modes: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// If the published message should have the retain flag on or not.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub retain: bool,

    /// The maximum of numeric output range (representing 100 %). The number of speeds within the
    /// `speed_range` / `100` will determine the `percentage_step`.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "is_default")]
    pub speed_range_max: i64,

    /// The minimum of numeric output range (`off` not included, so `speed_range_min` - `1`
    /// represents 0 %). The number of speeds within the speed_range / 100 will determine the
    /// `percentage_step`.
    ///
    /// Default: `1`
    #[serde(skip_serializing_if = "is_default")]
    pub speed_range_min: i64,

    /// The MQTT topic subscribed to receive state updates. A "None" payload resets to an `unknown`
    /// state. An empty payload is ignored. By default, valid state payloads are `OFF` and `ON`. The
    /// accepted payloads can be overridden with the `payload_off` and `payload_on` config options.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract a value from the state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_value_template: String,

    /// An ID that uniquely identifies this fan. If two fans have the same unique ID, Home Assistant
    /// will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Fan {
    const COMPONENT: Component = Component::Fan;

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
