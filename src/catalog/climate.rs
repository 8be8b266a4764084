//! Discovery payload of the `climate` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `climate` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Climate {
    /// A template to render the value received on the `action_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action_template: String,

    /// The MQTT topic to subscribe for changes of the current action. If this is set, the climate
    /// graph uses the value received as data source. A "None" payload resets the current action
    /// state. An empty payload is ignored. Valid action values: `off`, `heating`, `cooling`,
    /// `drying`, `idle`, `fan`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action_topic: String,

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

    /// A template with which the value received on `current_humidity_topic` will be rendered.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_humidity_template: String,

    /// The MQTT topic on which to listen for the current humidity. A `"None"` value received will
    /// reset the current humidity. Empty values (`'''`) will be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_humidity_topic: String,

    /// A template with which the value received on `current_temperature_topic` will be rendered.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_temperature_template: String,

    /// The MQTT topic on which to listen for the current temperature. A `"None"` value received
    /// will reset the current temperature. Empty values (`'''`) will be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_temperature_topic: String,

    /// Information about the device this HVAC device is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works when [`unique_id`](#unique_id) is set. At least one of identifiers or connections must
    /// be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

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

    /// A template to render the value sent to the `fan_mode_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fan_mode_command_template: String,

    /// The MQTT topic to publish commands to change the fan mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fan_mode_command_topic: String,

    /// A template to render the value received on the `fan_mode_state_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fan_mode_state_template: String,

    /// The MQTT topic to subscribe for changes of the HVAC fan mode. If this is not set, the fan
    /// mode works in optimistic mode (see below). A "None" payload resets the fan mode state. An
    /// empty payload is ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fan_mode_state_topic: String,

    /// A list of supported fan modes.
    ///
    /// Default: `[auto low medium high]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fan_modes: String,

    /// [Icon](/docs/configuration/customizing-devices/#icon) for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Set the initial target temperature. The default value depends on the temperature unit and
    /// will be 21° or 69.8°F.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub initial: String,

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

    /// The minimum target humidity percentage that can be set.
    ///
    /// Default: `99`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_humidity: String,

    /// Maximum set point available. The default value depends on the temperature unit, and will be
    /// 35°C or 95°F.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_temp: String,

    /// The maximum target humidity percentage that can be set.
    ///
    /// Default: `30`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub min_humidity: String,

    /// Minimum set point available. The default value depends on the temperature unit, and will be
    /// 7°C or 44.6°F.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub min_temp: String,

    /// A template to render the value sent to the `mode_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_command_template: String,

    /// The MQTT topic to publish commands to change the HVAC operation mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_command_topic: String,

    /// A template to render the value received on the `mode_state_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_state_template: String,

    /// The MQTT topic to subscribe for changes of the HVAC operation mode. If this is not set, the
    /// operation mode works in optimistic mode (see below). A "None" payload resets to an `unknown`
    /// state. An empty payload is ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode_state_topic: String,

    /// A list of supported modes. Needs to be a subset of the default values.
    ///
    /// Default: `[auto off cool heat dry fan_only]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub modes: String,

    /// The name of the HVAC. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT HVAC`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Flag that defines if the climate works in optimistic mod.
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

    /// The payload sent to turn off the device.
    ///
    /// Default: `OFF`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_off: String,

    /// The payload sent to turn the device on.
    ///
    /// Default: `ON`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_on: String,

    /// A template to render the value sent to the `power_command_topic` with. The `value` parameter
    /// is the payload set for `payload_on` or `payload_off`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub power_command_template: String,

    /// The MQTT topic to publish commands to change the HVAC power state. Sends the payload
    /// configured with `payload_on` if the climate is turned on via the `climate.turn_on`, or the
    /// payload configured with `payload_off` if the climate is turned off via the
    /// `climate.turn_off` action. Note that `optimistic` mode is not supported through
    /// `climate.turn_on` and `climate.turn_off` actions. When called, these actions will send a
    /// power command to the device but will not optimistically update the state of the climate
    /// entity. The climate device should report its state back via `mode_state_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub power_command_topic: String,

    /// The desired precision for this device. Can be used to match your actual thermostat's
    /// precision. Supported values are `0.1`, `0.5` and `1.0`.
    ///
    /// Default: `0.1 for Celsius and 1.0 for Fahrenheit.`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub precision: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `preset_mode_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_command_template: String,

    /// The MQTT topic to publish commands to change the preset mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_command_topic: String,

    /// The MQTT topic subscribed to receive climate speed based on presets. When preset 'none' is
    /// received or `None` the `preset_mode` will be reset.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the `preset_mode` value from the payload received on `preset_mode_state_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_mode_value_template: String,

    /// List of preset modes this climate is supporting. Common examples include `eco`, `away`,
    /// `boost`, `comfort`, `home`, `sleep` and `activity`.
    ///
    /// Default: `[]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preset_modes: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// Defines if published messages should have the retain flag set.
    ///
    /// Default: `false`
    #[serde(skip_serializing_if = "is_default")]
    pub retain: bool,

    /// A template to render the value sent to the `swing_mode_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub swing_mode_command_template: String,

    /// The MQTT topic to publish commands to change the swing mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub swing_mode_command_topic: String,

    /// A template to render the value received on the `swing_mode_state_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub swing_mode_state_template: String,

    /// The MQTT topic to subscribe for changes of the HVAC swing mode. If this is not set, the
    /// swing mode works in optimistic mode (see below)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub swing_mode_state_topic: String,

    /// A list of supported swing modes.
    ///
    /// Default: `[on off]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub swing_modes: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `target_humidity_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_command_template: String,

    /// The MQTT topic to publish commands to change the target humidity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_command_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract a value for the climate `target_humidity` state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_state_template: String,

    /// The MQTT topic subscribed to receive the target humidity. If this is not set, the target
    /// humidity works in optimistic mode (see below). A `"None"` value received will reset the
    /// target humidity. Empty values (`'''`) will be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_humidity_state_topic: String,

    /// Step size for temperature set point.
    ///
    /// Default: `1`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temp_step: String,

    /// A template to render the value sent to the `temperature_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_command_template: String,

    /// The MQTT topic to publish commands to change the target temperature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_command_topic: String,

    /// A template to render the value sent to the `temperature_high_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_high_command_template: String,

    /// The MQTT topic to publish commands to change the high target temperature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_high_command_topic: String,

    /// A template to render the value received on the `temperature_high_state_topic` with. A
    /// `"None"` value received will reset the temperature high set point. Empty values (`'''`) will
    /// be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_high_state_template: String,

    /// The MQTT topic to subscribe for changes in the target high temperature. If this is not set,
    /// the target high temperature works in optimistic mode (see below)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_high_state_topic: String,

    /// A template to render the value sent to the `temperature_low_command_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_low_command_template: String,

    /// The MQTT topic to publish commands to change the target low temperature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_low_command_topic: String,

    /// A template to render the value received on the `temperature_low_state_topic` with. A
    /// `"None"` value received will reset the temperature low set point. Empty values (`'''`) will
    /// be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_low_state_template: String,

    /// The MQTT topic to subscribe for changes in the target low temperature. If this is not set,
    /// the target low temperature works in optimistic mode (see below)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_low_state_topic: String,

    /// A template to render the value received on the `temperature_state_topic` with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_state_template: String,

    /// The MQTT topic to subscribe for changes in the target temperature. If this is not set, the
    /// target temperature works in optimistic mode (see below). A `"None"` value received will
    /// reset the temperature set point. Empty values (`'''`) will be ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_state_topic: String,

    /// Defines the temperature unit of the device, `C` or `F`. If this is not set, the temperature
    /// unit is set to the system temperature unit.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temperature_unit: String,

    /// An ID that uniquely identifies this HVAC device. If two HVAC devices have the same unique
    /// ID, Home Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Default template to render the payloads on *all* `*_state_topic`s with.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Climate {
    const COMPONENT: Component = Component::Climate;

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
