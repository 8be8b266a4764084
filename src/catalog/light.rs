//! Discovery payload of the `light` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `light` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Light {
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

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `brightness_command_topic`. Available variables: `value`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brightness_command_template: String,

    /// The MQTT topic to publish commands to change the light’s brightness.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brightness_command_topic: String,

    /// Defines the maximum brightness value (i.e., 100%) of the MQTT device.
    ///
    /// Default: `255`
    #[serde(skip_serializing_if = "is_default")]
    pub brightness_scale: i64,

    /// The MQTT topic subscribed to receive brightness state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brightness_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the brightness value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brightness_value_template: String,

    /// The MQTT topic subscribed to receive color mode updates. If this is not configured,
    /// `color_mode` will be automatically set according to the last received valid color or color
    /// temperatur.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_mode_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the color mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_mode_value_template: String,

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `color_temp_command_topic`. Available variables: `value`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_temp_command_template: String,

    /// The MQTT topic to publish commands to change the light’s color temperature state. The color
    /// temperature command slider has a range of 153 to 500 mireds (micro reciprocal degrees)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_temp_command_topic: String,

    /// The MQTT topic subscribed to receive color temperature state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_temp_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the color temperature value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_temp_value_template: String,

    /// The MQTT topic to publish commands to change the switch state.
    pub command_topic: String,

    /// Information about the device this light is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works when [`unique_id`](#unique_id) is set. At least one of identifiers or connections must
    /// be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `effect_command_topic`. Available variables: `value`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effect_command_template: String,

    /// The MQTT topic to publish commands to change the light's effect state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effect_command_topic: String,

    /// The list of effects the light supports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effect_list: Vec<String>,

    /// The MQTT topic subscribed to receive effect state updates.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effect_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the effect value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub effect_value_template: String,

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

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `hs_command_topic`. Available variables: `hue` and `sat`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hs_command_template: String,

    /// The MQTT topic to publish commands to change the light's color state in HS format (Hue
    /// Saturation). Range for Hue: 0° .. 360°, Range of Saturation: 0..100. Note: Brightness is
    /// sent separately in the `brightness_command_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hs_command_topic: String,

    /// The MQTT topic subscribed to receive color state updates in HS format. The expected payload
    /// is the hue and saturation values separated by commas, for example, `359.5,100.0`. Note:
    /// Brightness is received separately in the `brightness_state_topic`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hs_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the HS value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hs_value_template: String,

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

    /// The maximum color temperature in mireds.
    #[serde(skip_serializing_if = "is_default")]
    pub max_mireds: i64,

    /// The minimum color temperature in mireds.
    #[serde(skip_serializing_if = "is_default")]
    pub min_mireds: i64,

    /// The name of the light. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Light`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Defines when on the payload_on is sent. Using `last` (the default) will send any style
    /// (brightness, color, etc) topics first and then a `payload_on` to the `command_topic`. Using
    /// `first` will send the `payload_on` and then any style topics. Using `brightness` will only
    /// send brightness commands instead of the `payload_on` to turn the light on.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_command_type: String,

    /// Flag that defines if switch works in optimistic mode.
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

    /// The payload that represents disabled state.
    ///
    /// Default: `OFF`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_off: String,

    /// The payload that represents enabled state.
    ///
    /// Default: `ON`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_on: String,

    /// Must be `light`. Only allowed and required in [MQTT auto discovery device
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

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `rgb_command_topic`. Available variables: `red`, `green` and `blue`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgb_command_template: String,

    /// The MQTT topic to publish commands to change the light's RGB state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgb_command_topic: String,

    /// The MQTT topic subscribed to receive RGB state updates. The expected payload is the RGB
    /// values separated by commas, for example, `255,0,127`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgb_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the RGB value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgb_value_template: String,

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `rgbw_command_topic`. Available variables: `red`, `green`, `blue` and `white`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbw_command_template: String,

    /// The MQTT topic to publish commands to change the light's RGBW state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbw_command_topic: String,

    /// The MQTT topic subscribed to receive RGBW state updates. The expected payload is the RGBW
    /// values separated by commas, for example, `255,0,127,64`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbw_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the RGBW value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbw_value_template: String,

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `rgbww_command_topic`. Available variables: `red`, `green`, `blue`, `cold_white` and
    /// `warm_white`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbww_command_template: String,

    /// The MQTT topic to publish commands to change the light's RGBWW state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbww_command_topic: String,

    /// The MQTT topic subscribed to receive RGBWW state updates. The expected payload is the RGBWW
    /// values separated by commas, for example, `255,0,127,64,32`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbww_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the RGBWW value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rgbww_value_template: String,

    /// The schema to use. Must be `default` or omitted to select the default schema.
    ///
    /// Default: `default`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema: String,

    /// The MQTT topic subscribed to receive state updates. A "None" payload resets to an `unknown`
    /// state. An empty payload is ignored. By default, valid state payloads are `OFF` and `ON`. The
    /// accepted payloads can be overridden with the `payload_off` and `payload_on` config options.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the state value. The template should return the `payload_on` and `payload_off`
    /// values, so if your light uses `power on` to turn on, your `state_value_template` string
    /// should return `power on` when the switch is on. For example, if the message is just `on`,
    /// your `state_value_template` should be `power {{ value }}`. When your `payload_on = 27` and
    /// `payload_off = 'off'`, then this template might be `'off' if
    /// value_json.my_custom_brightness_field <= 0 else 27`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_value_template: String,

    /// An ID that uniquely identifies this light. If two lights have the same unique ID, Home
    /// Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// The MQTT topic to publish commands to change the light to white mode with a given
    /// brightness.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub white_command_topic: String,

    /// Defines the maximum white level (i.e., 100%) of the MQTT device.
    ///
    /// Default: `255`
    #[serde(skip_serializing_if = "is_default")]
    pub white_scale: i64,

    /// Defines a [template](/docs/configuration/templating/) to compose message which will be sent
    /// to `xy_command_topic`. Available variables: `x` and `y`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xy_command_template: String,

    /// The MQTT topic to publish commands to change the light's XY state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xy_command_topic: String,

    /// The MQTT topic subscribed to receive XY state updates. The expected payload is the X and Y
    /// color values separated by commas, for example, `0.675,0.322`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xy_state_topic: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the XY value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xy_value_template: String,
}

impl Announce for Light {
    const COMPONENT: Component = Component::Light;

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
