//! Discovery payload of the `alarm_control_panel` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `alarm_control_panel` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct AlarmControlPanel {
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

    /// If defined, specifies a code to enable or disable the alarm in the frontend. Note that the
    /// code is validated locally and blocks sending MQTT messages to the remote device. For remote
    /// code validation, the code can be configured to either of the special values `REMOTE_CODE`
    /// (numeric code) or `REMOTE_CODE_TEXT` (text code). In this case, local code validation is
    /// bypassed but the frontend will still show a numeric or text code dialog. Use
    /// `command_template` to send the code to the remote device. Example configurations for remote
    /// code validation [can be found here](#configurations-with-remote-code-validation)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,

    /// If true the code is required to arm the alarm. If false the code is not validated.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub code_arm_required: bool,

    /// If true the code is required to disarm the alarm. If false the code is not validated.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub code_disarm_required: bool,

    /// If true the code is required to trigger the alarm. If false the code is not validated.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub code_trigger_required: bool,

    /// The [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration)
    /// used for the command payload. Available variables: `action` and `code`.
    ///
    /// Default: `action`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_template: String,

    /// The MQTT topic to publish commands to change the alarm state.
    pub command_topic: String,

    /// Information about the device this alarm panel is a part of to tie it into the [device
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

    /// The name of the alarm. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Alarm`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// The payload to set armed-away mode on your Alarm Panel.
    ///
    /// Default: `ARM_AWAY`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_arm_away: String,

    /// The payload to set armed-custom-bypass mode on your Alarm Panel.
    ///
    /// Default: `ARM_CUSTOM_BYPASS`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_arm_custom_bypass: String,

    /// The payload to set armed-home mode on your Alarm Panel.
    ///
    /// Default: `ARM_HOME`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_arm_home: String,

    /// The payload to set armed-night mode on your Alarm Panel.
    ///
    /// Default: `ARM_NIGHT`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_arm_night: String,

    /// The payload to set armed-vacation mode on your Alarm Panel.
    ///
    /// Default: `ARM_VACATION`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_arm_vacation: String,

    /// The payload that represents the available state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The payload to disarm your Alarm Panel.
    ///
    /// Default: `DISARM`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_disarm: String,

    /// The payload that represents the unavailable state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The payload to trigger the alarm on your Alarm Panel.
    ///
    /// Default: `TRIGGER`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_trigger: String,

    /// Must be `alarm_control_panel`. Only allowed and required in [MQTT auto discovery device
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

    /// The MQTT topic subscribed to receive state updates. A "None" payload resets to an `unknown`
    /// state. An empty payload is ignored. Valid state payloads are: `armed_away`,
    /// `armed_custom_bypass`, `armed_home`, `armed_night`, `armed_vacation`, `arming`, `disarmed`,
    /// `disarming` `pending` and `triggered`.
    pub state_topic: String,

    /// A list of features that the alarm control panel supports. The available list options are
    /// `arm_home`, `arm_away`, `arm_night`, `arm_vacation`, `arm_custom_bypass`, and `trigger`.
    ///
    /// Default: `[arm_home arm_away arm_night arm_vacation arm_custom_bypass trigger]`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub supported_features: String,

    /// An ID that uniquely identifies this alarm panel. If two alarm panels have the same unique
    /// ID, Home Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for AlarmControlPanel {
    const COMPONENT: Component = Component::AlarmControlPanel;

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
