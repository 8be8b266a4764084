//! Discovery payload of the `device_trigger` component, generated by `discovery-gen`.

use crate::model::{Announce, Component, Device};
use crate::utils::is_default;

/// Discovery payload of a `device_trigger` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct DeviceTrigger {
    /// The type of automation, must be 'trigger'.
    pub automation_type: String,

    /// Information about the device this device trigger is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). At least
    /// one of identifiers or connections must be present to identify the device.
    pub device: Option<Device>,

    /// Optional payload to match the payload being sent over the topic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload: String,

    /// Must be `device_automation`. Only allowed and required in [MQTT auto discovery device
    /// messages](/integrations/mqtt/#device-discovery-payload)
    pub platform: String,

    /// The maximum QoS level to be used when receiving and publishing messages.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    /// The subtype of the trigger, e.g. `button_1`. Entries supported by the frontend: `turn_on`,
    /// `turn_off`, `button_1`, `button_2`, `button_3`, `button_4`, `button_5`, `button_6`. If set
    /// to an unsupported value, will render as `subtype type`, e.g. `left_button pressed` with
    /// `type` set to `button_short_press` and `subtype` set to `left_button`.
    pub subtype: String,

    /// The MQTT topic subscribed to receive trigger events.
    pub topic: String,

    /// The type of the trigger, e.g. `button_short_press`. Entries supported by the frontend:
    /// `button_short_press`, `button_short_release`, `button_long_press`, `button_long_release`,
    /// `button_double_press`, `button_triple_press`, `button_quadruple_press`,
    /// `button_quintuple_press`. If set to an unsupported value, will render as `subtype type`,
    /// e.g. `button_1 spammed` with `type` set to `spammed` and `subtype` set to `button_1`.
    pub r#type: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract the value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for DeviceTrigger {
    const COMPONENT: Component = Component::DeviceTrigger;
}
