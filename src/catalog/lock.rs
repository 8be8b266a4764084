//! Discovery payload of the `lock` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `lock` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Lock {
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

    /// A regular expression to validate a supplied code when it is set during the action to `open`,
    /// `lock` or `unlock` the MQTT lock.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code_format: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// generate the payload to send to `command_topic`. The lock command template accepts the
    /// parameters `value` and `code`. The `value` parameter will contain the configured value for
    /// either `payload_open`, `payload_lock` or `payload_unlock`. The `code` parameter is set
    /// during the action to `open`, `lock` or `unlock` the MQTT lock and will be set `None` if no
    /// code was passed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_template: String,

    /// The MQTT topic to publish commands to change the lock state.
    pub command_topic: String,

    /// Information about the device this lock is a part of to tie it into the [device
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

    /// The name of the lock. Can be set to `null` if only the device name is relevant.
    ///
    /// Default: `MQTT Lock`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// Flag that defines if lock works in optimistic mode.
    ///
    /// Default: `'true' if no 'state_topic' defined, else 'false'.`
    #[serde(skip_serializing_if = "is_default")]
    pub optimistic: bool,

    /// The payload that represents the available state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The payload sent to the lock to lock it.
    ///
    /// Default: `LOCK`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_lock: String,

    /// The payload that represents the unavailable state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The payload sent to the lock to open it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_open: String,

    /// A special payload that resets the state to `unknown` when received on the `state_topic`.
    ///
    /// Default: `"None"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_reset: String,

    /// The payload sent to the lock to unlock it.
    ///
    /// Default: `UNLOCK`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_unlock: String,

    /// Must be `lock`. Only allowed and required in [MQTT auto discovery device
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

    /// The payload sent to `state_topic` by the lock when it's jammed.
    ///
    /// Default: `JAMMED`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_jammed: String,

    /// The payload sent to `state_topic` by the lock when it's locked.
    ///
    /// Default: `LOCKED`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_locked: String,

    /// The payload sent to `state_topic` by the lock when it's locking.
    ///
    /// Default: `LOCKING`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_locking: String,

    /// The MQTT topic subscribed to receive state updates. It accepts states configured with
    /// `state_jammed`, `state_locked`, `state_unlocked`, `state_locking` or `state_unlocking`. A
    /// "None" payload resets to an `unknown` state. An empty payload is ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// The payload sent to `state_topic` by the lock when it's unlocked.
    ///
    /// Default: `UNLOCKED`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_unlocked: String,

    /// The payload sent to `state_topic` by the lock when it's unlocking.
    ///
    /// Default: `UNLOCKING`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_unlocking: String,

    /// An ID that uniquely identifies this lock. If two locks have the same unique ID, Home
    /// Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines a
    /// [template](/docs/configuration/templating/#using-templates-with-the-mqtt-integration) to
    /// extract a state value from the payload.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Lock {
    const COMPONENT: Component = Component::Lock;

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
