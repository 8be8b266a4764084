//! Discovery payload of the `scene` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `scene` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Scene {
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

    /// The MQTT topic to publish commands to change the scene state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_topic: String,

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

    /// Icon for the scene.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// The name to use when displaying this scene.
    ///
    /// Default: `MQTT Scene`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

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

    /// The payload that represents `on` state. If specified, will be used for both comparing to the
    /// value in the `state_topic` (see `value_template` and `state_on` for details) and sending as
    /// `on` command to the `command_topic`.
    ///
    /// Default: `ON`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_on: String,

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

    /// An ID that uniquely identifies this scene entity. If two scenes have the same unique ID,
    /// Home Assistant will raise an exception.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Scene {
    const COMPONENT: Component = Component::Scene;

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
