//! Discovery payload of the `camera` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `camera` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Camera {
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

    /// Information about the device this camera is a part of to tie it into the [device
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

    /// The encoding of the payloads received. Set to `""` to disable decoding of incoming payload.
    /// Use `image_encoding` to enable `Base64` decoding on `topic`.
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

    /// The encoding of the image payloads received. Set to `"b64"` to enable base64 decoding of
    /// image payload. If not set, the image payload must be raw binary data.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_encoding: String,

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

    /// The name of the camera. Can be set to `null` if only the device name is relevant.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Used instead of `name` for automatic generation of `entity_id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_id: String,

    /// The MQTT topic to subscribe to.
    pub topic: String,

    /// An ID that uniquely identifies this camera. If two cameras have the same unique ID Home
    /// Assistant will raise an exception. Required when used with device-based discovery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Camera {
    const COMPONENT: Component = Component::Camera;

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
