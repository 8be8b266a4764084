//! Discovery payload of the `tag` component, generated by `discovery-gen`.

use crate::model::{Announce, Component, Device};

/// Discovery payload of a `tag` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Tag {
    /// Information about the device this device trigger is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). At least
    /// one of identifiers or connections must be present to identify the device.
    pub device: Option<Device>,

    /// The MQTT topic subscribed to receive tag scanned events.
    pub topic: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) that returns
    /// a tag ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Tag {
    const COMPONENT: Component = Component::Tag;
}
