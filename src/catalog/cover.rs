//! Discovery payload of the `cover` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component, Device};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `cover` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Cover {
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

    /// The MQTT topic subscribed to to receive birth and LWT messages from the MQTT cover device.
    /// If an `availability` topic is not defined, the cover availability state will always be
    /// `available`. If an `availability` topic is defined, the cover availability state will be
    /// `unavailable` by default. Must not be used together with `availability`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_topic: String,

    /// The MQTT topic to publish commands to control the cover.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_topic: String,

    /// Information about the device this cover is a part of to tie it into the [device
    /// registry](https://developers.home-assistant.io/docs/en/device_registry_index.html). Only
    /// works through [MQTT discovery](/docs/mqtt/discovery/) and when [`unique_id`](#unique_id) is
    /// set. At least one of identifiers or connections must be present to identify the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Sets the [class of the device](/integrations/cover/), changing the device state and icon
    /// that is displayed on the frontend.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_class: String,

    /// Flag which defines if the entity should be enabled when first added.
    ///
    /// Default: `true`
    #[serde(skip_serializing_if = "is_default")]
    pub enabled_by_default: bool,

    /// [Icon](/docs/configuration/customizing-devices/#icon) for the entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Defines a [template](/docs/configuration/templating/#processing-incoming-data) to extract
    /// the JSON dictionary from messages received on the `json_attributes_topic`. Usage example can
    /// be found in [MQTT sensor](/integrations/sensor.mqtt/#json-attributes-template-configuration)
    /// documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_template: String,

    /// The MQTT topic subscribed to receive a JSON dictionary payload and then set as sensor
    /// attributes. Usage example can be found in [MQTT
    /// sensor](/integrations/sensor.mqtt/#json-attributes-topic-configuration) documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_attributes_topic: String,

    /// The name of the cover.
    ///
    /// Default: `MQTT Cover`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Flag that defines if switch works in optimistic mode.
    ///
    /// Default: `'false' if state or position topic defined, else 'true'.`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub optimistic: String,

    /// The payload that represents the online state.
    ///
    /// Default: `online`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_available: String,

    /// The command payload that closes the cover.
    ///
    /// Default: `CLOSE`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_close: String,

    /// The payload that represents the offline state.
    ///
    /// Default: `offline`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_not_available: String,

    /// The command payload that opens the cover.
    ///
    /// Default: `OPEN`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_open: String,

    /// The command payload that stops the cover.
    ///
    /// Default: `STOP`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload_stop: String,

    /// Number which represents closed position.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub position_closed: i64,

    /// Number which represents open position.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "is_default")]
    pub position_open: i64,

    /// Defines a [template](/topics/templating/) that can be used to extract the payload for the
    /// `position_topic` topic. Within the template the following variables are available:
    /// `entity_id`, `position_open`; `position_closed`; `tilt_min`; `tilt_max`. The `entity_id` can
    /// be used to reference the entity's attributes with help of the
    /// [states](/docs/configuration/templating/#states) template function.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub position_template: String,

    /// The MQTT topic subscribed to receive cover position messages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub position_topic: String,

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

    /// Defines a [template](/topics/templating/) to define the position to be sent to the
    /// `set_position_topic` topic. Incoming position value is available for use in the template `{%
    /// raw %}{{ position }}{% endraw %}`. Within the template the following variables are
    /// available: `entity_id`, `position`, the target position in percent; `position_open`;
    /// `position_closed`; `tilt_min`; `tilt_max`. The `entity_id` can be used to reference the
    /// entity's attributes with help of the [states](/docs/configuration/templating/#states)
    /// template function.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub set_position_template: String,

    /// The MQTT topic to publish position commands to. You need to set position_topic as well if
    /// you want to use position topic. Use template if position topic wants different values than
    /// within range `position_closed` - `position_open`. If template is not defined and
    /// `position_closed != 100` and `position_open != 0` then proper position value is calculated
    /// from percentage position.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub set_position_topic: String,

    /// The payload that represents the closed state.
    ///
    /// Default: `closed`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_closed: String,

    /// The payload that represents the closing state.
    ///
    /// Default: `closing`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_closing: String,

    /// The payload that represents the open state.
    ///
    /// Default: `open`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_open: String,

    /// The payload that represents the opening state.
    ///
    /// Default: `opening`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_opening: String,

    /// The payload that represents the stopped state (for covers that do not report `open`/`closed`
    /// state)
    ///
    /// Default: `stopped`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_stopped: String,

    /// The MQTT topic subscribed to receive cover state messages. State topic can only read
    /// (`open`, `opening`, `closed`, `closing` or `stopped`) state.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_topic: String,

    /// The value that will be sent on a `close_cover_tilt` command.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub tilt_closed_value: i64,

    /// Defines a [template](/topics/templating/) that can be used to extract the payload for the
    /// `tilt_command_topic` topic. Within the template the following variables are available:
    /// `entity_id`, `tilt_position`, the target tilt position in percent; `position_open`;
    /// `position_closed`; `tilt_min`; `tilt_max`. The `entity_id` can be used to reference the
    /// entity's attributes with help of the [states](/docs/configuration/templating/#states)
    /// template function.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tilt_command_template: String,

    /// The MQTT topic to publish commands to control the cover tilt.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tilt_command_topic: String,

    /// The maximum tilt value.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "is_default")]
    pub tilt_max: i64,

    /// The minimum tilt value.
    ///
    /// Default: `0`
    #[serde(skip_serializing_if = "is_default")]
    pub tilt_min: i64,

    /// The value that will be sent on an `open_cover_tilt` command.
    ///
    /// Default: `100`
    #[serde(skip_serializing_if = "is_default")]
    pub tilt_opened_value: i64,

    /// Flag that determines if tilt works in optimistic mode.
    ///
    /// Default: `'true' if 'tilt_status_topic' is not defined, else 'false'`
    #[serde(skip_serializing_if = "is_default")]
    pub tilt_optimistic: bool,

    /// Defines a [template](/topics/templating/) that can be used to extract the payload for the
    /// `tilt_status_topic` topic. Within the template the following variables are available:
    /// `entity_id`, `position_open`; `position_closed`; `tilt_min`; `tilt_max`. The `entity_id` can
    /// be used to reference the entity's attributes with help of the
    /// [states](/docs/configuration/templating/#states) template function.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tilt_status_template: String,

    /// The MQTT topic subscribed to receive tilt status update values.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tilt_status_topic: String,

    /// An ID that uniquely identifies this cover. If two covers have the same unique ID, Home
    /// Assistant will raise an exception.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,

    /// Defines a [template](/topics/templating/) that can be used to extract the payload for the
    /// `state_topic` topic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_template: String,
}

impl Announce for Cover {
    const COMPONENT: Component = Component::Cover;

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
