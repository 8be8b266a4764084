//! Discovery payloads, one type per component.
//!
//! The files are generated by `discovery-gen` from the Home Assistant documentation. Regenerate
//! them instead of editing.

mod alarmcontrolpanel;
mod binarysensor;
mod camera;
mod climate;
mod cover;
mod devicetracker;
mod devicetrigger;
mod fan;
mod humidifier;
mod light;
mod lock;
mod number;
mod scene;
mod select;
mod sensor;
mod switch;
mod tag;
mod vacuum;

pub use alarmcontrolpanel::*;
pub use binarysensor::*;
pub use camera::*;
pub use climate::*;
pub use cover::*;
pub use devicetracker::*;
pub use devicetrigger::*;
pub use fan::*;
pub use humidifier::*;
pub use light::*;
pub use lock::*;
pub use number::*;
pub use scene::*;
pub use select::*;
pub use sensor::*;
pub use switch::*;
pub use tag::*;
pub use vacuum::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{fallback_id, Announce, Availability, Component, Device};
    use serde_json::json;

    #[test]
    fn test_topic_unique_id() {
        let sensor = BinarySensor {
            unique_id: "abc123".into(),
            name: "ignored".into(),
            state_topic: "some/topic".into(),
            ..Default::default()
        };
        assert_eq!(
            sensor.topic_for("homeassistant"),
            "homeassistant/binary_sensor/abc123/config"
        );
    }

    #[test]
    fn test_topic_name() {
        let sensor = Sensor {
            name: "My Sensor".into(),
            ..Default::default()
        };
        assert_eq!(sensor.topic_for("ha"), "ha/sensor/My Sensor/config");
    }

    #[test]
    fn test_topic_fallback() {
        let switch = Switch {
            command_topic: "switch/set".into(),
            ..Default::default()
        };
        let topic = switch.topic_for("homeassistant");
        assert_eq!(
            topic,
            format!("homeassistant/switch/{}/config", fallback_id(&switch))
        );
        assert_eq!(topic, switch.clone().topic_for("homeassistant"));
    }

    #[test]
    fn test_topic_without_unique_id() {
        // no unique_id option, so always the fallback
        let trigger = DeviceTrigger {
            automation_type: "trigger".into(),
            topic: "buttons/1".into(),
            r#type: "button_short_press".into(),
            subtype: "button_1".into(),
            ..Default::default()
        };
        assert_eq!(
            trigger.topic_for("homeassistant"),
            format!(
                "homeassistant/device_trigger/{}/config",
                fallback_id(&trigger)
            )
        );
        assert_eq!(Tag::COMPONENT, Component::Tag);
    }

    #[test]
    fn test_required_always_serialized() {
        assert_eq!(
            serde_json::to_value(Switch::default()).unwrap(),
            json!({
                "command_topic": "",
                "platform": "",
            })
        );
        assert_eq!(
            serde_json::to_value(Tag::default()).unwrap(),
            json!({
                "device": null,
                "topic": "",
            })
        );
    }

    #[test]
    fn test_optional_omitted() {
        let value = serde_json::to_value(BinarySensor {
            state_topic: "some/topic".into(),
            force_update: false,
            qos: 0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value, json!({ "state_topic": "some/topic" }));
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_value(Light {
                availability: vec![Availability::new("light/status")],
                command_topic: "light/set".into(),
                brightness_scale: 100,
                device: Some(Device {
                    identifiers: vec!["light-1".into()],
                    name: Some("Ceiling".into()),
                    ..Default::default()
                }),
                effect_list: vec!["rainbow".into(), "colorloop".into()],
                optimistic: true,
                platform: "light".into(),
                unique_id: "light-1-main".into(),
                ..Default::default()
            })
            .unwrap(),
            json!({
                "availability": [{ "topic": "light/status" }],
                "brightness_scale": 100,
                "command_topic": "light/set",
                "device": {
                    "identifiers": ["light-1"],
                    "name": "Ceiling",
                },
                "effect_list": ["rainbow", "colorloop"],
                "optimistic": true,
                "platform": "light",
                "unique_id": "light-1-main",
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let light = Light {
            name: "Living room".into(),
            availability: vec![Availability {
                payload_available: Some("up".into()),
                ..Availability::new("light/status")
            }],
            effect_list: vec!["rainbow".into()],
            brightness_scale: 255,
            command_topic: "light/set".into(),
            qos: 1,
            retain: true,
            ..Default::default()
        };

        let payload = serde_json::to_vec(&light).unwrap();
        let parsed: Light = serde_json::from_slice(&payload).unwrap();

        assert_eq!(parsed, light);

        let climate = Climate {
            mode_command_topic: "climate/mode/set".into(),
            max_temp: "30".into(),
            ..Default::default()
        };
        let parsed: Climate =
            serde_json::from_value(serde_json::to_value(&climate).unwrap()).unwrap();
        assert_eq!(parsed, climate);
    }

    #[test]
    fn test_announcement() {
        let announcement = Number {
            command_topic: "number/set".into(),
            unique_id: "n1".into(),
            ..Default::default()
        }
        .announcement("homeassistant")
        .unwrap();

        assert_eq!(announcement.topic, "homeassistant/number/n1/config");
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&announcement.payload).unwrap(),
            json!({ "command_topic": "number/set", "unique_id": "n1" })
        );
    }
}
