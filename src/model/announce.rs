use crate::model::{fallback_id, Component};
use crate::Error;
use std::borrow::Cow;

/// A discovery payload, ready to be published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub topic: String,
    pub payload: Vec<u8>,
}

/// Something that can announce itself to Home Assistant.
///
/// Publish the serialized value to the topic returned by [`Announce::topic_for`]. The topic has
/// the format `<discovery_prefix>/<component>/<object_id>/config`.
pub trait Announce: serde::Serialize {
    /// The component this type announces.
    const COMPONENT: Component;

    /// The object id of the topic, defaults to a hash of the content.
    fn object_id(&self) -> Cow<'_, str> {
        Cow::Owned(fallback_id(self))
    }

    /// Render the announce topic below `prefix`, for example `homeassistant`.
    fn topic_for(&self, prefix: &str) -> String {
        format!(
            "{prefix}/{component}/{object_id}/config",
            component = Self::COMPONENT,
            object_id = self.object_id(),
        )
    }

    /// Render topic and JSON payload.
    fn announcement(&self, prefix: &str) -> Result<Announcement, Error> {
        let topic = self.topic_for(prefix);
        let payload = serde_json::to_vec(self)?;

        log::debug!(
            "announce {component} on {topic}: {payload}",
            component = Self::COMPONENT,
            payload = String::from_utf8_lossy(&payload)
        );

        Ok(Announcement { topic, payload })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(serde::Serialize)]
    struct Anonymous {
        state_topic: String,
    }

    impl Announce for Anonymous {
        const COMPONENT: Component = Component::BinarySensor;
    }

    #[test]
    fn test_default_object_id() {
        let value = Anonymous {
            state_topic: "some/topic".into(),
        };
        assert_eq!(
            value.topic_for("homeassistant"),
            format!("homeassistant/binary_sensor/{}/config", fallback_id(&value))
        );
    }

    #[test]
    fn test_announcement() {
        let announcement = Anonymous {
            state_topic: "some/topic".into(),
        }
        .announcement("ha")
        .unwrap();

        assert!(announcement.topic.starts_with("ha/binary_sensor/"));
        assert_eq!(announcement.payload, br#"{"state_topic":"some/topic"}"#);
    }
}
