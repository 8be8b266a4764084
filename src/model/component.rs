use std::fmt::Formatter;

/// The Home Assistant component an entity belongs to.
///
/// The catalog kinds have their own variant, any other component name is carried by
/// [`Component::Other`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Component {
    AlarmControlPanel,
    BinarySensor,
    Camera,
    Climate,
    Cover,
    DeviceTracker,
    DeviceTrigger,
    Fan,
    Humidifier,
    Light,
    Lock,
    Number,
    Scene,
    Select,
    Sensor,
    Switch,
    Tag,
    Vacuum,
    /// A component without a catalog type, like `button`.
    Other(&'static str),
}

impl Component {
    /// The components of the catalog.
    pub const KNOWN: [Component; 18] = [
        Self::AlarmControlPanel,
        Self::BinarySensor,
        Self::Camera,
        Self::Climate,
        Self::Cover,
        Self::DeviceTracker,
        Self::DeviceTrigger,
        Self::Fan,
        Self::Humidifier,
        Self::Light,
        Self::Lock,
        Self::Number,
        Self::Scene,
        Self::Select,
        Self::Sensor,
        Self::Switch,
        Self::Tag,
        Self::Vacuum,
    ];

    /// Look up the catalog component of a name, `None` for anything else.
    pub fn known(name: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|component| component.as_ref() == name)
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        match self {
            Self::AlarmControlPanel => "alarm_control_panel",
            Self::BinarySensor => "binary_sensor",
            Self::Camera => "camera",
            Self::Climate => "climate",
            Self::Cover => "cover",
            Self::DeviceTracker => "device_tracker",
            Self::DeviceTrigger => "device_trigger",
            Self::Fan => "fan",
            Self::Humidifier => "humidifier",
            Self::Light => "light",
            Self::Lock => "lock",
            Self::Number => "number",
            Self::Scene => "scene",
            Self::Select => "select",
            Self::Sensor => "sensor",
            Self::Switch => "switch",
            Self::Tag => "tag",
            Self::Vacuum => "vacuum",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Component::AlarmControlPanel.as_ref(), "alarm_control_panel");
        assert_eq!(Component::BinarySensor.to_string(), "binary_sensor");
        assert_eq!(Component::Other("button").to_string(), "button");
    }

    #[test]
    fn test_known() {
        assert_eq!(
            Component::known("device_trigger"),
            Some(Component::DeviceTrigger)
        );
        assert_eq!(Component::known("button"), None);

        for component in Component::KNOWN {
            assert_eq!(Component::known(component.as_ref()), Some(component));
        }
    }
}
