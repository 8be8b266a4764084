use crate::generator::Error;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::ops::Range;

/// Start of the options table in an integration document.
pub const CONFIGURATION_START: &str = "{% configuration %}";
/// End of the options table in an integration document.
pub const CONFIGURATION_END: &str = "{% endconfiguration %}";

/// One row of the options table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct OptionDescriptor {
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// A type tag like `string`, or a list of them. Missing is `null`, which doesn't resolve.
    #[serde(default, rename = "type")]
    pub kind: Value,
    /// Nested options of `map` and `list` types.
    #[serde(default)]
    pub keys: Option<BTreeMap<String, Value>>,
}

/// The options table of one integration document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// The document name, like `binary_sensor`.
    pub stem: String,
    /// Options by name, sorted.
    pub options: BTreeMap<String, OptionDescriptor>,
}

impl Document {
    pub fn parse(stem: impl Into<String>, content: &[u8]) -> Result<Self, Error> {
        let range = extract_block(content)?;
        let options = parse_block(content, range)?;

        let stem = stem.into();
        log::debug!("{stem}: {} options", options.len());

        Ok(Self { stem, options })
    }
}

/// Locate the bytes between the configuration markers.
pub fn extract_block(content: &[u8]) -> Result<Range<usize>, Error> {
    let start = find(content, CONFIGURATION_START.as_bytes())
        .ok_or(Error::MissingMarker(CONFIGURATION_START))?
        + CONFIGURATION_START.len();

    // only an end marker after the start marker counts
    let end = find(&content[start..], CONFIGURATION_END.as_bytes())
        .ok_or(Error::MissingMarker(CONFIGURATION_END))?
        + start;

    Ok(start..end)
}

pub fn parse_block(
    content: &[u8],
    range: Range<usize>,
) -> Result<BTreeMap<String, OptionDescriptor>, Error> {
    let block = &content[range.clone()];

    serde_yaml::from_slice(block).map_err(|source| {
        log::error!(
            "Malformed configuration block at bytes {}..{}:\n{}",
            range.start,
            range.end,
            String::from_utf8_lossy(block)
        );
        Error::Yaml { range, source }
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod test {
    use super::*;

    const DOCUMENT: &str = r#"---
title: "MQTT Binary sensor"
---

## Configuration

{% configuration %}
state_topic:
  description: The MQTT topic subscribed to receive sensor's state.
  required: true
  type: string
off_delay:
  description: >
    For sensors that only send `on` state updates (like PIRs),
    this variable sets a delay in seconds.
  required: false
  type: integer
device:
  description: Information about the device.
  required: false
  type: map
  keys:
    name:
      description: The name of the device.
      required: false
      type: string
{% endconfiguration %}

## Examples
"#;

    #[test]
    fn test_parse() {
        let document = Document::parse("binary_sensor", DOCUMENT.as_bytes()).unwrap();

        assert_eq!(document.stem, "binary_sensor");
        assert_eq!(
            document.options.keys().collect::<Vec<_>>(),
            vec!["device", "off_delay", "state_topic"]
        );

        let state_topic = &document.options["state_topic"];
        assert!(state_topic.required);
        assert_eq!(state_topic.kind, Value::String("string".into()));
        assert_eq!(state_topic.default, None);

        let off_delay = &document.options["off_delay"];
        assert!(!off_delay.required);
        assert!(off_delay.description.starts_with("For sensors"));

        assert!(document.options["device"]
            .keys
            .as_ref()
            .is_some_and(|keys| keys.contains_key("name")));
    }

    #[test]
    fn test_missing_start() {
        let err = Document::parse("x", b"state_topic:\n  type: string\n{% endconfiguration %}")
            .unwrap_err();
        assert!(matches!(err, Error::MissingMarker(CONFIGURATION_START)));
    }

    #[test]
    fn test_missing_end() {
        let err = Document::parse("x", b"{% configuration %}\nstate_topic:\n  type: string\n")
            .unwrap_err();
        assert!(matches!(err, Error::MissingMarker(CONFIGURATION_END)));
    }

    #[test]
    fn test_end_before_start() {
        let err = Document::parse("x", b"{% endconfiguration %}\n{% configuration %}\n")
            .unwrap_err();
        assert!(matches!(err, Error::MissingMarker(CONFIGURATION_END)));
    }

    #[test]
    fn test_malformed_block() {
        let content = b"intro\n{% configuration %}\nstate_topic: [unclosed\n{% endconfiguration %}";
        let err = Document::parse("x", content).unwrap_err();
        match err {
            Error::Yaml { range, .. } => {
                assert_eq!(range.start, "intro\n{% configuration %}".len());
                assert_eq!(&content[range.end..], b"{% endconfiguration %}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
