#![cfg(feature = "generator")]

use homeassistant_discovery::generator::{generate, generate_from, Error, GeneratorOptions};
use std::path::PathBuf;

const MINIMAL: &str = r#"# MQTT Binary sensor

{% configuration %}
state_topic:
  description: The MQTT topic subscribed to receive sensor's state.
  required: true
  type: string
retain:
  description: If the published message should have the retain flag on or not.
  required: false
  type: boolean
  default: false
{% endconfiguration %}
"#;

fn write_document(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_minimal_document() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = write_document(&dir, "binary_sensor.mqtt.markdown", MINIMAL);

    let generated = generate(&GeneratorOptions::new(path.to_string_lossy()))?;

    assert_eq!(generated.file_name, "binarysensor.rs");

    let fields: Vec<_> = generated
        .source
        .lines()
        .filter(|line| line.starts_with("    pub "))
        .collect();
    assert_eq!(
        fields,
        vec!["    pub retain: bool,", "    pub state_topic: String,"]
    );

    // retain is skipped when false, state_topic always present
    assert!(generated.source.contains(
        "    /// Default: `false`\n    #[serde(skip_serializing_if = \"is_default\")]\n    pub retain: bool,\n"
    ));
    assert!(generated.source.contains(
        "    /// The MQTT topic subscribed to receive sensor's state.\n    pub state_topic: String,\n"
    ));

    // no unique_id, so only the fallback id
    assert!(generated.source.ends_with(
        "impl Announce for BinarySensor {\n    const COMPONENT: Component = Component::BinarySensor;\n}\n"
    ));
    assert!(!generated.source.contains("fn object_id"));

    let out = tempfile::tempdir()?;
    let written = generated.write_to(out.path())?;
    assert_eq!(written, out.path().join("binarysensor.rs"));
    assert_eq!(std::fs::read_to_string(written)?, generated.source);

    Ok(())
}

#[test]
fn test_matches_catalog() -> anyhow::Result<()> {
    let generated = generate_from(
        "tag",
        include_bytes!("fixtures/tag.mqtt.markdown"),
        true,
    )?;

    assert_eq!(generated.file_name, "tag.rs");
    assert_eq!(generated.source, include_str!("../src/catalog/tag.rs"));

    Ok(())
}

#[test]
fn test_missing_marker() {
    let err = generate_from("sensor", b"# no configuration here", false).unwrap_err();
    assert!(matches!(err, Error::MissingMarker(_)));
}

#[test]
fn test_unresolved_type() {
    let content = br#"{% configuration %}
payload_on:
  description: The payload that represents the on state.
  required: false
  type: [string, integer]
{% endconfiguration %}"#;

    let err = generate_from("binary_sensor", content, false).unwrap_err();
    assert!(err.to_string().contains("payload_on"), "{err}");
}

#[test]
fn test_other_component() -> anyhow::Result<()> {
    let content = br#"{% configuration %}
command_topic:
  description: The MQTT topic to publish commands to trigger the button.
  required: true
  type: string
unique_id:
  description: An ID that uniquely identifies this button entity.
  required: false
  type: string
{% endconfiguration %}"#;

    let generated = generate_from("button", content, false)?;

    assert_eq!(generated.file_name, "button.rs");
    assert!(generated.source.contains("pub struct Button {"));
    assert!(generated
        .source
        .contains("    const COMPONENT: Component = Component::Other(\"button\");\n"));
    assert!(generated.source.contains("fn object_id(&self)"));

    Ok(())
}

#[test]
fn test_multiline_default() -> anyhow::Result<()> {
    let content = br#"{% configuration %}
payload_on:
  description: The payload that represents the on state.
  required: false
  type: string
  default: "line one\nline two"
{% endconfiguration %}"#;

    let generated = generate_from("switch", content, false)?;

    assert!(generated
        .source
        .contains("    /// Default: `line one line two`\n"));
    for line in generated.source.lines() {
        let line = line.trim_start();
        assert!(
            line.is_empty()
                || line.starts_with("//")
                || line.starts_with("#[")
                || line.starts_with("pub ")
                || line.starts_with("use ")
                || line.starts_with("impl ")
                || line.starts_with("const ")
                || line == "}",
            "unexpected line: {line:?}"
        );
    }

    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sensor.mqtt.markdown");

    let err = generate(&GeneratorOptions::new(path.to_string_lossy())).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}
