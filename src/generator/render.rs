use crate::generator::{
    naming::unraw,
    schema::{EntitySchema, Field},
    types::FieldType,
    Error,
};
use serde_yaml::Value;
use std::fmt::Write;

/// Maximum width of generated comment lines.
const WIDTH: usize = 100;

/// Render the Rust source of a schema: the record type and its `Announce` implementation.
pub fn render(schema: &EntitySchema) -> Result<String, Error> {
    let mut out = String::new();

    writeln!(
        out,
        "//! Discovery payload of the `{}` component, generated by `discovery-gen`.",
        schema.stem
    )?;
    writeln!(out)?;
    render_imports(&mut out, schema)?;
    writeln!(out)?;

    writeln!(out, "/// Discovery payload of a `{}` entity.", schema.stem)?;
    writeln!(
        out,
        "#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]"
    )?;
    writeln!(
        out,
        r#"#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]"#
    )?;
    writeln!(out, "#[serde(default)]")?;
    writeln!(out, "pub struct {} {{", schema.name)?;
    for (i, field) in schema.fields.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_field(&mut out, field)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    render_announce(&mut out, schema)?;

    Ok(out)
}

fn render_imports(out: &mut String, schema: &EntitySchema) -> Result<(), Error> {
    let uses = |ty: FieldType| schema.fields.iter().any(|field| field.ty == ty);
    let prioritized = has_object_id(schema);

    let mut model = Vec::new();
    if prioritized {
        model.push("fallback_id");
    }
    model.push("Announce");
    if uses(FieldType::Availability) {
        model.push("Availability");
    }
    model.push("Component");
    if uses(FieldType::Device) {
        model.push("Device");
    }

    writeln!(out, "use crate::model::{{{}}};", model.join(", "))?;
    let skips_default = schema.fields.iter().any(|field| {
        !field.required && matches!(field.ty, FieldType::Integer | FieldType::Boolean)
    });
    if skips_default {
        writeln!(out, "use crate::utils::is_default;")?;
    }
    if prioritized {
        writeln!(out, "use std::borrow::Cow;")?;
    }

    Ok(())
}

fn render_field(out: &mut String, field: &Field) -> Result<(), Error> {
    let indent = "    ";

    write_doc(out, indent, &field.description)?;
    if let Some(default) = &field.default {
        if !field.description.is_empty() {
            writeln!(out, "{indent}///")?;
        }
        writeln!(out, "{indent}/// Default: `{}`", render_value(default))?;
    }

    if unraw(&field.ident) != field.key {
        writeln!(out, "{indent}#[serde(rename = {:?})]", field.key)?;
    }
    if !field.required {
        writeln!(
            out,
            r#"{indent}#[serde(skip_serializing_if = "{}")]"#,
            field.ty.skip_predicate()
        )?;
    }
    writeln!(out, "{indent}pub {}: {},", field.ident, field.ty.rust_type())?;

    Ok(())
}

fn render_announce(out: &mut String, schema: &EntitySchema) -> Result<(), Error> {
    writeln!(out, "impl Announce for {} {{", schema.name)?;
    match schema.component {
        Some(component) => writeln!(
            out,
            "    const COMPONENT: Component = Component::{component:?};"
        )?,
        None => writeln!(
            out,
            "    const COMPONENT: Component = Component::Other({:?});",
            schema.stem
        )?,
    }

    if has_object_id(schema) {
        writeln!(out)?;
        writeln!(out, "    fn object_id(&self) -> Cow<'_, str> {{")?;
        let mut keyword = "if";
        for key in ["unique_id", "name"] {
            if let Some(field) = schema.id_field(key) {
                writeln!(out, "        {keyword} !self.{0}.is_empty() {{", field.ident)?;
                writeln!(out, "            Cow::Borrowed(self.{}.as_str())", field.ident)?;
                keyword = "} else if";
            }
        }
        writeln!(out, "        }} else {{")?;
        writeln!(out, "            Cow::Owned(fallback_id(self))")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
    }

    writeln!(out, "}}")?;

    Ok(())
}

/// Only a `unique_id` enables the name and id based object ids.
fn has_object_id(schema: &EntitySchema) -> bool {
    schema.id_field("unique_id").is_some()
}

fn render_value(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.replace('`', "'"),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    };

    // a doc comment ends at the line break
    rendered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Write text as doc comment, keeping paragraphs and wrapping lines.
fn write_doc(out: &mut String, indent: &str, text: &str) -> Result<(), Error> {
    let width = WIDTH.saturating_sub(indent.len() + 4).max(20);

    let paragraphs = text
        .split("\n\n")
        .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>())
        .filter(|words| !words.is_empty());

    for (i, words) in paragraphs.enumerate() {
        if i > 0 {
            writeln!(out, "{indent}///")?;
        }
        for line in wrap(&words, width) {
            // a fence would turn the description into a doc test
            writeln!(out, "{indent}/// {}", line.replace("```", r"\`\`\`"))?;
        }
    }

    Ok(())
}

fn wrap(words: &[&str], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Component;

    fn field(key: &str, ty: FieldType, required: bool) -> Field {
        Field {
            key: key.into(),
            ident: crate::generator::naming::field_ident(key),
            ty,
            required,
            description: String::new(),
            default: None,
        }
    }

    fn schema(stem: &str, component: Option<Component>, fields: Vec<Field>) -> EntitySchema {
        EntitySchema {
            stem: stem.into(),
            name: crate::generator::naming::pascal_case(stem),
            component,
            fields,
        }
    }

    #[test]
    fn test_render_with_unique_id() {
        let source = render(&schema(
            "switch",
            Some(Component::Switch),
            vec![
                field("availability", FieldType::Availability, false),
                field("command_topic", FieldType::String, true),
                field("name", FieldType::String, false),
                field("qos", FieldType::Integer, false),
                field("unique_id", FieldType::String, false),
            ],
        ))
        .unwrap();

        assert_eq!(
            source,
            r#"//! Discovery payload of the `switch` component, generated by `discovery-gen`.

use crate::model::{fallback_id, Announce, Availability, Component};
use crate::utils::is_default;
use std::borrow::Cow;

/// Discovery payload of a `switch` entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Switch {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<Availability>,

    pub command_topic: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "is_default")]
    pub qos: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_id: String,
}

impl Announce for Switch {
    const COMPONENT: Component = Component::Switch;

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
"#
        );
    }

    #[test]
    fn test_render_without_unique_id() {
        let mut device = field("device", FieldType::Device, true);
        device.description = "Information about the device.".into();
        let mut kind = field("type", FieldType::String, true);
        kind.default = Some(Value::String("button_short_press".into()));

        let source = render(&schema(
            "device_trigger",
            Some(Component::DeviceTrigger),
            vec![device, kind],
        ))
        .unwrap();

        assert!(source.contains("use crate::model::{Announce, Component, Device};\n\n"));
        assert!(!source.contains("is_default"));
        assert!(!source.contains("Cow"));
        assert!(source.contains(
            "    /// Information about the device.\n    pub device: Option<Device>,\n"
        ));
        assert!(source.contains(
            "    /// Default: `button_short_press`\n    pub r#type: String,\n"
        ));
        assert!(source.ends_with(
            "impl Announce for DeviceTrigger {\n    const COMPONENT: Component = Component::DeviceTrigger;\n}\n"
        ));
    }

    #[test]
    fn test_render_other_component() {
        let source = render(&schema(
            "button",
            None,
            vec![field("command_topic", FieldType::String, true)],
        ))
        .unwrap();

        assert!(source.contains("pub struct Button {\n    pub command_topic: String,\n}\n"));
        assert!(source.ends_with(
            "impl Announce for Button {\n    const COMPONENT: Component = Component::Other(\"button\");\n}\n"
        ));
    }

    #[test]
    fn test_render_required_integers_without_skip_import() {
        let source = render(&schema(
            "number",
            Some(Component::Number),
            vec![
                field("max", FieldType::Integer, true),
                field("optimistic", FieldType::Boolean, true),
            ],
        ))
        .unwrap();

        assert!(!source.contains("is_default"));
        assert!(source.contains("    pub max: i64,\n"));
    }

    #[test]
    fn test_render_multiline_default() {
        let mut payload = field("payload_on", FieldType::String, false);
        payload.default = Some(Value::String("line one\nline two".into()));

        let source = render(&schema("switch", Some(Component::Switch), vec![payload])).unwrap();

        assert!(source.contains("    /// Default: `line one line two`\n"));
        assert!(source
            .lines()
            .all(|line| !line.trim_start().starts_with("line two")));
    }

    #[test]
    fn test_render_escaped_rename() {
        let odd = field(r#"payload "on"\x"#, FieldType::String, false);
        assert_eq!(odd.ident, "payload__on__x");

        let source = render(&schema("switch", Some(Component::Switch), vec![odd])).unwrap();

        assert!(source.contains(r#"    #[serde(rename = "payload \"on\"\\x")]"#));
    }

    #[test]
    fn test_write_doc() {
        let mut out = String::new();
        let text = format!(
            "{}\n\nSecond  paragraph\nwith ```code```.",
            ["word"; 30].join(" ")
        );
        write_doc(&mut out, "    ", &text).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert!(lines.iter().all(|line| line.len() <= WIDTH));
        assert!(lines.iter().all(|line| line.starts_with("    ///")));
        assert!(lines.contains(&"    ///"));
        assert_eq!(
            lines.last(),
            Some(&r"    /// Second paragraph with \`\`\`code\`\`\`.")
        );
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&Value::String("online".into())), "online");
        assert_eq!(render_value(&Value::Bool(false)), "false");
        assert_eq!(render_value(&Value::Number(255.into())), "255");
    }
}
