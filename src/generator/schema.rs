use crate::generator::{
    document::Document,
    naming::{field_ident, pascal_case},
    types::{infer_type, FieldType},
    Error,
};
use crate::model::Component;
use serde_yaml::Value;
use std::collections::HashMap;

/// A generated field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// The option key, used as wire name.
    pub key: String,
    pub ident: String,
    pub ty: FieldType,
    /// Required fields are serialized even when empty.
    pub required: bool,
    pub description: String,
    pub default: Option<Value>,
}

/// The record type generated from one document.
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySchema {
    /// The document name, like `binary_sensor`.
    pub stem: String,
    /// The type name, like `BinarySensor`.
    pub name: String,
    /// The catalog component of the stem, `None` for other components.
    pub component: Option<Component>,
    /// Fields, sorted by key.
    pub fields: Vec<Field>,
}

impl EntitySchema {
    pub fn from_document(document: &Document, strict: bool) -> Result<Self, Error> {
        let component = Component::known(&document.stem);
        if component.is_none() {
            log::info!("{}: not a catalog component", document.stem);
        }

        let mut idents = HashMap::<String, &str>::new();
        let mut fields = Vec::with_capacity(document.options.len());

        for (key, option) in &document.options {
            let ident = field_ident(key);
            if let Some(first) = idents.insert(ident.clone(), key) {
                return Err(Error::Collision {
                    ident,
                    first: first.to_string(),
                    second: key.clone(),
                });
            }

            fields.push(Field {
                key: key.clone(),
                ident,
                ty: infer_type(key, &option.kind, strict)?,
                required: option.required,
                description: option.description.trim().to_string(),
                default: option.default.clone().filter(|value| !value.is_null()),
            });
        }

        Ok(Self {
            name: pascal_case(&document.stem),
            stem: document.stem.clone(),
            component,
            fields,
        })
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// A string field usable as object id.
    pub(crate) fn id_field(&self, key: &str) -> Option<&Field> {
        self.field(key).filter(|field| field.ty == FieldType::String)
    }

    /// The lowercased type name, plus `.rs`.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name.to_lowercase())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::document::OptionDescriptor;
    use std::collections::BTreeMap;

    fn option(kind: &str, required: bool) -> OptionDescriptor {
        OptionDescriptor {
            kind: Value::String(kind.into()),
            required,
            ..Default::default()
        }
    }

    fn document(stem: &str, options: &[(&str, OptionDescriptor)]) -> Document {
        Document {
            stem: stem.into(),
            options: options
                .iter()
                .map(|(key, option)| (key.to_string(), option.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_from_document() {
        let schema = EntitySchema::from_document(
            &document(
                "binary_sensor",
                &[
                    ("state_topic", option("string", true)),
                    ("qos", option("integer", false)),
                    ("device", option("map", false)),
                ],
            ),
            false,
        )
        .unwrap();

        assert_eq!(schema.name, "BinarySensor");
        assert_eq!(schema.component, Some(Component::BinarySensor));
        assert_eq!(schema.file_name(), "binarysensor.rs");
        assert_eq!(
            schema
                .fields
                .iter()
                .map(|f| (f.ident.as_str(), f.ty, f.required))
                .collect::<Vec<_>>(),
            vec![
                ("device", FieldType::Device, false),
                ("qos", FieldType::Integer, false),
                ("state_topic", FieldType::String, true),
            ]
        );
    }

    #[test]
    fn test_other_component() {
        let schema = EntitySchema::from_document(
            &document("button", &[("command_topic", option("string", true))]),
            false,
        )
        .unwrap();

        assert_eq!(schema.name, "Button");
        assert_eq!(schema.component, None);
        assert_eq!(schema.file_name(), "button.rs");
    }

    #[test]
    fn test_collision() {
        let err = EntitySchema::from_document(
            &document(
                "sensor",
                &[
                    ("state-topic", option("string", false)),
                    ("state_topic", option("string", true)),
                ],
            ),
            false,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Collision { ident, first, second }
                if ident == "state_topic" && first == "state-topic" && second == "state_topic"
        ));
    }

    #[test]
    fn test_id_field() {
        let schema = EntitySchema::from_document(
            &document(
                "sensor",
                &[
                    ("unique_id", option("string", false)),
                    ("name", option("integer", false)),
                ],
            ),
            false,
        )
        .unwrap();

        assert!(schema.id_field("unique_id").is_some());
        assert!(schema.id_field("name").is_none());
    }
}
