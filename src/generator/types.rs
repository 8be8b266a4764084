use crate::generator::Error;
use serde_yaml::Value;

/// The Rust type of a generated field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    StringList,
    Availability,
    Device,
}

impl FieldType {
    pub fn rust_type(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "i64",
            Self::Boolean => "bool",
            Self::StringList => "Vec<String>",
            Self::Availability => "Vec<Availability>",
            Self::Device => "Option<Device>",
        }
    }

    /// The `skip_serializing_if` predicate, matching the empty value of the type.
    pub fn skip_predicate(&self) -> &'static str {
        match self {
            Self::String => "String::is_empty",
            Self::Integer | Self::Boolean => "is_default",
            Self::StringList | Self::Availability => "Vec::is_empty",
            Self::Device => "Option::is_none",
        }
    }
}

/// Infer the field type of an option from its declared type.
///
/// Tags without a mapping fall back to [`FieldType::String`], with a warning, unless `strict` is
/// set. List shapes other than a single tag or `[string, list]` never resolve.
pub fn infer_type(name: &str, declared: &Value, strict: bool) -> Result<FieldType, Error> {
    match declared {
        Value::String(tag) => match (tag.as_str(), name) {
            ("integer", _) => Ok(FieldType::Integer),
            ("boolean", _) => Ok(FieldType::Boolean),
            ("string" | "template" | "icon" | "device_class", _) => Ok(FieldType::String),
            ("list", "availability") => Ok(FieldType::Availability),
            ("map", "device") => Ok(FieldType::Device),
            (tag, _) if strict => Err(Error::UnresolvedType {
                option: name.to_string(),
                declared: format!("'{tag}' has no mapping"),
            }),
            (tag, _) => {
                log::warn!("{name}: no mapping for type '{tag}', falling back to String");
                Ok(FieldType::String)
            }
        },
        Value::Sequence(tags) => match tags.as_slice() {
            [single] => infer_type(name, single, strict),
            // "string or list of strings"
            [a, b] if is_pair(a, b, "string", "list") => Ok(FieldType::StringList),
            _ => Err(unresolved(name, declared)),
        },
        _ => Err(unresolved(name, declared)),
    }
}

fn is_pair(a: &Value, b: &Value, first: &str, second: &str) -> bool {
    let (a, b) = (a.as_str(), b.as_str());
    (a == Some(first) && b == Some(second)) || (a == Some(second) && b == Some(first))
}

fn unresolved(name: &str, declared: &Value) -> Error {
    Error::UnresolvedType {
        option: name.to_string(),
        declared: serde_json::to_string(declared).unwrap_or_else(|_| format!("{declared:?}")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tag(s: &str) -> Value {
        Value::String(s.into())
    }

    fn tags(s: &[&str]) -> Value {
        Value::Sequence(s.iter().map(|s| tag(s)).collect())
    }

    #[test]
    fn test_scalar_tags() {
        assert_eq!(infer_type("qos", &tag("integer"), false).unwrap(), FieldType::Integer);
        assert_eq!(infer_type("retain", &tag("boolean"), false).unwrap(), FieldType::Boolean);
        for t in ["string", "template", "icon", "device_class"] {
            assert_eq!(infer_type("x", &tag(t), true).unwrap(), FieldType::String);
        }
    }

    #[test]
    fn test_special_names() {
        assert_eq!(
            infer_type("availability", &tag("list"), false).unwrap(),
            FieldType::Availability
        );
        assert_eq!(infer_type("device", &tag("map"), false).unwrap(), FieldType::Device);

        // the same tags on other names have no mapping
        assert_eq!(infer_type("options", &tag("list"), false).unwrap(), FieldType::String);
        assert_eq!(infer_type("target", &tag("map"), false).unwrap(), FieldType::String);
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            infer_type("fan_modes", &tags(&["string", "list"]), false).unwrap(),
            FieldType::StringList
        );
        assert_eq!(
            infer_type("fan_modes", &tags(&["list", "string"]), false).unwrap(),
            FieldType::StringList
        );
        assert_eq!(
            infer_type("qos", &tags(&["integer"]), false).unwrap(),
            FieldType::Integer
        );
        assert_eq!(
            infer_type("availability", &tags(&["list"]), false).unwrap(),
            FieldType::Availability
        );
    }

    #[test]
    fn test_unresolved() {
        for declared in [
            tags(&["string", "integer"]),
            tags(&["string", "list", "map"]),
            tags(&[]),
            Value::Null,
            Value::Bool(true),
        ] {
            let err = infer_type("payload_on", &declared, false).unwrap_err();
            assert!(
                matches!(&err, Error::UnresolvedType { option, .. } if option == "payload_on"),
                "{declared:?}: {err}"
            );
        }
    }

    #[test]
    fn test_strict() {
        assert_eq!(infer_type("min", &tag("float"), false).unwrap(), FieldType::String);
        assert!(matches!(
            infer_type("min", &tag("float"), true),
            Err(Error::UnresolvedType { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        for declared in [tag("integer"), tag("float"), tags(&["string", "list"])] {
            assert_eq!(
                infer_type("x", &declared, false).unwrap(),
                infer_type("x", &declared, false).unwrap()
            );
        }
    }
}
