use crate::utils::is_default;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Parser))]
#[cfg_attr(feature = "clap", command(name = "discovery-gen", version, about))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GeneratorOptions {
    /// URL or local path of the integration document, e.g. `sensor.mqtt.markdown`
    #[cfg_attr(feature = "clap", arg(env))]
    pub source: String,

    /// Directory to write the generated file to, defaults to the current directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long, env))]
    pub output_dir: Option<PathBuf>,

    /// Print the generated source instead of writing it to a file.
    #[serde(default, skip_serializing_if = "is_default")]
    #[cfg_attr(feature = "clap", arg(long, env))]
    pub stdout: bool,

    /// Timeout for fetching the document, defaults to the HTTP client's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "humantime_serde")]
    #[cfg_attr(feature = "clap", arg(long, env, value_parser = DurationValueParser))]
    #[cfg_attr(feature = "schemars", schemars(schema_with = "humantime_duration"))]
    pub timeout: Option<Duration>,

    /// Fail on option types without a mapping, instead of falling back to a string.
    #[serde(default, skip_serializing_if = "is_default")]
    #[cfg_attr(feature = "clap", arg(long, env))]
    pub strict_types: bool,
}

impl GeneratorOptions {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output_dir: None,
            stdout: false,
            timeout: None,
            strict_types: false,
        }
    }
}

#[cfg(feature = "schemars")]
fn humantime_duration(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    use schemars::schema::*;
    use schemars::JsonSchema;
    use serde_json::json;

    let mut schema: SchemaObject = <String>::json_schema(gen).into();
    schema.metadata = Some(Box::new(Metadata {
        id: None,
        title: None,
        description: Some(r#"A duration in the humantime format. For example: '30s' for 30 seconds. '5m' for 5 minutes."#.to_string()),
        default: None,
        deprecated: false,
        read_only: false,
        write_only: false,
        examples: vec![json!("30s"), json!("1m")],
    }));
    schema.into()
}

#[cfg(feature = "clap")]
#[derive(Clone)]
pub struct DurationValueParser;

#[cfg(feature = "clap")]
impl clap::builder::TypedValueParser for DurationValueParser {
    type Value = Duration;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        use std::str::FromStr;
        Ok(humantime::Duration::from_str(&value.to_string_lossy())
            .map_err(|_err| clap::Error::new(clap::error::ErrorKind::Format).with_cmd(cmd))?
            .into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serde_defaults() {
        let options: GeneratorOptions = serde_json::from_value(json!({
            "source": "sensor.mqtt.markdown",
        }))
        .unwrap();
        assert_eq!(options, GeneratorOptions::new("sensor.mqtt.markdown"));

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "source": "sensor.mqtt.markdown" })
        );
    }

    #[test]
    fn test_serde_timeout() {
        let options: GeneratorOptions = serde_json::from_value(json!({
            "source": "https://example.com/light.mqtt.markdown",
            "timeout": "30s",
            "strict_types": true,
        }))
        .unwrap();

        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
        assert!(options.strict_types);
    }
}
