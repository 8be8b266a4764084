use crate::generator::Error;
use std::path::Path;
use std::time::Duration;

/// Read a document from an `http(s)` URL or a local path.
pub fn fetch(source: &str, timeout: Option<Duration>) -> Result<Vec<u8>, Error> {
    match source.split_once(':') {
        Some(("http" | "https", _)) => fetch_url(source, timeout),
        _ => {
            log::debug!("Reading: {source}");
            std::fs::read(source).map_err(|source_err| Error::Read {
                path: source.into(),
                source: source_err,
            })
        }
    }
}

fn fetch_url(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, Error> {
    log::info!("Fetching: {url}");

    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(timeout)
        .build()
        .into();

    let mut response = agent.get(url).call()?;
    let body = response.body_mut().read_to_vec()?;

    log::debug!("Received {} bytes", body.len());

    Ok(body)
}

/// The document name without directories and the markdown suffix.
///
/// `https://.../_integrations/binary_sensor.mqtt.markdown` becomes `binary_sensor`.
pub fn stem(source: &str) -> &str {
    let file_name = source.rsplit(['/', '\\']).next().unwrap_or(source);

    [".mqtt.markdown", ".markdown", ".md"]
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .unwrap_or_else(|| {
            Path::new(file_name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(file_name)
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stem() {
        assert_eq!(
            stem("https://raw.githubusercontent.com/home-assistant/home-assistant.io/current/source/_integrations/binary_sensor.mqtt.markdown"),
            "binary_sensor"
        );
        assert_eq!(stem("docs/sensor.mqtt.markdown"), "sensor");
        assert_eq!(stem("light.md"), "light");
        assert_eq!(stem("lock.txt"), "lock");
        assert_eq!(stem("tag"), "tag");
    }

    #[test]
    fn test_fetch_missing_file() {
        let err = fetch("does/not/exist.mqtt.markdown", None).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
