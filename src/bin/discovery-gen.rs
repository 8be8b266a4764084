//! Generate a catalog type from a Home Assistant MQTT integration document.
//!
//! ```shell
//! discovery-gen https://raw.githubusercontent.com/home-assistant/home-assistant.io/current/source/_integrations/sensor.mqtt.markdown --output-dir src/catalog
//! ```

use clap::Parser;
use homeassistant_discovery::generator::{generate, GeneratorOptions};
use std::io::Write;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = GeneratorOptions::parse();

    let generated = generate(&options)?;

    if options.stdout {
        std::io::stdout().write_all(generated.source.as_bytes())?;
    } else {
        let dir = options.output_dir.as_deref().unwrap_or(Path::new("."));
        let path = generated.write_to(dir)?;
        println!("Wrote: {}", path.display());
    }

    Ok(())
}
