use homeassistant_discovery::generator::GeneratorOptions;

fn main() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(GeneratorOptions);
    let path = "schema/generator.json";

    std::fs::create_dir_all("schema")?;
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &schema)?;

    println!("Wrote schema to: {path}");

    Ok(())
}
