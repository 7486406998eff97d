use unit_converter::config::ConverterConfig;
use unit_converter::types::DisplayMeasurement;
use unit_converter::{convert, Category, UnitConverter, UnitTable};

use tracing_subscriber::EnvFilter;

const CUSTOM_UNITS: &str = r#"
[[units]]
category = "time"
name = "Weeks"
symbol = "wk"
factor = 604800.0
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One sample per category: (category, from, to, input)
    let samples = [
        (Category::Length, 0, 2, "1"),
        (Category::Temperature, 0, 1, "-40"),
        (Category::Time, 0, 3, "86400"),
        (Category::Volume, 1, 0, ""),
    ];

    for (category, from, to, input) in samples {
        let table = UnitTable::builtin(category);
        let result = convert(category, from, to, input);

        println!(
            "[{}] {:?} {} -> {}",
            category.label(),
            input,
            table.units()[from].symbol,
            DisplayMeasurement(result, &table.units()[to]),
        );
    }

    let config = ConverterConfig::from_toml_str(CUSTOM_UNITS)?;
    let converter = UnitConverter::from_config(&config)?;
    let weeks = converter.convert_by_name(Category::Time, "d", "wk", "365")?;
    println!("365 d is {weeks:.3} wk");

    match converter.try_convert(Category::Volume, 1, 0, "two") {
        Ok(value) => println!("Converted: {value}"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
