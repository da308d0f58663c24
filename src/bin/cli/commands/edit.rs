use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    name: &str,
    description: &str,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    app.store.edit_description(name, description)?;
    app.save()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name.trim().to_lowercase(),
                "description": description,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Updated \"{}\"", name.trim().to_lowercase());
        }
    }

    Ok(())
}
