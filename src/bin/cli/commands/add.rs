use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    name: &str,
    description: Option<&str>,
    tags: Option<&str>,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let description = description.unwrap_or("");
    let tags = tags.map(App::split_tags).unwrap_or_default();

    app.store.add_entry(name, description, &tags)?;
    app.save()?;

    // Read back so output reflects normalization
    let entry = app.store.get(name).expect("entry was just added");

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name.trim().to_lowercase(),
                "description": entry.description,
                "tags": entry.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Added \"{}\"", name.trim().to_lowercase());
            if !entry.tags.is_empty() {
                println!(
                    "  Tags: {}",
                    entry.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")
                );
            }
        }
    }

    Ok(())
}
