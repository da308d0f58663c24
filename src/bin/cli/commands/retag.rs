use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    name: &str,
    tags: Option<&str>,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    // No --tags means clear the whole set
    let tags = tags.map(App::split_tags).unwrap_or_default();

    app.store.replace_tags(name, &tags)?;
    app.save()?;

    let entry = app.store.get(name).expect("entry exists after retagging");

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name.trim().to_lowercase(),
                "tags": entry.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if entry.tags.is_empty() {
                println!("Cleared tags on \"{}\"", name.trim().to_lowercase());
            } else {
                println!(
                    "Set tags on \"{}\": {}",
                    name.trim().to_lowercase(),
                    terminal::tag_line(entry)
                );
            }
        }
    }

    Ok(())
}
