use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    name: &str,
    tags: &[String],
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    let mut added = 0;
    for tag in tags {
        if app.store.add_tag(name, tag)? {
            added += 1;
        }
    }
    app.save()?;

    let entry = app.store.get(name).expect("entry exists after tagging");

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name.trim().to_lowercase(),
                "added": added,
                "tags": entry.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let skipped = tags.len() - added;
            if skipped > 0 {
                println!("Added {} tags ({} already present)", added, skipped);
            } else {
                println!("Added {} tags", added);
            }
            println!("  Tags: {}", terminal::tag_line(entry));
        }
    }

    Ok(())
}
