use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    name: &str,
    tag: &str,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    app.store.remove_tag(name, tag)?;
    app.save()?;

    let entry = app.store.get(name).expect("entry exists after untagging");

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name.trim().to_lowercase(),
                "removed": tag.trim().to_lowercase(),
                "tags": entry.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Removed #{}", tag.trim().to_lowercase());
            if entry.tags.is_empty() {
                println!("  (no tags left)");
            } else {
                println!("  Tags: {}", terminal::tag_line(entry));
            }
        }
    }

    Ok(())
}
