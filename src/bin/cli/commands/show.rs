use anyhow::{bail, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let lookup = name.trim().to_lowercase();
    let Some(entry) = app.store.get(name) else {
        bail!("Entry not found: {}", lookup);
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": lookup,
                "description": entry.description,
                "tags": entry.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if use_color {
                println!("{}{}{}", terminal::Color::BOLD, lookup, terminal::Color::RESET);
            } else {
                println!("{}", lookup);
            }

            if !entry.tags.is_empty() {
                let tags = terminal::tag_line(entry);
                if use_color {
                    println!("{}{}{}", terminal::Color::DIM, tags, terminal::Color::RESET);
                } else {
                    println!("{}", tags);
                }
            }

            if !entry.description.is_empty() {
                println!("\n{}", entry.description);
            }
        }
    }

    Ok(())
}
