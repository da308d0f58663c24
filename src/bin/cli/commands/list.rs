use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = app
                .store
                .list_entries()
                .map(|(name, entry)| {
                    serde_json::json!({
                        "name": name,
                        "description": entry.description,
                        "tags": entry.tags,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if app.store.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            let max_name_len = app
                .store
                .list_entries()
                .map(|(n, _)| n.len())
                .max()
                .unwrap_or(4)
                .max(4);

            for (name, entry) in app.store.list_entries() {
                let tags = terminal::tag_line(entry);
                if tags.is_empty() {
                    println!("{:<width$} {}", name, entry.description, width = max_name_len + 1);
                } else {
                    println!(
                        "{:<width$} {} {}",
                        name,
                        entry.description,
                        tags,
                        width = max_name_len + 1
                    );
                }
            }

            println!("\n{} entries total", app.store.len());
        }
    }

    Ok(())
}
