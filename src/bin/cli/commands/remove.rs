use anyhow::Result;

use crate::app::App;
use crate::prompt;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    names: &[String],
    yes: bool,
    format: &OutputFormat,
    _use_color: bool,
) -> Result<()> {
    // Single removals go through without asking; batches are gated.
    if names.len() > 1 && !yes {
        let question = format!("Remove {} entries?", names.len());
        if !prompt::confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = app.store.delete_entries(names)?;
    app.save()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "removed": removed });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if removed == 1 {
                println!("Removed \"{}\"", names[0].trim().to_lowercase());
            } else {
                println!("Removed {} entries", removed);
            }
        }
    }

    Ok(())
}

pub fn run_all(app: &mut App, yes: bool, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let count = app.store.len();

    if !yes {
        let question = format!("Remove all {} entries?", count);
        if !prompt::confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    app.store.clear_all();
    app.save()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "removed": count });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Removed {} entries", count);
        }
    }

    Ok(())
}
