use std::io::{self, Write};

/// Ask a yes/no question on the terminal. Defaults to "no" on an empty
/// or unrecognized answer. Destructive bulk commands gate on this; the
/// library core never prompts.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
