mod app;
mod commands;
mod prompt;
mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notule", about = "Personal tagged-note keeper", version)]
struct Cli {
    /// Use a specific note file (default: platform data directory)
    #[arg(long, global = true)]
    file: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new entry
    Add {
        /// Name of the entry (unique, case-insensitive)
        name: String,
        /// Description text
        description: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List all entries
    List,

    /// Show a single entry
    Show {
        /// Entry name
        name: String,
    },

    /// Replace an entry's description
    Edit {
        /// Entry name
        name: String,
        /// New description text
        description: String,
    },

    /// Add one or more tags to an entry
    Tag {
        /// Entry name
        name: String,
        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove a tag from an entry
    Untag {
        /// Entry name
        name: String,
        /// Tag to remove
        tag: String,
    },

    /// Replace an entry's whole tag set
    Retag {
        /// Entry name
        name: String,
        /// Comma-separated tags (omit to clear all tags)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Remove one or more entries (all or nothing)
    Remove {
        /// Entry names
        #[arg(required = true)]
        names: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Remove every entry
    RemoveAll {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List tags with usage counts
    Tags,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let mut app = app::App::open(cli.file.as_deref())?;

    match cli.command {
        Command::Add { name, description, tags } => {
            commands::add::run(
                &mut app,
                &name,
                description.as_deref(),
                tags.as_deref(),
                &cli.format,
                use_color,
            )?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Command::Show { name } => {
            commands::show::run(&app, &name, &cli.format, use_color)?;
        }
        Command::Edit { name, description } => {
            commands::edit::run(&mut app, &name, &description, &cli.format, use_color)?;
        }
        Command::Tag { name, tags } => {
            commands::tag::run(&mut app, &name, &tags, &cli.format, use_color)?;
        }
        Command::Untag { name, tag } => {
            commands::untag::run(&mut app, &name, &tag, &cli.format, use_color)?;
        }
        Command::Retag { name, tags } => {
            commands::retag::run(&mut app, &name, tags.as_deref(), &cli.format, use_color)?;
        }
        Command::Remove { names, yes } => {
            commands::remove::run(&mut app, &names, yes, &cli.format, use_color)?;
        }
        Command::RemoveAll { yes } => {
            commands::remove::run_all(&mut app, yes, &cli.format, use_color)?;
        }
        Command::Tags => {
            commands::tags::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
