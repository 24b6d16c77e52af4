use anyhow::Result;
use clap::{Parser, Subcommand};

use chorestar::catalog;
use chorestar::config::Settings;
use chorestar::themes;

#[derive(Parser)]
#[command(name = "chorestar")]
#[command(about = "Family chore tracker with themes, avatars, and celebration effects")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the family dashboard GUI
    Gui,

    /// List the available themes and their avatars
    Themes,

    /// List the task template catalog
    Tasks {
        /// Only show templates in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Initialize ~/.chorestar/config.toml with defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Themes) => {
            list_themes();
        }
        Some(Commands::Tasks { category }) => {
            list_tasks(category.as_deref());
        }
        Some(Commands::Init { force }) => {
            init_command(force)?;
        }
        Some(Commands::Gui) | None => {
            chorestar::gui::run_gui()?;
        }
    }

    Ok(())
}

fn list_themes() {
    for name in themes::all_theme_names() {
        let theme = themes::get_theme(name);
        println!("{} ({})", name, theme.display_name);
        for avatar in theme.avatars {
            let lock = if avatar.unlock.is_default() {
                String::new()
            } else {
                format!("  [unlock: {}]", avatar.unlock.as_key())
            };
            println!("  {} {}{}", avatar.emoji, avatar.name, lock);
        }
    }
}

fn list_tasks(category: Option<&str>) {
    let weekend = chorestar::stats::is_weekend_today();
    let categories: Vec<&str> = match category {
        Some(label) => vec![label],
        None => catalog::categories().to_vec(),
    };

    for label in categories {
        let tasks = catalog::tasks_by_category(label);
        if tasks.is_empty() {
            println!("{}: (no templates)", label);
            continue;
        }
        println!("{}", label);
        for task in tasks {
            let approval = if task.requires_approval {
                " (approval required)"
            } else {
                ""
            };
            let today = if task.day_type.applies(weekend) {
                ""
            } else {
                " (not today)"
            };
            println!(
                "  {} {} - {} pts, {}/{}{}{}",
                task.icon,
                task.title,
                task.points,
                task.period.as_str(),
                task.day_type.as_str(),
                approval,
                today
            );
        }
    }
}

fn init_command(force: bool) -> Result<()> {
    let path = Settings::config_path();
    if path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    let settings = Settings::default();
    settings.save_to_file(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
