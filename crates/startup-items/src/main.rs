mod commands;

use std::io::BufRead;

use clap::{Parser, Subcommand};

use startup_items_core::{config, log_error};

#[derive(Parser)]
#[command(
    name = "startup-items",
    version,
    about = "View and edit per-user Windows startup entries"
)]
struct Cli {
    /// Wait for Enter before exiting (keeps a new console window open)
    #[arg(long, global = true)]
    pause: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Show elevation state, locations and entry counts
    Status,
    /// Values under the registry Run key
    Run {
        #[command(subcommand)]
        command: RunCommands,
    },
    /// Shortcuts in the Start Menu Startup folder
    Links {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// Relaunch as Administrator, then run ARGS (default: status)
    Elevate {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Subcommand)]
enum RunCommands {
    /// List the Run key entries
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an entry
    Add {
        name: String,
        command_line: String,
    },
    /// Remove an entry
    Remove { name: String },
    /// Rename an entry or change its command line
    Set {
        name: String,
        /// New value name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,
        /// New command line
        #[arg(long = "command", allow_hyphen_values = true)]
        command_line: Option<String>,
    },
    /// Rewrite the key from the current entries
    Sync,
}

#[derive(Subcommand)]
enum LinkCommands {
    /// List the Startup folder shortcuts
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a shortcut
    Add {
        name: String,
        target: String,
        /// Arguments passed to the target
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        args: String,
    },
    /// Remove a shortcut
    Remove { name: String },
    /// Rename a shortcut or change its target or arguments
    Set {
        name: String,
        /// New shortcut name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,
        /// New target path
        #[arg(long)]
        target: Option<String>,
        /// New arguments
        #[arg(long, allow_hyphen_values = true)]
        args: Option<String>,
    },
    /// Rewrite the folder from the current shortcuts
    Sync,
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    startup_items_core::log::init(&config.logging);

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Status => commands::status::execute(&config),
        Commands::Run { command } => commands::run::execute(&config, command),
        Commands::Links { command } => commands::links::execute(&config, command),
        Commands::Elevate { args } => commands::elevate::execute(&config, args),
    };

    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            log_error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    };

    if cli.pause {
        println!("\nPress Enter to exit.");
        let _ = std::io::stdin().lock().read_line(&mut String::new());
    }
    std::process::exit(code);
}
