use startup_items_core::config::Config;
use startup_items_core::{EntryPatch, RunEntry};

use super::{context, table};
use crate::RunCommands;

pub fn execute(config: &Config, command: RunCommands) -> Result<(), String> {
    let mut app = context::open(config)?;
    let run = &mut app.run;

    match command {
        RunCommands::List { json } => {
            if json {
                let out = serde_json::to_string_pretty(run.entries()).map_err(|e| e.to_string())?;
                println!("{out}");
            } else if run.entries().is_empty() {
                println!("No run entries.");
            } else {
                let rows: Vec<Vec<String>> = run
                    .entries()
                    .iter()
                    .map(|e| vec![e.name.clone(), e.command_line.clone()])
                    .collect();
                table::print(&["Name", "Command Line"], &rows);
            }
        }
        RunCommands::Add { name, command_line } => {
            run.add_entry(RunEntry::new(name.as_str(), command_line))
                .map_err(|e| e.to_string())?;
            println!("Added run entry \"{name}\".");
        }
        RunCommands::Remove { name } => {
            let removed = run.remove_entry(&name).map_err(|e| e.to_string())?;
            println!("Removed run entry \"{}\".", removed.name);
        }
        RunCommands::Set {
            name,
            new_name,
            command_line,
        } => {
            let patch = EntryPatch {
                name: new_name,
                command_line,
            };
            if patch.is_empty() {
                return Err("nothing to change; pass --name and/or --command".into());
            }
            run.update_entry(&name, patch).map_err(|e| e.to_string())?;
            println!("Updated run entry \"{name}\".");
        }
        RunCommands::Sync => {
            run.resync().map_err(|e| e.to_string())?;
            println!("Rewrote the Run key with {} entries.", run.entries().len());
        }
    }
    Ok(())
}
