use std::path::PathBuf;

use startup_items_core::config::Config;
use startup_items_core::{LinkPatch, StartupLink};

use super::{context, table};
use crate::LinkCommands;

pub fn execute(config: &Config, command: LinkCommands) -> Result<(), String> {
    let mut app = context::open(config)?;
    let links = &mut app.links;

    match command {
        LinkCommands::List { json } => {
            if json {
                let out =
                    serde_json::to_string_pretty(links.entries()).map_err(|e| e.to_string())?;
                println!("{out}");
            } else if links.entries().is_empty() {
                println!("No startup links.");
            } else {
                let rows: Vec<Vec<String>> = links
                    .entries()
                    .iter()
                    .map(|l| {
                        vec![
                            l.name.clone(),
                            l.target.display().to_string(),
                            l.arguments.clone(),
                        ]
                    })
                    .collect();
                table::print(&["Name", "Target", "Arguments"], &rows);
            }
        }
        LinkCommands::Add { name, target, args } => {
            links
                .add_entry(StartupLink::new(name.as_str(), target, args))
                .map_err(|e| e.to_string())?;
            println!("Added startup link \"{name}\".");
        }
        LinkCommands::Remove { name } => {
            let removed = links.remove_entry(&name).map_err(|e| e.to_string())?;
            println!("Removed startup link \"{}\".", removed.name);
        }
        LinkCommands::Set {
            name,
            new_name,
            target,
            args,
        } => {
            let patch = LinkPatch {
                name: new_name,
                target: target.map(PathBuf::from),
                arguments: args,
            };
            if patch.is_empty() {
                return Err("nothing to change; pass --name, --target and/or --args".into());
            }
            links.update_entry(&name, patch).map_err(|e| e.to_string())?;
            println!("Updated startup link \"{name}\".");
        }
        LinkCommands::Sync => {
            links.resync().map_err(|e| e.to_string())?;
            println!(
                "Rewrote the Startup folder with {} links.",
                links.entries().len()
            );
        }
    }
    Ok(())
}
