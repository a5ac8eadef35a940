use startup_items_core::config::Config;
use startup_items_core::Relaunch;

use super::context;

/// Command the elevated instance runs when none is given.
const DEFAULT_COMMAND: &str = "status";

/// Relaunches this program as Administrator.
///
/// The new instance gets `--pause` so its console stays open. A failed
/// launch or a declined prompt is silent, matching the desktop behaviour
/// of leaving the current session as it was.
pub fn execute(config: &Config, args: Vec<String>) -> Result<(), String> {
    let elevation = context::elevation();
    let app = context::open(config)?;

    match app.relaunch_as_admin(&elevation, &relaunch_args(args)) {
        Relaunch::AlreadyElevated => println!("Already running as Administrator."),
        Relaunch::Started | Relaunch::Declined => {}
    }
    Ok(())
}

fn relaunch_args(args: Vec<String>) -> Vec<String> {
    let mut relaunch = vec!["--pause".to_string()];
    if args.is_empty() {
        relaunch.push(DEFAULT_COMMAND.to_string());
    } else {
        relaunch.extend(args);
    }
    relaunch
}
