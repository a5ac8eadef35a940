/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `startup-items init` to create a starter file users can edit.
pub fn generate_config() -> String {
    r##"# Startup Items configuration
# Location: ~/.config/startup-items/config.toml

[run]
# Registry key under HKEY_CURRENT_USER whose string values run at logon.
key = 'Software\Microsoft\Windows\CurrentVersion\Run'

[startup]
# Manage this folder instead of your Start Menu Startup folder.
# folder = 'C:\Users\you\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup'
# Rewriting the folder deletes every file in it. Set to true to only
# delete .lnk shortcuts and leave other files (e.g. desktop.ini) alone.
keep_unmanaged_files = false

[logging]
# Enable file logging to ~/.config/startup-items/logs/startup-items.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
