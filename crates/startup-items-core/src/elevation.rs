/// Administrator status of the running process and the means to acquire it.
///
/// `startup-items-windows` implements this with the process token and
/// `ShellExecuteW`'s `runas` verb.
pub trait Elevation {
    /// Returns whether the current process runs with administrator rights.
    fn is_elevated(&self) -> bool;

    /// Starts a new elevated instance of the current executable with `args`.
    ///
    /// Returns an error when the launch fails or the user declines the
    /// consent prompt.
    fn relaunch_elevated(&self, args: &[String]) -> Result<(), String>;
}

/// Joins arguments into a Windows command line, quoting where needed.
///
/// Follows the `CommandLineToArgvW` rules: arguments containing spaces,
/// tabs or quotes (or empty ones) are wrapped in quotes, embedded quotes
/// are escaped, and backslashes are doubled only before a quote.
pub fn command_line(args: &[String]) -> String {
    args.iter()
        .map(|arg| quote_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains([' ', '\t', '"']) {
        return arg.to_string();
    }
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat_n('\\', backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }
    quoted.extend(std::iter::repeat_n('\\', backslashes * 2));
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_arguments_are_left_alone() {
        assert_eq!(command_line(&args(&["--pause", "status"])), "--pause status");
    }

    #[test]
    fn arguments_with_spaces_are_quoted() {
        assert_eq!(
            command_line(&args(&["run", "add", "My App", "C:\\app.exe"])),
            "run add \"My App\" C:\\app.exe"
        );
    }

    #[test]
    fn embedded_quotes_and_trailing_backslashes_are_escaped() {
        assert_eq!(
            command_line(&args(&["\"C:\\Program Files\\x.exe\" -q"])),
            "\"\\\"C:\\Program Files\\x.exe\\\" -q\""
        );
        assert_eq!(command_line(&args(&["C:\\dir with space\\"])), "\"C:\\dir with space\\\\\"");
    }

    #[test]
    fn empty_arguments_survive_as_quotes() {
        assert_eq!(command_line(&args(&["links", "set", "X", "--args", ""])), "links set X --args \"\"");
    }
}
