use std::io;
use std::path::Path;
use std::process::Command;

mod remote;
mod url;

pub use self::remote::remote_head;
pub use self::url::is_hierarchical_url;

/// A trait for executing cli commands
pub trait CommandExecutor {
    /// Runs `command_line` (program first, then its arguments) from `working_directory`
    /// and returns what it printed on stdout.
    /// A bare program name is looked up on `PATH`; a relative path such as `bin/git` is
    /// relative to `working_directory`, not to the current process directory.
    fn execute(&self, command_line: &[&str], working_directory: &Path) -> Result<String, io::Error>;
}

#[derive(Debug, Clone)]
/// A simple struct to implement the CommandExecutor trait for Git
pub struct GitExecutor;

impl CommandExecutor for GitExecutor {
    fn execute(&self, command_line: &[&str], working_directory: &Path) -> Result<String, io::Error> {
        let (program, args) = command_line
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Empty command line"))?;

        if !working_directory.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "Working directory {} does not exist",
                    working_directory.display()
                ),
            ));
        }

        let program_path = if Path::new(program).components().count() > 1 {
            let path = working_directory.join(program);
            if !path.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Could not find `{}`", path.display()),
                ));
            }
            path
        } else {
            which::which(program).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Could not find `{program}`: {e}"),
                )
            })?
        };

        log::debug!(
            "Running `{}` in {}",
            command_line.join(" "),
            working_directory.display()
        );
        let res = Command::new(program_path)
            .args(args)
            .current_dir(working_directory)
            // Disable interactive prompts
            .env("GIT_TERMINAL_PROMPT", "0")
            // A GIT_DIR inherited from a calling git process takes precedence over the cwd
            .env_remove("GIT_DIR")
            .output()?;

        if res.status.success() {
            Ok(String::from_utf8_lossy(&res.stdout).trim().to_string())
        } else {
            Err(io::Error::other(
                String::from_utf8_lossy(&res.stderr).trim().to_string(),
            ))
        }
    }
}
