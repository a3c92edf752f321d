use std::path::{Path, PathBuf};
use std::process::Command;

use crate::common::env::resolve_user_path;

/// Executable and arguments parsed from the text after `run `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTarget {
    pub path: PathBuf,
    pub args: Vec<String>,
}

impl RunTarget {
    /// A leading double-quoted segment is the executable and whatever follows
    /// it are arguments. Without quotes the whole text is the path, so
    /// unquoted paths containing spaces still work.
    pub fn parse(rest: &str) -> Self {
        let rest = rest.trim();
        if let Some(inner) = rest.strip_prefix('"') {
            if let Some(end) = inner.find('"') {
                let path = resolve_user_path(&inner[..end]);
                return Self {
                    path,
                    args: split_args(&inner[end + 1..]),
                };
            }
        }
        Self {
            path: resolve_user_path(rest),
            args: Vec::new(),
        }
    }
}

fn split_args(arg_str: &str) -> Vec<String> {
    let arg_str = arg_str.trim();
    if arg_str.is_empty() {
        return Vec::new();
    }
    match shlex::split(arg_str) {
        Some(list) => list,
        None => arg_str.split_whitespace().map(str::to_string).collect(),
    }
}

fn exe_dir(target: &RunTarget) -> Option<&Path> {
    target.path.parent().filter(|d| !d.as_os_str().is_empty())
}

/// Build the launch for `target` through `start` so shortcuts, documents and
/// other associated files open like a double click. `/D` sets the directory.
#[cfg(target_os = "windows")]
pub fn build_run_command(target: &RunTarget) -> Command {
    use std::os::windows::process::CommandExt;
    let mut line = String::from("start \"\"");
    if let Some(dir) = exe_dir(target) {
        line.push_str(&format!(" /D \"{}\"", dir.display()));
    }
    let name = target
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.path.display().to_string());
    line.push_str(&format!(" \"{name}\""));
    for arg in &target.args {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!(" \"{arg}\""));
        } else {
            line.push(' ');
            line.push_str(arg);
        }
    }
    let mut command = Command::new("cmd");
    command.arg("/C").raw_arg(line);
    if let Some(dir) = exe_dir(target) {
        command.current_dir(dir);
    }
    command
}

/// Build the process for `target`, started from the executable's directory.
#[cfg(not(target_os = "windows"))]
pub fn build_run_command(target: &RunTarget) -> Command {
    let mut command = Command::new(&target.path);
    command.args(&target.args);
    if let Some(dir) = exe_dir(target) {
        command.current_dir(dir);
    }
    command
}

pub fn launch(target: &RunTarget) -> anyhow::Result<()> {
    if !target.path.is_file() {
        anyhow::bail!("File not found: {}", target.path.display());
    }
    tracing::info!(path = %target.path.display(), args = ?target.args, "launching executable");
    build_run_command(target)
        .spawn()
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("Failed to launch {}: {e}", target.path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn quoted_path_with_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("my app").join("tool");
        let t = RunTarget::parse(&format!(r#""{}" --flag "two words""#, exe.display()));
        assert_eq!(t.path, exe);
        assert_eq!(t.args, ["--flag", "two words"]);
    }

    #[test]
    fn unquoted_path_keeps_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("my app").join("tool");
        let t = RunTarget::parse(&format!("  {}  ", exe.display()));
        assert_eq!(t.path, exe);
        assert!(t.args.is_empty());
    }

    #[test]
    fn unbalanced_quotes_fall_back_to_whitespace_split() {
        assert_eq!(split_args("a \"b c"), ["a", "\"b", "c"]);
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn command_runs_from_exe_directory() {
        let t = RunTarget {
            path: PathBuf::from("/opt/tool/bin/tool"),
            args: vec!["-v".into()],
        };
        let cmd = build_run_command(&t);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/opt/tool/bin")));
        assert_eq!(cmd.get_args().count(), 1);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn uses_start_with_working_directory() {
        let t = RunTarget {
            path: PathBuf::from(r"C:\Tools\My App\app.lnk"),
            args: vec!["-v".into(), "two words".into()],
        };
        let cmd = build_run_command(&t);
        assert_eq!(cmd.get_program().to_string_lossy(), "cmd");
        let args: Vec<_> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "/C",
                r#"start "" /D "C:\Tools\My App" "app.lnk" -v "two words""#
            ]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new(r"C:\Tools\My App")));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let t = RunTarget {
            path: dir.path().join("nope.exe"),
            args: Vec::new(),
        };
        let err = launch(&t).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
    }
}
