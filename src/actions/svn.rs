use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvnOp {
    Check,
    Update,
    Commit,
    Clean,
    ShowLog,
}

impl SvnOp {
    /// Value passed to the tool's `/command:` switch.
    pub fn tool_command(self) -> &'static str {
        match self {
            SvnOp::Check => "repostatus",
            SvnOp::Update => "update",
            SvnOp::Commit => "commit",
            SvnOp::Clean => "cleanup",
            SvnOp::ShowLog => "log",
        }
    }

    fn keeps_progress_open(self) -> bool {
        matches!(self, SvnOp::Update | SvnOp::Commit | SvnOp::Clean)
    }

    /// TortoiseProc switches for running this operation on `path`.
    pub fn tortoise_args(self, path: &Path) -> Vec<String> {
        let mut args = vec![
            format!("/command:{}", self.tool_command()),
            format!("/path:\"{}\"", path.display()),
        ];
        if self.keeps_progress_open() {
            args.push("/closeonend:0".into());
        }
        args
    }
}

pub fn build_svn_command(tool: &str, op: SvnOp, path: &Path) -> Command {
    let mut command = Command::new(tool);
    for arg in op.tortoise_args(path) {
        // TortoiseProc expects `/path:"..."` literally, not a re-quoted argument.
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(arg);
        }
        #[cfg(not(target_os = "windows"))]
        {
            command.arg(arg);
        }
    }
    command
}

pub fn run(tool: &str, op: SvnOp, path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Path not found: {}", path.display());
    }
    tracing::info!(tool, op = op.tool_command(), path = %path.display(), "running svn tool");
    build_svn_command(tool, op, path)
        .spawn()
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("Failed to start {tool}: {e}"))
}
