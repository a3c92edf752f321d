use std::process::Command;

/// Build the OS shell invocation for `cmd`. The string is handed over
/// untouched so the shell performs its own quoting and variable expansion.
#[cfg(target_os = "windows")]
pub fn build_shell_command(cmd: &str) -> Command {
    use std::os::windows::process::CommandExt;
    let mut c = Command::new("cmd");
    c.arg("/C").raw_arg(cmd);
    c
}

#[cfg(not(target_os = "windows"))]
pub fn build_shell_command(cmd: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(cmd);
    c
}

pub fn run(cmd: &str) -> anyhow::Result<()> {
    tracing::info!(cmd, "running shell command");
    build_shell_command(cmd)
        .spawn()
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("Failed to run `{cmd}`: {e}"))
}
