use crate::actions::exec::RunTarget;
use crate::actions::svn::SvnOp;
use crate::common::env::{expand_env_vars, resolve_user_path};
use crate::common::strip_prefix_ci;
use crate::settings::{Settings, DEFAULT_SVN_TOOL};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Url,
    Folder,
    Run,
    Svn(SvnOp),
}

/// Recognised command prefixes, matched case-insensitively in order.
const PREFIXES: &[(&str, Prefix)] = &[
    ("http://", Prefix::Url),
    ("https://", Prefix::Url),
    ("folder ", Prefix::Folder),
    ("run ", Prefix::Run),
    ("svn check ", Prefix::Svn(SvnOp::Check)),
    ("svn update ", Prefix::Svn(SvnOp::Update)),
    ("svn commit ", Prefix::Svn(SvnOp::Commit)),
    ("svn clean ", Prefix::Svn(SvnOp::Clean)),
    ("svn showlog ", Prefix::Svn(SvnOp::ShowLog)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind<'a> {
    Empty,
    Url(String),
    Folder(PathBuf),
    Run(RunTarget),
    Svn { op: SvnOp, path: PathBuf },
    Shell(&'a str),
}

/// Classify a stored snippet command.
///
/// URLs are kept whole with variables expanded, path-bearing forms have their
/// argument unquoted, variable-expanded and made absolute, and everything else
/// is returned verbatim for the shell.
pub fn parse_command(raw: &str) -> CommandKind<'_> {
    let s = raw.trim();
    if s.is_empty() {
        return CommandKind::Empty;
    }
    for (prefix, kind) in PREFIXES {
        let Some(rest) = strip_prefix_ci(s, prefix) else {
            continue;
        };
        return match *kind {
            Prefix::Url => CommandKind::Url(expand_env_vars(s)),
            Prefix::Folder => CommandKind::Folder(resolve_user_path(rest)),
            Prefix::Run => CommandKind::Run(RunTarget::parse(rest)),
            Prefix::Svn(op) => CommandKind::Svn {
                op,
                path: resolve_user_path(rest),
            },
        };
    }
    CommandKind::Shell(s)
}

/// Knobs the dispatcher needs from the user settings.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub svn_tool_path: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            svn_tool_path: DEFAULT_SVN_TOOL.into(),
        }
    }
}

impl From<&Settings> for LaunchOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            svn_tool_path: settings.svn_tool_path.clone(),
        }
    }
}

/// Launch a snippet command without waiting for it.
///
/// Returns an error when the target path does not exist or spawning the
/// process or browser fails.
pub fn launch_command(raw: &str, opts: &LaunchOptions) -> anyhow::Result<()> {
    use crate::actions::*;
    let kind = parse_command(raw);
    tracing::debug!(?kind, "dispatching snippet command");
    match kind {
        CommandKind::Empty => anyhow::bail!("Empty command"),
        CommandKind::Url(url) => web::open_url(&url),
        CommandKind::Folder(path) => folders::open_folder(&path),
        CommandKind::Run(target) => exec::launch(&target),
        CommandKind::Svn { op, path } => svn::run(&opts.svn_tool_path, op, &path),
        CommandKind::Shell(cmd) => shell::run(cmd),
    }
}
