use std::path::{Path, PathBuf};

/// Strip `"` characters from both ends. Each end is trimmed on its own, so a
/// missing closing quote is tolerated.
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

/// Expand `%VAR%`, `$VAR` and `${VAR}` references using the process
/// environment. Unknown variables are left untouched.
pub fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}

pub(crate) fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '%' => {
                let mut name = String::new();
                let mut found = false;
                for next in chars.by_ref() {
                    if next == '%' {
                        found = true;
                        break;
                    }
                    name.push(next);
                }
                if !found {
                    out.push('%');
                    out.push_str(&name);
                } else if name.is_empty() {
                    out.push_str("%%");
                } else if let Some(value) = lookup(&name) {
                    out.push_str(&value);
                } else {
                    out.push('%');
                    out.push_str(&name);
                    out.push('%');
                }
            }
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                let mut name = String::new();
                let mut found = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        found = true;
                        break;
                    }
                    name.push(next);
                }
                match (found, lookup(&name)) {
                    (true, Some(value)) if !name.is_empty() => out.push_str(&value),
                    (true, _) => {
                        out.push_str("${");
                        out.push_str(&name);
                        out.push('}');
                    }
                    (false, _) => {
                        out.push_str("${");
                        out.push_str(&name);
                    }
                }
            }
            '$' => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match lookup(&name) {
                    Some(value) if !name.is_empty() => out.push_str(&value),
                    _ => {
                        out.push('$');
                        out.push_str(&name);
                    }
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Turn the raw argument of a path-bearing command into an absolute path:
/// trim, unquote, expand variables and resolve against the working directory.
pub fn resolve_user_path(raw: &str) -> PathBuf {
    let expanded = expand_env_vars(strip_quotes(raw.trim()).trim());
    absolutize(Path::new(&expanded))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "USERNAME" => Some("alice".into()),
            "HOME" => Some("/home/alice".into()),
            _ => None,
        }
    }

    #[test]
    fn expands_percent_style() {
        assert_eq!(
            expand_with(r"C:\Users\%USERNAME%\Documents", lookup),
            r"C:\Users\alice\Documents"
        );
    }

    #[test]
    fn expands_dollar_styles() {
        assert_eq!(expand_with("$HOME/bin", lookup), "/home/alice/bin");
        assert_eq!(expand_with("${HOME}/bin", lookup), "/home/alice/bin");
    }

    #[test]
    fn unknown_variables_are_kept() {
        assert_eq!(expand_with("%NOPE%/x", lookup), "%NOPE%/x");
        assert_eq!(expand_with("$NOPE/x", lookup), "$NOPE/x");
        assert_eq!(expand_with("${NOPE}", lookup), "${NOPE}");
        assert_eq!(expand_with("100% done", lookup), "100% done");
        assert_eq!(expand_with("cost $", lookup), "cost $");
    }

    #[test]
    fn strips_double_quotes_at_each_end() {
        assert_eq!(strip_quotes("\"C:\\a b\""), "C:\\a b");
        assert_eq!(strip_quotes("\"C:\\Docs"), "C:\\Docs");
        assert_eq!(strip_quotes("C:\\Docs\""), "C:\\Docs");
        assert_eq!(strip_quotes("'x'"), "'x'");
        assert_eq!(strip_quotes("\""), "");
    }

    #[test]
    fn relative_paths_become_absolute() {
        let resolved = resolve_user_path("\"some/dir\"");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/dir"));
    }
}
