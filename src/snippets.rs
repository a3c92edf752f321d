use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name used when a snippet is saved without one.
pub const DEFAULT_SNIPPET_NAME: &str = "snippet button";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub command: String,
}

/// Load all snippets from the JSON file at `path`.
///
/// A missing or blank file yields an empty list.
pub fn load_snippets(path: &Path) -> anyhow::Result<Vec<Snippet>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let list: Vec<Snippet> = serde_json::from_str(&content)?;
    Ok(list)
}

/// Persist `snippets` to `path`, replacing the whole file.
pub fn save_snippets(path: &Path, snippets: &[Snippet]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snippets)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyCommand,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::EmptyCommand => write!(f, "Please fill in the command."),
        }
    }
}

impl std::error::Error for FormError {}

/// Raw text typed into the snippet form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub name: String,
    pub command: String,
}

impl SnippetDraft {
    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            name: snippet.name.clone(),
            command: snippet.command.clone(),
        }
    }

    /// Validate the draft. The command is mandatory, the name falls back to
    /// [`DEFAULT_SNIPPET_NAME`].
    pub fn to_snippet(&self) -> Result<Snippet, FormError> {
        let command = self.command.trim();
        if command.is_empty() {
            return Err(FormError::EmptyCommand);
        }
        let name = match self.name.trim() {
            "" => DEFAULT_SNIPPET_NAME,
            n => n,
        };
        Ok(Snippet {
            name: name.to_string(),
            command: command.to_string(),
        })
    }
}

/// In-memory snippet list backed by a JSON file. Every mutation rewrites the
/// file.
#[derive(Debug)]
pub struct SnippetStore {
    path: PathBuf,
    snippets: Vec<Snippet>,
}

impl SnippetStore {
    /// Open the store at `path`. A corrupt file is logged and treated as
    /// empty; it is left on disk until the next mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snippets = match load_snippets(&path) {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to load snippets: {e}");
                Vec::new()
            }
        };
        tracing::debug!(count = snippets.len(), "snippets loaded");
        Self { path, snippets }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, index: usize) -> Option<&Snippet> {
        self.snippets.get(index)
    }

    /// Replace the entry at `index`, or append when `index` is `None`.
    pub fn upsert(&mut self, snippet: Snippet, index: Option<usize>) -> anyhow::Result<()> {
        match index {
            Some(i) => {
                let slot = self
                    .snippets
                    .get_mut(i)
                    .ok_or_else(|| anyhow::anyhow!("no snippet at index {i}"))?;
                *slot = snippet;
            }
            None => self.snippets.push(snippet),
        }
        self.persist()
    }

    /// Remove exactly the entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> anyhow::Result<Snippet> {
        if index >= self.snippets.len() {
            anyhow::bail!("no snippet at index {index}");
        }
        let removed = self.snippets.remove(index);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> anyhow::Result<()> {
        save_snippets(&self.path, &self.snippets)?;
        tracing::debug!(count = self.snippets.len(), path = %self.path.display(), "snippets saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snip(name: &str, command: &str) -> Snippet {
        Snippet {
            name: name.into(),
            command: command.into(),
        }
    }

    #[test]
    fn empty_command_is_rejected() {
        let draft = SnippetDraft {
            name: "x".into(),
            command: "   \n".into(),
        };
        assert_eq!(draft.to_snippet(), Err(FormError::EmptyCommand));
        assert_eq!(
            FormError::EmptyCommand.to_string(),
            "Please fill in the command."
        );
    }

    #[test]
    fn empty_name_gets_default() {
        let draft = SnippetDraft {
            name: "  ".into(),
            command: " notepad ".into(),
        };
        assert_eq!(
            draft.to_snippet().unwrap(),
            snip(DEFAULT_SNIPPET_NAME, "notepad")
        );
    }

    #[test]
    fn missing_file_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = load_snippets(&dir.path().join("snippets.json")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn corrupt_file_opens_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_snippets(&path).is_err());
        let store = SnippetStore::open(&path);
        assert!(store.snippets().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn upsert_appends_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        let mut store = SnippetStore::open(&path);
        store.upsert(snip("a", "1"), None).unwrap();
        store.upsert(snip("b", "2"), None).unwrap();
        store.upsert(snip("B", "22"), Some(1)).unwrap();
        assert_eq!(store.snippets(), &[snip("a", "1"), snip("B", "22")]);
        assert!(store.upsert(snip("c", "3"), Some(5)).is_err());
        assert_eq!(load_snippets(&path).unwrap(), store.snippets());
    }

    #[test]
    fn remove_keeps_relative_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        let mut store = SnippetStore::open(&path);
        for (n, c) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
            store.upsert(snip(n, c), None).unwrap();
        }
        let removed = store.remove(1).unwrap();
        assert_eq!(removed, snip("b", "2"));
        assert_eq!(
            store.snippets(),
            &[snip("a", "1"), snip("c", "3"), snip("d", "4")]
        );
        assert!(store.remove(3).is_err());
        assert_eq!(load_snippets(&path).unwrap(), store.snippets());
    }

    #[test]
    fn non_ascii_text_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        save_snippets(&path, &[snip("Документы", "folder \"C:\\Документы\"")]).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Документы"));
    }
}
