use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::errors::AxiomError;

/// The system prompt, read from disk on first use and kept for the life of
/// the process. A failed read leaves nothing cached, so the next caller
/// reads again.
pub struct PromptStore {
    path: PathBuf,
    cached: OnceCell<Arc<str>>,
}

impl PromptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    pub fn preloaded(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self {
            path: PathBuf::new(),
            cached: OnceCell::new_with(Some(Arc::from(text))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.initialized()
    }

    pub async fn get(&self) -> Result<Arc<str>, AxiomError> {
        let text = self
            .cached
            .get_or_try_init(|| async {
                let text = tokio::fs::read_to_string(&self.path)
                    .await
                    .map_err(|err| self.unavailable(err))?;
                log::info!(
                    "loaded system prompt from {} ({} bytes)",
                    self.path.display(),
                    text.len()
                );
                Ok::<Arc<str>, AxiomError>(Arc::from(text))
            })
            .await?;
        Ok(Arc::clone(text))
    }

    fn unavailable(&self, err: std::io::Error) -> AxiomError {
        let msg = if err.kind() == ErrorKind::NotFound {
            format!("Prompt file not found: {}", self.path.display())
        } else {
            format!("Prompt file unreadable: {}: {}", self.path.display(), err)
        };
        log::error!("{}", msg);
        AxiomError::PromptUnavailable(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("axiom-prompt-{}-{}.md", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_loads_and_caches() {
        let path = scratch_path("cache");
        std::fs::write(&path, "You are Axiom.").unwrap();

        let store = PromptStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        assert!(!store.is_loaded());
        assert_eq!(&*store.get().await.unwrap(), "You are Axiom.");
        assert!(store.is_loaded());

        std::fs::remove_file(&path).unwrap();
        assert_eq!(&*store.get().await.unwrap(), "You are Axiom.");
    }

    #[tokio::test]
    async fn test_missing_file_fails_until_it_appears() {
        let path = scratch_path("late");
        let _ = std::fs::remove_file(&path);

        let store = PromptStore::new(&path);
        for _ in 0..2 {
            match store.get().await {
                Err(AxiomError::PromptUnavailable(msg)) => {
                    assert!(msg.starts_with("Prompt file not found:"));
                }
                other => panic!("Expected PromptUnavailable, got {:?}", other),
            }
        }
        assert!(!store.is_loaded());

        std::fs::write(&path, "late prompt").unwrap();
        assert_eq!(&*store.get().await.unwrap(), "late prompt");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_preloaded() {
        let store = PromptStore::preloaded("inline");
        assert!(store.is_loaded());
        assert_eq!(&*store.get().await.unwrap(), "inline");
    }
}
