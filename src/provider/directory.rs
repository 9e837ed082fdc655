//! Filesystem provider: one file per locale in a resources folder.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{LocaleProvider, LocaleSource, split_file_name};
use crate::error::{Error, Result};

/// Serves `<locale><ext>` files from a folder, ordered by file name.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    folder: PathBuf,
    entries: Vec<(LocaleSource, PathBuf)>,
}

impl DirectoryProvider {
    /// Create a provider over `folder`. Nothing is read until `init`.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self { folder: folder.into(), entries: Vec::new() }
    }

    /// Folder being served.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn scan(&self) -> Result<Vec<(LocaleSource, PathBuf)>> {
        if !self.folder.is_dir() {
            return Err(Error::config(format!(
                "locales folder '{}' does not exist or is not a directory",
                self.folder.display()
            )));
        }

        let mut found = Vec::new();
        for entry in std::fs::read_dir(&self.folder)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if let Some(source) = split_file_name(&name) {
                found.push((name, source, entry.path()));
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(found.into_iter().map(|(_, source, path)| (source, path)).collect())
    }

    fn current(&self) -> Result<std::borrow::Cow<'_, [(LocaleSource, PathBuf)]>> {
        if self.entries.is_empty() {
            Ok(std::borrow::Cow::Owned(self.scan()?))
        } else {
            Ok(std::borrow::Cow::Borrowed(&self.entries))
        }
    }
}

impl LocaleProvider for DirectoryProvider {
    fn describe(&self) -> String {
        format!("folder '{}'", self.folder.display())
    }

    fn init(&mut self) -> Result<()> {
        self.entries = self.scan()?;
        Ok(())
    }

    fn discover(&self) -> Result<Vec<LocaleSource>> {
        let entries = self.current()?;
        if entries.is_empty() {
            return Err(Error::NoLocalesAvailable(self.describe()));
        }
        Ok(entries.iter().map(|(source, _)| source.clone()).collect())
    }

    fn open(&self, source: &LocaleSource) -> Result<Box<dyn Read + '_>> {
        let entries = self.current()?;
        let path = entries
            .iter()
            .find(|(entry, _)| entry == source)
            .map(|(_, path)| path.clone())
            .ok_or_else(|| {
                let available: Vec<String> =
                    entries.iter().map(|(entry, _)| entry.locale.clone()).collect();
                Error::locale_not_available(&source.locale, &available)
            })?;
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }

    fn dispose(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn folder(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_discovers_in_file_name_order() {
        let dir = folder(&[("es.txt", "one = uno"), ("en.txt", "one = one"), ("notes", "x")]);
        std::fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let mut provider = DirectoryProvider::new(dir.path());
        provider.init().unwrap();
        let found = provider.discover().unwrap();
        assert_eq!(found, vec![LocaleSource::new("en", ".txt"), LocaleSource::new("es", ".txt")]);
    }

    #[test]
    fn test_open_reads_content() {
        let dir = folder(&[("es.txt", "one = uno")]);
        let mut provider = DirectoryProvider::new(dir.path());
        provider.init().unwrap();

        let mut content = String::new();
        provider.open(&LocaleSource::new("es", ".txt")).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "one = uno");
        assert!(provider.open(&LocaleSource::new("fr", ".txt")).is_err());
        assert!(provider.open(&LocaleSource::new("es", ".json")).is_err());
    }

    #[test]
    fn test_open_matches_extension() {
        // `en.md` sorts before `en.txt`.
        let dir = folder(&[("en.md", "# English notes\nsome prose here"), ("en.txt", "hello = Hello")]);
        let mut provider = DirectoryProvider::new(dir.path());
        provider.init().unwrap();

        let mut content = String::new();
        provider.open(&LocaleSource::new("en", ".txt")).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "hello = Hello");

        content.clear();
        provider.open(&LocaleSource::new("en", ".md")).unwrap().read_to_string(&mut content).unwrap();
        assert!(content.starts_with("# English notes"));
    }

    #[test]
    fn test_missing_folder_is_config_error() {
        let mut provider = DirectoryProvider::new("/definitely/not/here");
        assert!(matches!(provider.init(), Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_folder_has_no_locales() {
        let dir = folder(&[]);
        let mut provider = DirectoryProvider::new(dir.path());
        provider.init().unwrap();
        assert!(matches!(provider.discover(), Err(Error::NoLocalesAvailable(_))));
    }

    #[test]
    fn test_dispose_forgets_scan() {
        let dir = folder(&[("en.txt", "a = b")]);
        let mut provider = DirectoryProvider::new(dir.path());
        provider.init().unwrap();
        provider.dispose();
        assert!(provider.entries.is_empty());
    }
}
