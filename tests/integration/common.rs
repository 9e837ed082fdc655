//! Common test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const EN: &str = "\
# English
hello = Hello
Mailbox.Title = Inbox
Mailbox.Notification = {0}, you have {1} messages
Animals.Dog = Dog
";

pub const ES: &str = "\
hello = Hola
es = Español de España
Mailbox.Title = Bandeja de entrada
Mailbox.Notification = {0}, tienes {1} mensajes
Multi = Línea uno\\nLínea dos
";

pub const DE: &str = r#"{"hello": "Hallo", "Mailbox": {"Title": "Posteingang"}}"#;

/// A temporary working directory with a populated `Locales` folder.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// `en.txt`, `es.txt` and `de.json`.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write("en.txt", EN);
        fixture.write("es.txt", ES);
        fixture.write("de.json", DE);
        fixture
    }

    /// An existing but empty `Locales` folder.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("Locales")).expect("Failed to create Locales");
        std::fs::create_dir_all(dir.path().join("config")).expect("Failed to create config dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn locales(&self) -> PathBuf {
        self.root().join("Locales")
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.locales().join(name), content).expect("Failed to write locale file");
    }

    /// The binary, isolated from the host's config, environment and culture,
    /// running inside the fixture directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("locale-kit"));
        cmd.current_dir(self.root())
            .env("XDG_CONFIG_HOME", self.root().join("config"))
            .env_remove("LOCALE_KIT_DIR")
            .env_remove("LOCALE_KIT_FALLBACK")
            .env_remove("LOCALE_KIT_SYMBOL")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env("LANG", "C")
            .env_remove("RUST_LOG");
        cmd
    }
}
