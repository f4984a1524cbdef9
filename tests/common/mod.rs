use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub book_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config dir");
        let book_path = temp_dir.path().join(".telephone_book");
        TestContext {
            temp_dir,
            book_path,
        }
    }

    /// Context whose book file starts with `contents`
    pub fn with_book(contents: &str) -> Self {
        let ctx = Self::new();
        fs::write(&ctx.book_path, contents).expect("Failed to seed book");
        ctx
    }

    pub fn write_config(&self, json: &str) {
        let dir = self.temp_dir.path().join("config/telbook");
        fs::create_dir_all(&dir).expect("Failed to create telbook config dir");
        fs::write(dir.join("config.json"), json).expect("Failed to write config");
    }

    /// Run the binary with HOME and the config dir inside the temp dir
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_telbook"))
            .args(args)
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run telbook")
    }

    pub fn book(&self) -> String {
        fs::read_to_string(&self.book_path).expect("Failed to read book")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
