use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("codegen-sync").expect("binary built");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn write(&self, rel: &str, body: &str) {
        let path = self.work.join(rel);
        fs::create_dir_all(path.parent().expect("has parent")).expect("create parent");
        fs::write(path, body).expect("write fixture file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.join(rel)).expect("read fixture file")
    }

    pub fn write_presets(&self, body: &str) {
        let dir = self.home.join(".config").join("codegen_sync");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("presets.toml"), body).expect("write presets");
    }

    /// CubeMX-like layout: a project with `src/` and a generator tree with
    /// `Core/Inc` and `Core/Src`.
    pub fn cubemx_layout(&self) {
        self.write("project/src/main.c", "old main");
        self.write("project/src/main.h", "old header");
        self.write("project/src/app_logic.c", "hand written");
        self.write("cubemx/Core/Inc/main.h", "generated header");
        self.write("cubemx/Core/Src/main.c", "generated main");
    }
}
