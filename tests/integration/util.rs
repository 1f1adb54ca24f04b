use std::{ffi::OsString, fs, path::Path, process::Command};

use tempfile::TempDir;

const BATTSTAT_EXE_PATH: &str = env!("CARGO_BIN_EXE_battstat");

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of battstat.
pub fn battstat_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(BATTSTAT_EXE_PATH);
    cmd.args(args);
    cmd
}

/// Returns the [`Command`] of a binary invocation of battstat on a fixture
/// from `tests/fixtures/`.
pub fn fixture_command(name: &str) -> Command {
    let mut cmd = Command::new(BATTSTAT_EXE_PATH);
    cmd.arg(abs_path(&format!("./tests/fixtures/{name}.txt")));
    cmd
}

/// A fake power-supply directory.
pub struct FakeSysfs {
    pub root: TempDir,
}

impl FakeSysfs {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Adds a supply whose `uevent` is a copy of a fixture.
    pub fn with_fixture(self, name: &str, fixture: &str) -> Self {
        let contents = fs::read_to_string(format!("./tests/fixtures/{fixture}.txt")).unwrap();
        self.with_uevent(name, &contents)
    }

    pub fn with_uevent(self, name: &str, contents: &str) -> Self {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("uevent"), contents).unwrap();
        self
    }

    pub fn path(&self) -> &str {
        self.root.path().to_str().unwrap()
    }
}
