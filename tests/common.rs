#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration is never read or written.
pub fn sv() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("skillvault_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("skillvault");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_skillvault.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and add one skill (id 1 on a fresh database).
pub fn init_db_with_skill(db_path: &str, name: &str, category: &str, target: &str) {
    sv().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    sv().args(["--db", db_path, "add", name, category, target])
        .assert()
        .success();
}

/// Log a session with an explicit date.
pub fn practice(db_path: &str, skill_id: &str, minutes: &str, notes: &str, date: &str) {
    sv().args([
        "--db", db_path, "practice", skill_id, minutes, "--notes", notes, "--date", date,
    ])
    .assert()
    .success();
}

/// A fresh, empty HOME for tests that read or write the config directory.
pub fn scratch_home(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("skillvault_home_{}", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create scratch home");
    home
}

/// Binary under test running with `home` as HOME.
pub fn sv_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("skillvault");
    cmd.env("HOME", home);
    cmd
}
