use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_skill, practice, scratch_home, setup_test_db, sv, sv_in};
use std::fs;

#[test]
fn test_init_is_idempotent_and_keeps_rows() {
    let db_path = setup_test_db("init_idempotent");

    init_db_with_skill(&db_path, "Rust", "Tech", "100");

    // second init on an existing database
    sv().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Rust"))
        .stdout(contains("Tech"))
        .stdout(contains("100 h"));
}

#[test]
fn test_add_skill_appears_in_progress() {
    let db_path = setup_test_db("add_piano");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("Piano"))
        .stdout(contains("Creative"))
        .stdout(contains("20 h"))
        .stdout(contains("0.00 h"))
        .stdout(contains("0.00%"));
}

#[test]
fn test_progress_sums_sessions() {
    let db_path = setup_test_db("progress_sum");

    init_db_with_skill(&db_path, "Guitar", "Creative", "10");
    practice(&db_path, "1", "150", "scales", "2025-03-01");
    practice(&db_path, "1", "300", "songs", "2025-03-02");

    sv().args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("7.50 h"))
        .stdout(contains("75.00%"))
        .stdout(contains("0 of 1 skill(s) reached their target."));
}

#[test]
fn test_progress_zero_target_is_zero_percent() {
    let db_path = setup_test_db("zero_target");

    init_db_with_skill(&db_path, "Juggling", "Fun", "0");
    practice(&db_path, "1", "90", "", "2025-03-01");

    sv().args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("1.50 h"))
        .stdout(contains("0.00%"));
}

#[test]
fn test_progress_category_filter() {
    let db_path = setup_test_db("category_filter");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");
    sv().args(["--db", &db_path, "add", "Rust", "Tech", "100"])
        .assert()
        .success();

    sv().args(["--db", &db_path, "progress", "--category", "tech"])
        .assert()
        .success()
        .stdout(contains("Rust"))
        .stdout(contains("Piano").not());

    sv().args(["--db", &db_path, "progress", "--category", "Sport"])
        .assert()
        .success()
        .stdout(contains("No skills in category 'Sport'."));
}

#[test]
fn test_delete_cascades_to_sessions_only_for_that_skill() {
    let db_path = setup_test_db("delete_cascade");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");
    sv().args(["--db", &db_path, "add", "Chess", "Games", "50"])
        .assert()
        .success();

    practice(&db_path, "1", "30", "piano-note", "2025-04-01");
    practice(&db_path, "1", "45", "piano-note-2", "2025-04-02");
    practice(&db_path, "2", "60", "chess-note", "2025-04-03");

    sv().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted skill #1 and 2 session(s)."));

    sv().args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("Chess"))
        .stdout(contains("Piano").not());

    sv().args(["--db", &db_path, "list", "--sessions"])
        .assert()
        .success()
        .stdout(contains("chess-note"))
        .stdout(contains("piano-note").not());
}

#[test]
fn test_delete_nonexistent_skill_is_noop() {
    let db_path = setup_test_db("delete_missing");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "del", "99", "--yes"])
        .assert()
        .success()
        .stdout(contains("No skill with id 99; nothing deleted."));

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Piano"));
}

#[test]
fn test_delete_cancelled_keeps_skill() {
    let db_path = setup_test_db("delete_cancel");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Piano"));
}

#[test]
fn test_practice_rejects_non_integer_duration() {
    let db_path = setup_test_db("bad_duration");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "practice", "1", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for duration: 'abc'"));

    sv().args(["--db", &db_path, "list", "--sessions"])
        .assert()
        .success()
        .stdout(contains("No practice sessions found."));
}

#[test]
fn test_practice_rejects_negative_duration() {
    let db_path = setup_test_db("negative_duration");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "practice", "1", "-30"])
        .assert()
        .failure()
        .stderr(contains("duration must not be negative"));
}

#[test]
fn test_practice_without_date_uses_today() {
    let db_path = setup_test_db("default_date");
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "practice", "1", "25"])
        .assert()
        .success()
        .stdout(contains(today.as_str()));

    sv().args(["--db", &db_path, "list", "--sessions", "--skill", "1"])
        .assert()
        .success()
        .stdout(contains(today.as_str()));
}

#[test]
fn test_practice_rejects_invalid_date() {
    let db_path = setup_test_db("invalid_date");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "practice", "1", "25", "--date", "01/02/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: '01/02/2025'"));
}

#[test]
fn test_practice_for_unknown_skill_is_rejected() {
    let db_path = setup_test_db("unknown_skill");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "practice", "42", "30"])
        .assert()
        .failure()
        .stderr(contains("No skill found with id 42"));
}

#[test]
fn test_add_rejects_invalid_target() {
    let db_path = setup_test_db("bad_target");

    sv().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sv().args(["--db", &db_path, "add", "Piano", "Creative", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for target hours: 'lots'"));

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No skills recorded yet."));
}

#[test]
fn test_add_empty_category_uses_default() {
    let db_path = setup_test_db("default_category");

    sv().args(["--db", &db_path, "add", "Yoga", "", "30"])
        .assert()
        .success();

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("General"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("audit_log");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");
    practice(&db_path, "1", "30", "", "2025-05-01");
    sv().args(["--db", &db_path, "del", "1", "-y"])
        .assert()
        .success();

    sv().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Added skill 'Piano'"))
        .stdout(contains("Logged 30 min on 2025-05-01"))
        .stdout(contains("Deleted skill #1 and 1 session(s)"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");
    practice(&db_path, "1", "90", "", "2025-01-10");
    practice(&db_path, "1", "30", "", "2025-02-10");

    sv().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Skills:"))
        .stdout(contains("02h 00m"))
        .stdout(contains("2025-01-10"))
        .stdout(contains("2025-02-10"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_relative_db_name_is_shared_by_init_and_other_commands() {
    let home = scratch_home("relative_db");
    let cwd = home.join("workdir");
    fs::create_dir_all(&cwd).expect("create cwd");

    sv_in(&home)
        .current_dir(&cwd)
        .args(["--db", "rel_name.db", "--test", "init"])
        .assert()
        .success();

    sv_in(&home)
        .current_dir(&cwd)
        .args(["--db", "rel_name.db", "add", "Piano", "Creative", "20"])
        .assert()
        .success();

    assert!(home.join(".skillvault").join("rel_name.db").exists());
    assert!(!cwd.join("rel_name.db").exists());

    sv_in(&home)
        .current_dir(&cwd)
        .args(["--db", "rel_name.db", "list"])
        .assert()
        .success()
        .stdout(contains("Piano"));
}

#[test]
fn test_list_sessions_shows_free_text_dates() {
    let db_path = setup_test_db("free_text_date");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");
    practice(&db_path, "1", "30", "scales", "2025-03-01");

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO sessions (skill_id, duration_minutes, notes, date)
         VALUES (1, 20, 'legacy', '01/02/2025')",
        [],
    )
    .expect("insert free-text date");
    drop(conn);

    sv().args(["--db", &db_path, "list", "--sessions"])
        .assert()
        .success()
        .stdout(contains("01/02/2025"))
        .stdout(contains("2025-03-01"));

    sv().args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("0.83"));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = scratch_home("config_print");

    sv_in(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_category: General"))
        .stdout(contains("bar_width: 20"));
}

#[test]
fn test_config_print_reads_config_file() {
    let home = scratch_home("config_file");
    let dir = home.join(".skillvault");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("skillvault.conf"),
        "default_category: Music\nbar_width: 8\n",
    )
    .expect("write config");

    sv_in(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_category: Music"))
        .stdout(contains("bar_width: 8"));
}

#[test]
fn test_config_edit_without_usable_editor_fails() {
    let home = scratch_home("config_edit");

    sv_in(&home).args(["init"]).assert().success();
    assert!(home.join(".skillvault").join("skillvault.conf").exists());

    sv_in(&home)
        .env("EDITOR", "skillvault-no-such-editor")
        .args(["config", "--edit", "--editor", "another-missing-editor"])
        .assert()
        .failure()
        .stderr(contains("no usable editor"));
}

#[test]
fn test_db_vacuum_keeps_data() {
    let home = scratch_home("db_vacuum");
    let db_path = home.join("vacuum.db").to_string_lossy().to_string();

    sv_in(&home)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    sv_in(&home)
        .args(["--db", &db_path, "add", "Piano", "Creative", "20"])
        .assert()
        .success();

    sv_in(&home)
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."))
        .stdout(contains("KB"));

    sv_in(&home)
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Piano"));
}

#[test]
fn test_delete_at_end_of_input_is_cancelled() {
    let db_path = setup_test_db("delete_eof");

    init_db_with_skill(&db_path, "Piano", "Creative", "20");

    sv().args(["--db", &db_path, "del", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    sv().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Piano"));
}
