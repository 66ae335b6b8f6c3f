use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_db, sv};

#[test]
fn test_menu_add_and_view_progress() {
    let db_path = setup_test_db("menu_add_view");

    sv().args(["--db", &db_path])
        .write_stdin("1\nPiano\nCreative\n20\n3\n5\n")
        .assert()
        .success()
        .stdout(contains("SkillVault Menu:"))
        .stdout(contains("Skill 'Piano' added with id 1."))
        .stdout(contains(
            "#1 Skill: Piano, Target: 20 hrs, Practiced: 0.00 hrs, Progress: 0.00%",
        ));
}

#[test]
fn test_menu_log_sessions_and_progress() {
    let db_path = setup_test_db("menu_log_sessions");

    sv().args(["--db", &db_path, "menu"])
        .write_stdin(
            "1\nGuitar\nCreative\n10\n\
             2\n1\n150\nscales\n2025-06-01\n\
             2\n1\n300\nsongs\n2025-06-02\n\
             3\n5\n",
        )
        .assert()
        .success()
        .stdout(contains("Logged 150 min for skill #1 on 2025-06-01"))
        .stdout(contains(
            "#1 Skill: Guitar, Target: 10 hrs, Practiced: 7.50 hrs, Progress: 75.00%",
        ));
}

#[test]
fn test_menu_invalid_target_persists_nothing() {
    let db_path = setup_test_db("menu_bad_target");

    sv().args(["--db", &db_path])
        .write_stdin("1\nPiano\nCreative\ntwenty\n3\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid input for target hours."))
        .stdout(contains("No skills recorded yet."));
}

#[test]
fn test_menu_invalid_duration_persists_nothing() {
    let db_path = setup_test_db("menu_bad_duration");

    sv().args(["--db", &db_path])
        .write_stdin("1\nPiano\nCreative\n20\n2\n1\nlong\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid input. Please enter numbers where required."));

    sv().args(["--db", &db_path, "list", "--sessions"])
        .assert()
        .success()
        .stdout(contains("No practice sessions found."));
}

#[test]
fn test_menu_log_session_for_unknown_skill_reports_error() {
    let db_path = setup_test_db("menu_unknown_skill");

    sv().args(["--db", &db_path])
        .write_stdin("2\n7\n30\nnotes\n2025-06-01\n5\n")
        .assert()
        .success()
        .stdout(contains("No skill found with id 7"));
}

#[test]
fn test_menu_delete_skill() {
    let db_path = setup_test_db("menu_delete");

    sv().args(["--db", &db_path])
        .write_stdin("1\nPiano\nCreative\n20\n4\n1\n3\n5\n")
        .assert()
        .success()
        .stdout(contains("Deleted skill #1 and 0 session(s)."))
        .stdout(contains("No skills recorded yet."));
}

#[test]
fn test_menu_invalid_choice_and_invalid_id() {
    let db_path = setup_test_db("menu_invalid");

    sv().args(["--db", &db_path])
        .write_stdin("9\n4\nabc\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice."))
        .stdout(contains("Invalid skill ID."));
}

#[test]
fn test_menu_ends_on_eof() {
    let db_path = setup_test_db("menu_eof");

    sv().args(["--db", &db_path])
        .write_stdin("1\nPiano\n")
        .assert()
        .success()
        .stdout(contains("added").not());
}
