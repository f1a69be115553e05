use assert_cmd::Command;
use predicates::prelude::*;

fn rolo(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg("--file").arg(data_file);
    cmd
}

#[test]
fn add_list_and_delete_phone_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");

    rolo(&data_file)
        .write_stdin(
            "add Anna 0501234567\n\
             add Anna 0507654321\n\
             phone Anna\n\
             del-phone Anna 0\n\
             phone Anna\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Anna' added to the book."))
        .stdout(predicate::str::contains(
            "Phone 0507654321 added to contact 'Anna'.",
        ))
        .stdout(predicate::str::contains("[0] 0501234567"))
        .stdout(predicate::str::contains("[1] 0507654321"))
        .stdout(predicate::str::contains(
            "Phone at index 0 removed from 'Anna'.",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn contacts_survive_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");

    rolo(&data_file)
        .write_stdin("add Anna 0501234567\nadd@ Anna anna@example.com\nexit\n")
        .assert()
        .success();

    rolo(&data_file)
        .write_stdin("phone Anna\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] 0501234567"))
        .stdout(predicate::str::contains("[0] anna@example.com"));
}

#[test]
fn future_birthday_is_rejected_and_not_stored() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");

    rolo(&data_file)
        .write_stdin(
            "add Bob 0501112233\n\
             add-birthday Bob 01.01.2030\n\
             show-birthday Bob\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid date or a date in the future: 01.01.2030",
        ))
        .stdout(predicate::str::contains(
            "No birthday is set for contact 'Bob'.",
        ));
}

#[test]
fn corrupt_contacts_file_warns_and_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");
    std::fs::write(&data_file, "{ this is not json").unwrap();

    rolo(&data_file)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read the contacts file"))
        .stdout(predicate::str::contains("The address book is empty."));
}

#[test]
fn unknown_and_malformed_commands_do_not_kill_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");

    rolo(&data_file)
        .write_stdin(
            "frobnicate\n\
             add Anna\n\
             del-phone Anna x\n\
             hello\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command 'frobnicate'"))
        .stdout(predicate::str::contains("Usage: add <name> <phone>"))
        .stdout(predicate::str::contains("is not a valid index"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn upcoming_birthdays_report_is_rendered() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("contacts.json");

    // A birthday always inside the window regardless of the current date:
    // look a whole year ahead.
    rolo(&data_file)
        .write_stdin(
            "add Anna 0501234567\n\
             add-birthday Anna 01.01.1990\n\
             birthdays 366\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Upcoming birthdays:"))
        .stdout(predicate::str::contains("Anna"));
}
