//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    Command::cargo_bin("book-paginator").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    // TC-CLI-001: Labels from a seed value
    #[test]
    fn test_labels_from_seed() {
        cli()
            .args(["labels", "4", "--type", "roman", "-n", "3"])
            .assert()
            .success()
            .stdout("IV\nV\nVI\n");
    }

    // TC-CLI-002: Labels from a raw initializer
    #[test]
    fn test_labels_from_initializer() {
        cli()
            .args(["labels", "--initializer", "1½", "-n", "4"])
            .assert()
            .success()
            .stdout("1\n1\n2\n2\n");
    }

    // TC-CLI-003: JSON output
    #[test]
    fn test_labels_json() {
        cli()
            .args(["labels", "1", "--mode", "double_pages", "-n", "2", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"1 2\"").and(predicate::str::contains("\"3 4\"")));
    }

    // TC-CLI-004: Initializer command
    #[test]
    fn test_initializer_command() {
        cli()
            .args(["initializer", "1", "--mode", "rectoverso_foliation"])
            .assert()
            .success()
            .stdout("1½¡`r`¿`v`\n");
    }

    // TC-CLI-005: Invalid initializer exit code
    #[test]
    fn test_invalid_initializer_exit_code() {
        cli()
            .args(["labels", "--initializer", "`oops"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("unmatched text escape"));
    }

    // TC-CLI-006: Config file defaults
    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pagination]\nkind = \"roman\"\ncount = 2").unwrap();

        cli()
            .args(["labels", "1", "--config"])
            .arg(file.path())
            .assert()
            .success()
            .stdout("I\nII\n");

        // Command line wins over the file
        cli()
            .args(["labels", "1", "--type", "arabic", "-n", "1", "--config"])
            .arg(file.path())
            .assert()
            .success()
            .stdout("1\n");
    }

    // TC-CLI-007: Modes listing
    #[test]
    fn test_modes() {
        cli()
            .arg("modes")
            .assert()
            .success()
            .stdout(predicate::str::contains("double_pages").and(predicate::str::contains("99")));
    }

    // TC-CLI-008: Worded separator between Roman pages
    #[test]
    fn test_worded_separator() {
        cli()
            .args(["labels", "9", "-t", "roman", "-m", "double_pages", "-s", " and ", "-n", "2"])
            .assert()
            .success()
            .stdout("IX and X\nXI and XII\n");
    }

    // TC-CLI-009: Names from the modes listing are accepted
    #[test]
    fn test_snake_case_names() {
        cli()
            .args(["labels", "1", "-t", "free_text", "-m", "rectoverso_foliation", "-n", "1"])
            .assert()
            .success();
    }

    // TC-CLI-010: Missing seed
    #[test]
    fn test_missing_seed() {
        cli().arg("labels").assert().failure().code(2);
    }
}
