use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create fixture");
    file.write_all(contents.as_bytes()).expect("failed to write fixture");
    file
}

/// Run the binary with `args`, feeding `stdin`, returning (status ok, stdout).
fn run(args: &[&str], stdin: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(args)
        .env_remove("BROADSIDE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start broadside");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait on broadside");
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    (output.status.success(), stdout)
}

#[test]
fn filenames_from_stdin() {
    let placements = fixture("A 0 0 0 4\nB 2 2 2 5\nS 4 0 4 2\nD 6 0 6 2\nP 8 0 8 1\n");
    let guesses = fixture("0 0\n0 0\n-1 5\n5 5\n");
    let stdin = format!(
        "{}\n{}\n",
        placements.path().display(),
        guesses.path().display()
    );
    let (ok, stdout) = run(&[], &stdin);
    assert!(ok);
    assert_eq!(stdout, "hit\nhit (again)\nillegal guess\nmiss\n");
}

#[test]
fn load_error_exits_successfully() {
    let placements = fixture("A 0 0 0 4\nB 0 2 3 2\nS 4 0 4 2\nD 6 0 6 2\nP 8 0 8 1\n");
    // the guess filename is never needed
    let stdin = format!("{}\n", placements.path().display());
    let (ok, stdout) = run(&[], &stdin);
    assert!(ok);
    assert_eq!(stdout, "ERROR: overlapping ship: B 0 2 3 2\n");
}

#[test]
fn play_with_options() {
    let placements = fixture("P 8 0 8 1\nD 6 0 6 2\nS 4 0 4 2\nB 2 2 2 5\nA 0 0 0 4\n");
    let guesses = fixture("9 9\n9 9\n");
    let (ok, stdout) = run(
        &[
            "play",
            "--placements",
            &placements.path().display().to_string(),
            "--guesses",
            &guesses.path().display().to_string(),
        ],
        "",
    );
    assert!(ok);
    assert_eq!(stdout, "miss\nmiss (again)\n");
}

#[test]
fn missing_file_fails() {
    let (ok, stdout) = run(&["play", "--placements", "/nonexistent/broadside/fleet.txt"], "");
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn generated_fleet_is_playable() {
    let (ok, fleet) = run(&["fleet", "--seed", "12345"], "");
    assert!(ok);
    assert_eq!(fleet.lines().count(), 5);

    let (_, again) = run(&["fleet", "--seed", "12345"], "");
    assert_eq!(fleet, again);

    let placements = fixture(&fleet);
    let guesses = fixture("");
    let (ok, stdout) = run(
        &[
            "play",
            "--placements",
            &placements.path().display().to_string(),
            "--guesses",
            &guesses.path().display().to_string(),
        ],
        "",
    );
    assert!(ok);
    assert!(stdout.is_empty(), "unexpected output: {}", stdout);
}
