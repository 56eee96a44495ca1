// Tests for `wayfinder repl`: interactive sessions over stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use super::common::wayfinder_bin;

fn repl(input: &str) -> (i32, String, String) {
    let dir = tempfile::TempDir::new().unwrap();
    let mut child = Command::new(wayfinder_bin())
        .arg("repl")
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    (
        out.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&out.stdout).into_owned(),
        String::from_utf8_lossy(&out.stderr).into_owned(),
    )
}

#[test]
fn test_repl_session() {
    let (code, stdout, stderr) = repl("vertex A B C\nedge A B 2\nedge B C 2\npath A C\nquit\n");
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("wayfinder> "));
    assert!(stdout.contains("Shortest distance from A to C: 4"));
}

#[test]
fn test_repl_recovers_from_errors() {
    let (code, stdout, stderr) = repl("vertex A\npath A Z\nvertex Z\npath A Z\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("error: Unknown vertex: Z"));
    assert!(stdout.contains("No path found from A to Z"));
}

#[test]
fn test_repl_warns_on_empty_graph() {
    let (_, _, stderr) = repl("path A B\n");
    assert!(stderr.contains("without vertices or edges"), "stderr: {stderr}");
}
