use {
    std::{
        io::prelude::*,
        process::{
            Command,
            Output,
            Stdio,
        },
    },
    pretty_assertions::assert_eq,
};

fn tsconv(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tsconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tsconv");
    let mut child_stdin = child.stdin.take().expect("stdin not piped");
    if let Some(input) = stdin {
        child_stdin.write_all(input.as_bytes()).expect("failed to write stdin");
    }
    drop(child_stdin);
    child.wait_with_output().expect("failed to wait for tsconv")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).expect("stderr is not UTF-8")
}

#[test]
fn converts_arguments() {
    let output = tsconv(&["0", "1000"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:00:00Z\n1970-01-01T00:16:40Z\n");
}

#[test]
fn from_millis() {
    let output = tsconv(&["0", "--from", "millis"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:00:00Z\n");
}

#[test]
fn format_names_ignore_case() {
    let output = tsconv(&["--from", "NANOS", "--to", "RFC3339", "1000000000000"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:16:40Z\n");
}

#[test]
fn negative_argument() {
    let output = tsconv(&["-1"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1969-12-31T23:59:59Z\n");
}

#[test]
fn reads_stdin_lines() {
    let output = tsconv(&[], Some("0\n1000\n"));
    // the trailing newline yields an empty unit, which is not an integer
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:00:00Z\n1970-01-01T00:16:40Z\n");
    assert!(stderr(&output).starts_with("* * * Input:  as unix: "));
}

#[test]
fn reads_stdin_without_trailing_newline() {
    let output = tsconv(&["--from", "secs"], Some("0\n1000"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:00:00Z\n1970-01-01T00:16:40Z\n");
}

#[test]
fn malformed_argument() {
    let output = tsconv(&["notanumber", "0"], None);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("* * * Input: notanumber as unix: malformed integer"));
}

#[test]
fn unsupported_formats() {
    let output = tsconv(&["--from", "parsec", "0"], None);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("unsupported format: \"parsec\""));
    let output = tsconv(&["--to", "iso8601", "0"], None);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("* * * Output: "));
}

#[test]
fn timezone() {
    let output = tsconv(&["--timezone", "Asia/Tokyo", "0"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T09:00:00+09:00\n");
}

#[test]
fn logging_flags_do_not_change_output() {
    let output = tsconv(&["--debug", "-vv", "0"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1970-01-01T00:00:00Z\n");
}

#[test]
fn unknown_flag() {
    let output = tsconv(&["--frobnicate", "0"], None);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("* * * "));
    assert!(stderr(&output).contains("--frobnicate"));
}

#[test]
fn help_is_not_an_error() {
    let output = tsconv(&["--help"], None);
    assert!(output.status.success());
    assert!(stdout(&output).contains("--from"));
}

#[test]
fn year_beyond_four_digits() {
    let output = tsconv(&["253402300799", "253402300800"], None);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "9999-12-31T23:59:59Z\n");
    assert!(stderr(&output).starts_with("* * * Output: "));
    assert!(stderr(&output).contains(" as rfc3339: year 10000 is outside 0000 to 9999"));
}
