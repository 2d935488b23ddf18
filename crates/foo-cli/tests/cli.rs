use assert_cmd::prelude::*;
use std::process::{Command, Output};

fn foo(args: &[&str]) -> Output {
    Command::cargo_bin("foo").unwrap().args(args).output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn alice_30_succeeds() {
    let out = foo(&["Alice", "30"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Foo: name: 'Alice', age: 30\n");
    assert!(stderr(&out).is_empty());
}

#[test]
fn bob_121_is_too_old() {
    let out = foo(&["Bob", "121"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("nobody's that old!"));
}

#[test]
fn eve_0_is_invalid() {
    let out = foo(&["Eve", "0"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("ERROR: invalid age"));
}

#[test]
fn negative_age_reaches_the_constructor() {
    let out = foo(&["Eve", "-5"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("ERROR: invalid age"));
}

#[test]
fn no_args_prints_usage() {
    let out = foo(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());

    let err = stderr(&out);
    assert!(err.starts_with("usage: "));
    assert!(err.trim_end().ends_with(" <name> <age>"));
}

#[test]
fn too_many_args_prints_usage() {
    let out = foo(&["Alice", "30", "extra"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("usage: "));
}

#[test]
fn debug_log_level_goes_to_stderr_only() {
    let out = foo(&["--log-level", "debug", "Alice", "30"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Foo: name: 'Alice', age: 30\n");
    assert!(stderr(&out).contains("parsed age"));
}

#[test]
fn flag_like_name_is_still_a_name() {
    let out = foo(&["-h", "30"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Foo: name: '-h', age: 30\n");
}

#[test]
fn separator_does_not_hide_an_extra_arg() {
    let out = foo(&["--", "Alice", "30"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("usage: "));
}
