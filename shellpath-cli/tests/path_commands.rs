//! Integration tests for the path conversion and component commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_host_windows_drive() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "windows", "host", "/c/temp"])
        .assert()
        .success()
        .stdout("c:\\temp\n");
}

#[test]
fn test_shell_windows_drive() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "windows", "shell", "c:\\temp\\x"])
        .assert()
        .success()
        .stdout("/c/temp/x\n");
}

#[test]
fn test_host_posix_collapses_separators() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "posix", "host", "/usr//local///bin"])
        .assert()
        .success()
        .stdout("/usr/local/bin\n");
}

#[test]
fn test_basename_and_dirname() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "posix", "basename", "/as/sd/df/fg/me.txt"])
        .assert()
        .success()
        .stdout("me.txt\n");
    env.command()
        .args(["--host-family", "posix", "dirname", "/as/sd/df/fg/me.txt"])
        .assert()
        .success()
        .stdout("/as/sd/df/fg\n");
}

#[test]
fn test_join_segments() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "posix", "join", "/a", "b", "/c/d"])
        .assert()
        .success()
        .stdout("/a/b/c/d\n");
}

#[test]
fn test_splitext_two_lines() {
    let env = TestEnv::new();
    env.command()
        .args(["--host-family", "posix", "splitext", "/src/main.c"])
        .assert()
        .success()
        .stdout("/src/main\n.c\n");
}

#[cfg(unix)]
#[test]
fn test_abspath_resolves_dots() {
    let env = TestEnv::new();
    let work = env.create_dir("work");

    env.command()
        .current_dir(&work)
        .args(["abspath", "a/../b/."])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/work/b\n"))
        .stdout(predicate::str::starts_with("/"));
}

#[test]
fn test_host_family_from_environment() {
    let env = TestEnv::new();
    env.command()
        .env("SHELLPATH_HOST_FAMILY", "windows")
        .args(["host", "/d/src"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("d:\\src"));
}
