//! Integration tests for the `westbound` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_VIEWER: &str = "westbound-route-missing-for-tests";

/// `westbound` running in `dir`, with the viewer and browser kept out of the way.
fn westbound(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("westbound").unwrap();
    cmd.current_dir(dir.path())
        .env("WESTBOUND_VIEWER", MISSING_VIEWER)
        .env("WESTBOUND_NO_OPEN", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// --demo
// ---------------------------------------------------------------------------

#[test]
fn demo_plays_to_the_rooftop() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--demo")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("== The Offer Letter ==")
                .and(predicate::str::contains("[auto-choice] 1"))
                .and(predicate::str::contains("== Packing the Car =="))
                .and(predicate::str::contains("== Rooftop Resolve =="))
                .and(predicate::str::contains("Thanks for guiding Eli!"))
                .and(predicate::str::contains("8 choices made")),
        );
}

#[test]
fn demo_writes_the_map() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A simple map of Eli's journey was generated at: journey_map.txt",
        ));

    let map = fs::read_to_string(dir.path().join("journey_map.txt")).unwrap();
    assert!(map.contains("Michigan to Las Vegas"));
    assert!(map.contains("Story branches:"));
    assert!(map.contains("[Planning the Move] --2--> [Booking the Flight]"));
}

#[test]
fn existing_map_is_left_alone() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("journey_map.txt"), "cached map").unwrap();

    westbound(&dir)
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("generated at: journey_map.txt"));

    let map = fs::read_to_string(dir.path().join("journey_map.txt")).unwrap();
    assert_eq!(map, "cached map");
}

#[test]
fn demo_without_view_renders_nothing() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("route view").not());

    assert!(!dir.path().join("journey_route.html").exists());
}

#[test]
fn demo_with_view_falls_back_to_html() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .args(["--demo", "--view"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unable to open the route window")
                .and(predicate::str::contains(MISSING_VIEWER))
                .and(predicate::str::contains(
                    "A route summary was written to: journey_route.html",
                )),
        );

    let html = fs::read_to_string(dir.path().join("journey_route.html")).unwrap();
    assert!(html.contains("<svg"));
    assert!(html.contains("Celebrate with a rooftop view"));
    assert_eq!(html.matches("<li>").count(), 8);
}

// ---------------------------------------------------------------------------
// interactive
// ---------------------------------------------------------------------------

#[test]
fn staying_home_ends_quickly() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your choice: ")
                .and(predicate::str::contains("== Staying Put =="))
                .and(predicate::str::contains(
                    "Would you like to open a route view of Eli's journey? (Y/N): ",
                ))
                .and(predicate::str::contains("1 choice made")),
        );

    assert!(!dir.path().join("journey_map.txt").exists());
    assert!(!dir.path().join("journey_route.html").exists());
}

#[test]
fn answering_yes_renders_the_route() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .write_stdin("2\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening a route view"));

    assert!(dir.path().join("journey_route.html").exists());
}

#[test]
fn closing_stdin_at_the_route_prompt_renders_nothing() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(Y/N): ")
                .and(predicate::str::contains("Ending reached: Staying Put"))
                .and(predicate::str::contains("Opening a route view").not()),
        );

    assert!(!dir.path().join("journey_route.html").exists());
}

#[test]
fn view_flag_renders_without_asking() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--view")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Opening a route view")
                .and(predicate::str::contains("Would you like").not()),
        );

    let html = fs::read_to_string(dir.path().join("journey_route.html")).unwrap();
    assert!(html.contains("Stay in Michigan and postpone the move"));
}

#[test]
fn quitting_at_the_first_decision() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You chose to quit. Safe travels, wherever they lead.")
                .and(predicate::str::contains("Journey left unfinished"))
                .and(predicate::str::contains("(no choices made)"))
                .and(predicate::str::contains("Would you like").not()),
        );
}

#[test]
fn invalid_choice_is_reprompted() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .write_stdin("x\n1\nQ\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid choice. Please try again.")
                .and(predicate::str::contains("== Planning the Move ==")),
        );
}

#[test]
fn closed_stdin_leaves_cleanly() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("You chose to quit."));
}

// ---------------------------------------------------------------------------
// command line
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--demo").and(predicate::str::contains("--view")));
}

#[test]
fn turtle_is_an_alias_for_view() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .args(["--demo", "--turtle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening a route view"));

    assert!(dir.path().join("journey_route.html").exists());
}

#[test]
fn unknown_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    westbound(&dir)
        .arg("--turbo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--turbo"));
}
