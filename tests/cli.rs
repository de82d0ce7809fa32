//! Tests for the binary's non-interactive surface.

use std::process::Command;

fn garagefront_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_garagefront"))
}

#[test]
fn test_help_lists_options() {
    let output = garagefront_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--sections"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_sections_prints_home_composition() {
    let output = garagefront_cmd()
        .args(["--sections", "home"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"["hero","trust-bar","services-grid","testimonials","contact-form"]"#
    );
}

#[test]
fn test_sections_prints_single_section_pages() {
    for (page, expected) in [
        ("services", r#"["services-grid"]"#),
        ("about", r#"["about"]"#),
        ("contact", r#"["contact-form"]"#),
    ] {
        let output = garagefront_cmd()
            .args(["--sections", page])
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), expected);
    }
}

#[test]
fn test_unknown_page_is_rejected() {
    let output = garagefront_cmd()
        .args(["--sections", "blog"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("blog"));
}
