use std::{
    env,
    fs::{self, File},
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

macro_rules! check_output {
    ($file_name:literal, $actual:expr) => {
        check_output(&$actual, include_bytes!($file_name), $file_name);
    };
}

fn check_output(actual: &[u8], expected: &[u8], file_name: &str) {
    if actual != expected {
        if env::var("FIX").as_deref() == Ok("y") {
            let mut snapshot_file = File::create("tests/".to_owned() + file_name).unwrap();
            snapshot_file.write_all(actual).unwrap();
        } else {
            assert_eq!(
                String::from_utf8_lossy(actual),
                String::from_utf8_lossy(expected),
                "The output didn't match the content of `{}`\n\
                 Auto-fix snapshots via FIX=y cargo test",
                file_name
            );
        }
    }
}

fn fret() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fret"));
    command.env_remove("RUST_LOG").env_remove("FRET_PROFILE");
    command
}

fn call_cli(args: &[&str]) -> Output {
    fret().args(args).output().unwrap()
}

fn call_cli_piped(first_args: &[&str], second_args: &[&str]) -> Output {
    let first_command = fret()
        .args(first_args)
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    fret()
        .args(second_args)
        .stdin(first_command.stdout.unwrap())
        .output()
        .unwrap()
}

#[test]
fn scale_of_c() {
    let output = call_cli(&["scale", "C"]);
    check_output!("snapshots/scale_C.stdout", output.stdout);
}

#[test]
fn scale_of_f_sharp() {
    let output = call_cli(&["scale", "F#"]);
    check_output!("snapshots/scale_F_sharp.stdout", output.stdout);
}

#[test]
fn g_major_around_first_fret() {
    let output = call_cli(&["position", "--anchor", "1", "key", "G"]);
    check_output!("snapshots/position_anchor_1_key_G.stdout", output.stdout);
}

#[test]
fn c_major_in_a_shape() {
    let output = call_cli(&["position", "--shape", "a", "key", "C"]);
    check_output!("snapshots/position_shape_a_key_C.stdout", output.stdout);
}

#[test]
fn d_major_in_drop_d_tuning() {
    let output = call_cli(&[
        "position",
        "--anchor",
        "0",
        "key",
        "D",
        "--tuning",
        "E,B,G,D,A,D",
    ]);
    check_output!(
        "snapshots/position_anchor_0_key_D_drop_d.stdout",
        output.stdout
    );
}

#[test]
fn c_major_on_the_full_board() {
    let output = call_cli(&["position", "--full", "key", "C"]);
    check_output!("snapshots/position_full_key_C.stdout", output.stdout);
}

#[test]
fn grid_file_piped_into_position() {
    let output = call_cli_piped(&["grid", "G"], &["position", "--anchor", "1", "stdin"]);
    check_output!("snapshots/position_anchor_1_key_G.stdout", output.stdout);
}

#[test]
fn list_shapes() {
    let output = call_cli(&["shapes"]);
    check_output!("snapshots/shapes.stdout", output.stdout);
}

#[test]
fn svg_of_g_major_around_first_fret() {
    let output = call_cli(&["svg", "--anchor", "1", "key", "G"]);
    let svg = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<circle").count(), 18);
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Number of note markers: 18\n"
    );
}

#[test]
fn svg_with_profile_overrides() {
    let profile_location = Path::new(env!("CARGO_TARGET_TMPDIR")).join("narrow_profile.yml");
    fs::write(&profile_location, "width: 300.0\nroot_color: green\n").unwrap();

    let output = call_cli(&[
        "svg",
        "--profile",
        profile_location.to_str().unwrap(),
        "--anchor",
        "1",
        "key",
        "G",
    ]);
    let svg = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(svg.contains(r#"viewBox="0 0 300 200" width="300" height="200""#));
    assert_eq!(svg.matches(r#"fill="green""#).count(), 3);
}

#[test]
fn reject_missing_profile() {
    let profile_location = Path::new(env!("CARGO_TARGET_TMPDIR")).join("no_such_profile.yml");

    let output = call_cli(&[
        "svg",
        "--profile",
        profile_location.to_str().unwrap(),
        "key",
        "C",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not read profile"));
}

#[test]
fn reject_unknown_root() {
    let output = call_cli(&["scale", "Bb"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid note name 'Bb'"));
}

#[test]
fn reject_anchor_outside_of_the_fretboard() {
    for anchor in ["13", "-1"] {
        let output = call_cli(&["position", "--anchor", anchor, "key", "C"]);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr)
            .contains(&format!("Invalid fret {anchor}: Must be between 0 and 12")));
    }
}

#[test]
fn reject_conflicting_window_options() {
    let output = call_cli(&["position", "--anchor", "3", "--shape", "d", "key", "C"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
