use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aruco_gen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aruco-gen").expect("binary");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn single_marker_uses_default_name_and_size() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--id", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aruco_marker_5.png"));

    let img = image::open(dir.path().join("aruco_marker_5.png")).expect("png");
    assert_eq!((img.width(), img.height()), (200, 200));
}

#[test]
fn single_marker_respects_size_and_output() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--id", "0", "--size", "300", "--output", "custom.png"])
        .assert()
        .success();

    let img = image::open(dir.path().join("custom.png")).expect("png");
    assert_eq!((img.width(), img.height()), (300, 300));
}

#[test]
fn out_of_range_id_fails_and_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--id", "50", "--dict", "DICT_4X4_50", "--output", "bad.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!dir.path().join("bad.png").exists());
}

#[test]
fn unknown_dictionary_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--dict", "DICT_9X9_50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dictionary"));
}

#[test]
fn batch_mode_writes_one_file_per_id() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--id", "10", "--multiple", "5", "--output-dir", "markers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 markers"));

    for id in 10..15 {
        assert!(
            dir.path()
                .join("markers")
                .join(format!("aruco_marker_{id}.png"))
                .exists(),
            "missing marker {id}"
        );
    }
    assert_eq!(std::fs::read_dir(dir.path().join("markers")).unwrap().count(), 5);
}

#[test]
fn batch_range_past_capacity_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--id", "48", "--multiple", "5", "--output-dir", "markers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!dir.path().join("markers").exists());
}

#[test]
fn a4_layout_has_formula_dimensions() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--print-layout", "a4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aruco_print_a4.png"));

    let img = image::open(dir.path().join("aruco_print_a4.png")).expect("png");
    assert_eq!((img.width(), img.height()), (2480, 3508));
}

#[test]
fn a5_layout_at_default_count() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--print-layout", "a5", "--output", "page.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 marker(s)"));

    let img = image::open(dir.path().join("page.png")).expect("png");
    assert_eq!((img.width(), img.height()), (1748, 2480));
}

#[test]
fn layout_capacity_error_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--print-layout", "a4", "--count", "10", "--output", "page.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not fit"));

    assert!(!dir.path().join("page.png").exists());
}

#[test]
fn unknown_format_is_rejected_by_the_parser() {
    let dir = TempDir::new().expect("tempdir");
    aruco_gen(&dir)
        .args(["--print-layout", "letter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().expect("tempdir");
    for name in ["first.png", "second.png"] {
        aruco_gen(&dir)
            .args(["--id", "17", "--dict", "DICT_5X5_100", "--output", name])
            .assert()
            .success();
    }

    let a = std::fs::read(dir.path().join("first.png")).expect("first");
    let b = std::fs::read(dir.path().join("second.png")).expect("second");
    assert_eq!(a, b);
}
