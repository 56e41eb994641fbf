use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn batch_converts_directory_and_prints_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "- item\n").unwrap();
    fs::write(dir.path().join("a.md"), "# PHP RFC: Enums\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "# ignored\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--input").arg(dir.path().as_os_str());

    cmd.assert().success().stdout("a.md\nb.md\n");

    let out = dir.path().join("dokuwiki");
    assert_eq!(
        fs::read_to_string(out.join("a.md")).unwrap(),
        "====== PHP RFC: Enums ======\n"
    );
    assert_eq!(fs::read_to_string(out.join("b.md")).unwrap(), "  * item\n");
    assert!(!out.join("notes.txt").exists());
}

#[test]
fn batch_subcommand_with_explicit_output() {
    let dir = tempdir().unwrap();
    let wiki = dir.path().join("wiki");
    fs::write(dir.path().join("doc.md"), "*new*").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("batch")
        .arg("-i")
        .arg(dir.path().as_os_str())
        .arg("-o")
        .arg(wiki.as_os_str());

    cmd.assert().success().stdout("doc.md\n");
    assert_eq!(fs::read_to_string(wiki.join("doc.md")).unwrap(), "//new//");
}

#[test]
fn batch_runs_in_current_directory_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "plain text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.current_dir(dir.path());

    cmd.assert().success().stdout("doc.md\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("dokuwiki").join("doc.md")).unwrap(),
        "plain text\n"
    );
}

#[test]
fn batch_fails_on_missing_rfc_title() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("draft.md"), "# Draft\n\nVOTING_SNIPPET\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--input").arg(dir.path().as_os_str());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not start with '# PHP RFC: '"));
}

#[test]
fn batch_lenient_title_inserts_snippet() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("draft.md"), "# Draft\n\nVOTING_SNIPPET\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--lenient-title")
        .arg("--input")
        .arg(dir.path().as_os_str());

    cmd.assert().success().stdout("draft.md\n");
    let output = fs::read_to_string(dir.path().join("dokuwiki").join("draft.md")).unwrap();
    assert!(output.contains("<doodle title=\"Accept the  RFC?\""));
}

#[test]
fn batch_missing_input_dir_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--input").arg(dir.path().join("absent").as_os_str());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error listing directory"));
}

#[test]
fn batch_title_mode_option() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("draft.md"), "# Draft\n\nVOTING_SNIPPET\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--title-mode")
        .arg("lenient")
        .arg("--input")
        .arg(dir.path().as_os_str());
    cmd.assert().success().stdout("draft.md\n");

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.arg("--title-mode")
        .arg("loose")
        .arg("--input")
        .arg(dir.path().as_os_str());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Title mode 'loose' not found"));
}

#[test]
fn batch_input_dir_named_like_a_subcommand() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("convert");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("doc.md"), "- item\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2dw");
    cmd.current_dir(dir.path()).arg("--input").arg("convert");

    cmd.assert().success().stdout("doc.md\n");
    assert_eq!(
        fs::read_to_string(input.join("dokuwiki").join("doc.md")).unwrap(),
        "  * item\n"
    );
}
