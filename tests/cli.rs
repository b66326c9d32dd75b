use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("token-simple")
            .and(predicate::str::contains("ast-treeviz"))
            .and(predicate::str::contains("ast-position")),
    );
}

#[test]
fn token_stream_for_argument() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("-f").arg("token-simple").arg("/a*");

    cmd.assert()
        .success()
        .stdout(predicate::eq("<slash><any:a><asterisk>\n"));
}

#[test]
fn default_format_is_treeviz() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("**");

    cmd.assert()
        .success()
        .stdout(predicate::eq("└─ MatchAll: **\n"));
}

#[test]
fn patterns_from_stdin() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("--format").arg("ast-tag").write_stdin("?\n\\*\n");

    cmd.assert().success().stdout(predicate::eq(
        "<pattern>\n  <match-one>?</match-one>\n</pattern>\n\
         <pattern>\n  <escaped-asterisk>\\*</escaped-asterisk>\n</pattern>\n",
    ));
}

#[test]
fn position_lookup() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.args(["-f", "ast-position", "-p", "1", "a*"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2. MatchMultiple [1..2): *"));
}

#[test]
fn unterminated_class_fails() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("[abc");

    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "unexpected eof at offset 4, expected char-class-end",
    ));
}

#[test]
fn unknown_format_lists_alternatives() {
    let mut cmd = cargo_bin_cmd!("pathglob");
    cmd.arg("--format").arg("ast-html").arg("a");

    cmd.assert().failure().stderr(
        predicate::str::contains("invalid format type: html")
            .and(predicate::str::contains("Available formats")),
    );
}
