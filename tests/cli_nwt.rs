use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ================================================================================================
// nwt stat
// ================================================================================================

#[test]
fn command_stat_basic() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("stat")
        .arg("tests/newick/catarrhini.nwk")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Type\tphylogram"));
    assert!(stdout.contains("nodes\t13"));
    assert!(stdout.contains("tips\t7"));
    assert!(stdout.contains("binary\tyes"));
    assert!(stdout.contains("tip labels\t7"));
    assert!(stdout.contains("internal labels\t6"));
    assert!(stdout.contains("rooted\tyes"));

    Ok(())
}

#[test]
fn command_stat_style_line() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("stat")
        .arg("tests/newick/catarrhini.nwk")
        .arg("--style")
        .arg("line")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Type\tnodes\ttips\tbinary\ttip labels\tinternal labels"));
    assert!(stdout.contains("phylogram\t13\t7\tyes\t7\t6"));

    Ok(())
}

#[test]
fn command_stat_stdin() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("stat")
        .arg("stdin")
        .write_stdin("((A,B)X,(C,D)Y)R;")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Type\tcladogram"));
    assert!(stdout.contains("nodes\t7"));
    assert!(stdout.contains("tips\t4"));

    Ok(())
}

#[test]
fn command_stat_invalid_input() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    cmd.arg("stat")
        .arg("stdin")
        .write_stdin("((A,B);")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unbalanced parentheses"));

    Ok(())
}

// ================================================================================================
// nwt lca
// ================================================================================================

#[test]
fn command_lca_named_internal() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("lca")
        .arg("tests/newick/catarrhini.nwk")
        .arg("Homo")
        .arg("Gorilla")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("lca\tHomininae"));
    assert!(stdout.contains("depth\t3"));
    assert!(stdout.contains("tips\tGorilla,Homo"));
    assert!(stdout.contains("clade\tGorilla,Homo,Pan"));

    Ok(())
}

#[test]
fn command_lca_single_tip() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("lca")
        .arg("tests/newick/catarrhini.nwk")
        .arg("Pongo")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // A single tip is its own LCA
    assert!(stdout.contains("lca\tPongo"));
    assert!(stdout.contains("clade\tPongo"));

    Ok(())
}

#[test]
fn command_lca_full_set_is_root() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("lca")
        .arg("tests/newick/catarrhini.nwk")
        .arg("Homo")
        .arg("Macaca")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("lca\tCatarrhini"));
    assert!(stdout.contains("depth\t0"));

    Ok(())
}

#[test]
fn command_lca_missing_tips() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    cmd.arg("lca")
        .arg("tests/newick/catarrhini.nwk")
        .arg("Homo")
        .arg("Nope")
        .arg("Zilch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nope"))
        .stderr(predicate::str::contains("Zilch"));

    Ok(())
}

#[test]
fn command_lca_internal_label_is_not_a_tip() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    cmd.arg("lca")
        .arg("tests/newick/catarrhini.nwk")
        .arg("Hominidae")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hominidae"));

    Ok(())
}

// ================================================================================================
// nwt sim
// ================================================================================================

#[test]
fn command_sim_seeded_reproducible() -> anyhow::Result<()> {
    let mut cmd1 = Command::cargo_bin("nwt")?;
    let out1 = cmd1.arg("sim").arg("5").arg("--seed").arg("42").output()?;

    let mut cmd2 = Command::cargo_bin("nwt")?;
    let out2 = cmd2.arg("sim").arg("5").arg("--seed").arg("42").output()?;

    assert!(!out1.stdout.is_empty());
    assert_eq!(out1.stdout, out2.stdout);

    let stdout = String::from_utf8(out1.stdout)?;
    for name in ["T0", "T1", "T2", "T3", "T4"] {
        assert!(stdout.contains(name));
    }
    assert!(stdout.trim().ends_with(';'));

    Ok(())
}

#[test]
fn command_sim_pipes_into_stat() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let sim = cmd.arg("sim").arg("9").arg("--seed").arg("7").output()?;

    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("stat")
        .arg("stdin")
        .write_stdin(sim.stdout)
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Type\tcladogram"));
    assert!(stdout.contains("nodes\t17"));
    assert!(stdout.contains("tips\t9"));
    assert!(stdout.contains("binary\tyes"));

    Ok(())
}

#[test]
fn command_sim_count() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("sim")
        .arg("4")
        .arg("--count")
        .arg("3")
        .arg("--seed")
        .arg("11")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 3);
    for line in stdout.lines() {
        assert!(line.ends_with(';'));
    }

    Ok(())
}

#[test]
fn command_sim_outfile() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let outfile = tempdir.path().join("sim.nwk");

    let mut cmd = Command::cargo_bin("nwt")?;
    cmd.arg("sim")
        .arg("5")
        .arg("--seed")
        .arg("42")
        .arg("-o")
        .arg(outfile.to_str().unwrap())
        .assert()
        .success();

    let contents = std::fs::read_to_string(&outfile)?;
    assert!(contents.trim().ends_with(';'));
    assert!(contents.contains("T4"));

    Ok(())
}

#[test]
fn command_sim_rejects_tiny_n() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    cmd.arg("sim")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum is 2"));

    Ok(())
}

// ================================================================================================
// nwt indent
// ================================================================================================

#[test]
fn command_indent_default() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd.arg("indent").arg("tests/newick/abc.nwk").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("  A:1,\n"));
    assert!(stdout.contains("    B:2,\n"));
    assert!(stdout.lines().count() > 1);

    Ok(())
}

#[test]
fn command_indent_compact_round_trip() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwt")?;
    let output = cmd
        .arg("indent")
        .arg("tests/newick/abc.nwk")
        .arg("--compact")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "(A:1,(B:2,C:3):4);\n");

    Ok(())
}
