//! End-to-end tests for the sam-flags and sam-header binaries.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SAMPLE_SAM: &str = "@HD\tVN:1.6\tSO:coordinate
@SQ\tSN:chr1\tLN:248956422
@RG\tID:rg1\tSM:NA12878\tPL:ILLUMINA
@PG\tID:bwa\tPN:bwa\tVN:0.7.17
r1\t99\tchr1\t100\t60\t4M\t=\t300\t204\tACGT\tIIII
r1\t147\tchr1\t300\t60\t4M\t=\t100\t-204\tACGT\tIIII
r2\t73\tchr1\t500\t60\t4M\t=\t500\t0\tACGT\tIIII
r2\t133\tchr1\t500\t0\t*\t=\t500\t0\tACGT\tIIII
r3\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII
";

fn sam_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sam").expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn count_row(name: &str, count: u64) -> String {
    format!("┃ {name:<22} ┃ {count:>5} ┃")
}

/// Flag counts for a small paired-end file
#[test]
fn test_sam_flags_counts() {
    let file = sam_file(SAMPLE_SAM);

    let assert = Command::cargo_bin("sam-flags")
        .unwrap()
        .arg("--sam")
        .arg(file.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // 99 = paired, proper, mate reverse, read1
    // 147 = paired, proper, reverse, read2
    // 73 = paired, mate unmapped, read1
    // 133 = paired, unmapped, read2
    // 4 = unmapped
    for (name, count) in [
        ("PAIRED", 4),
        ("PROPER_PAIR", 2),
        ("UNMAP", 2),
        ("MUNMAP", 1),
        ("REVERSE", 1),
        ("MREVERSE", 1),
        ("READ1", 2),
        ("READ2", 2),
        ("SECONDARY", 0),
        ("QCFAIL", 0),
        ("DUP", 0),
        ("SUPPLEMENTARY", 0),
        ("SINGLETONS", 1),
        ("ITSELF_AND_MATE_MAPPED", 2),
    ] {
        assert!(
            stdout.contains(&count_row(name, count)),
            "missing row {name}={count} in:\n{stdout}"
        );
    }
}

/// Zero-valued flags produce a table of zeros
#[test]
fn test_sam_flags_all_zero() {
    let file = sam_file("r1\t0\tchr1\t1\nr2\t0\tchr1\t2\n");

    Command::cargo_bin("sam-flags")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("┃ FLAG "))
        .stdout(predicate::str::contains(count_row("PAIRED", 0)))
        .stdout(predicate::str::contains(count_row("ITSELF_AND_MATE_MAPPED", 0)));
}

/// A non-numeric FLAG aborts the run without a table
#[test]
fn test_sam_flags_invalid_flag() {
    let file = sam_file("@HD\tVN:1.6\nr1\tpaired\tchr1\t1\n");

    Command::cargo_bin("sam-flags")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid FLAG value 'paired'"));
}

/// FLAG values wider than 12 bits are rejected
#[test]
fn test_sam_flags_out_of_range() {
    let file = sam_file("r1\t4096\tchr1\t1\n");

    Command::cargo_bin("sam-flags")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit in 12 bits"));
}

#[test]
fn test_sam_flags_missing_file() {
    Command::cargo_bin("sam-flags")
        .unwrap()
        .arg("-a")
        .arg("/nonexistent/input.sam")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read /nonexistent/input.sam"));
}

#[test]
fn test_sam_flags_requires_sam_argument() {
    Command::cargo_bin("sam-flags")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sam"));
}

/// Header tags are annotated with their reference descriptions
#[test]
fn test_sam_header_annotates_tags() {
    let file = sam_file(SAMPLE_SAM);

    Command::cargo_bin("sam-header")
        .unwrap()
        .arg("--sam")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| Header "))
        .stdout(predicate::str::contains("| Description "))
        .stdout(predicate::str::contains("| @HD      | VN  | 1.6 "))
        .stdout(predicate::str::contains("| @PG      | ID  | bwa "))
        .stdout(predicate::str::contains("| (line 4) |"))
        .stdout(predicate::str::contains("Reference sequence length."))
        .stdout(predicate::str::contains("Sample. Use pool name where a pool"))
        .stdout(predicate::str::contains("Description not found").not());
}

/// Unknown tags get a placeholder instead of failing
#[test]
fn test_sam_header_unknown_tag() {
    let file = sam_file("@SQ\tSN:chr1\tXX:foo\n");

    Command::cargo_bin("sam-header")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| XX "))
        .stdout(predicate::str::contains("Description not found"));
}

#[test]
fn test_sam_header_no_headers() {
    let file = sam_file("r1\t0\tchr1\t1\n@HD\tVN:1.6\n");

    Command::cargo_bin("sam-header")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .success()
        .stdout("No SAM headers found\n");
}

#[test]
fn test_sam_header_unknown_header_type() {
    let file = sam_file("@HD\tVN:1.6\n@XY\tAB:cd\n");

    Command::cargo_bin("sam-header")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown header type '@XY'"));
}

#[test]
fn test_sam_header_comment_line() {
    let file = sam_file("@HD\tVN:1.6\n@CO\tlibrary prep: v2\n");

    Command::cargo_bin("sam-header")
        .unwrap()
        .arg("-a")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| @CO "))
        .stdout(predicate::str::contains("| CO "))
        .stdout(predicate::str::contains("library prep: v2"))
        .stdout(predicate::str::contains("One-line text comment."));
}
