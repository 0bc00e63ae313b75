use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn annotate_text_output() {
    Command::cargo_bin("assembly-annotator")
        .unwrap()
        .args(["annotate", "P12345_2,RF00177_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: heteromeric"))
        .stdout(predicate::str::contains("protein"))
        .stdout(predicate::str::contains("Ribosome: none found"));
}

#[test]
fn annotate_json_output() {
    Command::cargo_bin("assembly-annotator")
        .unwrap()
        .args(["annotate", "P12345_1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assembly_type\": \"monomeric\""))
        .stdout(predicate::str::contains("\"component_count\": 1"));
}

#[test]
fn annotate_with_reference_tables() {
    let dir = tempfile::tempdir().unwrap();
    let symmetry = write_csv(&dir, "symmetry.csv", "id,symmetry\nP12345_2,C2\n");
    let species = write_csv(&dir, "species.csv", "accession,species\nP12345,Homo sapiens\n");
    let methods = write_csv(&dir, "methods.csv", "id,method\nP12345,x-ray\n");

    Command::cargo_bin("assembly-annotator")
        .unwrap()
        .args(["annotate", "P12345_2"])
        .arg("--symmetry")
        .arg(&symmetry)
        .arg("--species")
        .arg(&species)
        .arg("--methods")
        .arg(&methods)
        .assert()
        .success()
        .stdout(predicate::str::contains("C2"))
        .stdout(predicate::str::contains("Homo sapiens"))
        .stdout(predicate::str::contains("X-ray"));
}

#[test]
fn annotate_complete_ribosome() {
    Command::cargo_bin("assembly-annotator")
        .unwrap()
        .args(["annotate", "RF00177_1,RF02541_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bacterial complete ribosome"));
}

#[test]
fn missing_table_file_fails() {
    Command::cargo_bin("assembly-annotator")
        .unwrap()
        .args(["annotate", "P12345_1", "--symmetry", "/nonexistent/t.csv"])
        .assert()
        .failure();
}
