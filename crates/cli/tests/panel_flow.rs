use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const CATALOG_JSON: &str = r#"{
  "Crafting": [
    { "name": "Forgeborn", "origin": "Smithing", "cost": 100, "description": "Hammer and anvil." },
    { "name": "Tinker", "origin": "Gadgets", "cost": 50, "description": "Small machines." }
  ],
  "Magic": [
    { "name": "Archmage", "origin": "Wizardry", "cost": 600, "description": "Everything." }
  ]
}"#;

fn setup() -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("perks.json"), CATALOG_JSON).unwrap();
    temp
}

#[allow(deprecated)]
fn forge(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("forge").expect("binary");
    cmd.current_dir(root)
        .env_remove("FORGE_PERKS_PATH")
        .env("FORGE_DATA_DIR", root.join("data"))
        .env("RUST_LOG", "warn");
    cmd
}

fn saved_session(root: &Path) -> Value {
    let raw = fs::read_to_string(root.join("data").join("celestial-forge-data.json"))
        .expect("session file");
    serde_json::from_str(&raw).expect("valid json")
}

#[test]
fn fresh_status_is_zero() {
    let temp = setup();
    forge(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout("Current CP: 0\nTotal Earned: 0\nSpent: 0\n");
}

#[test]
fn earn_buy_and_persist() {
    let temp = setup();
    let root = temp.path();

    forge(root)
        .args(["add-cp", "200"])
        .assert()
        .success()
        .stdout("CP updated from 0 to 200 (total: 200)\n");

    forge(root)
        .args(["select", "Crafting", "Forgeborn"])
        .assert()
        .success()
        .stdout("Added perk \"Forgeborn\" for 100 CP. Remaining CP: 100\n");

    let session = saved_session(root);
    assert_eq!(session["currentCP"], 100);
    assert_eq!(session["totalCP"], 200);
    assert_eq!(session["currentSheet"][0]["name"], "Forgeborn");

    forge(root)
        .arg("status")
        .assert()
        .success()
        .stdout("Current CP: 100\nTotal Earned: 200\nSpent: 100\n");

    forge(root)
        .arg("sheet")
        .assert()
        .success()
        .stdout("1. Forgeborn (Smithing) [100 CP]\n    Hammer and anvil.\n");

    forge(root)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<div align=\"center\"> <b>THE CELESTIAL FORGE</b> </div>\n<hr>\n[Forgeborn] - Smithing - 100 CP\n",
        ))
        .stdout(predicate::str::contains("Current CP: 100\nTotal Perks: 1\n<hr>\n"));
}

#[test]
fn failed_purchase_leaves_session_untouched() {
    let temp = setup();
    let root = temp.path();
    forge(root).args(["add-cp", "50"]).assert().success();

    forge(root)
        .args(["select", "Magic", "Archmage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Insufficient CP! Need 600 CP but only have 50 CP.",
        ));
    forge(root)
        .args(["select", "Nowhere", "Archmage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Domain not found: Nowhere"));

    let session = saved_session(root);
    assert_eq!(session["currentCP"], 50);
    assert_eq!(session["currentSheet"], serde_json::json!([]));
}

#[test]
fn remove_by_name_and_index_refunds() {
    let temp = setup();
    let root = temp.path();
    forge(root).args(["add-cp", "300"]).assert().success();
    forge(root)
        .args(["select", "Crafting", "Forgeborn"])
        .assert()
        .success();
    forge(root)
        .args(["select", "Crafting", "Tinker"])
        .assert()
        .success();

    forge(root)
        .args(["remove", "--index", "2"])
        .assert()
        .success()
        .stdout("Removed \"Tinker\" and refunded 50 CP. Current CP: 200\n");
    forge(root)
        .args(["remove", "--index", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sheet entry #5"));
    forge(root)
        .args(["remove", "Forgeborn"])
        .assert()
        .success()
        .stdout("Removed \"Forgeborn\" and refunded 100 CP. Current CP: 300\n");
    forge(root)
        .args(["remove", "Forgeborn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Perk not found: Forgeborn"));

    let session = saved_session(root);
    assert_eq!(session["currentCP"], 300);
    assert_eq!(session["totalCP"], 300);
}

#[test]
fn clear_and_reset() {
    let temp = setup();
    let root = temp.path();
    forge(root).args(["add-cp", "150"]).assert().success();
    forge(root)
        .args(["select", "Crafting", "Tinker"])
        .assert()
        .success();

    forge(root)
        .arg("clear")
        .assert()
        .success()
        .stdout("Sheet cleared. Refunded 50 CP. Current CP: 150\n");
    forge(root)
        .arg("sheet")
        .assert()
        .success()
        .stdout("No perks selected yet\n");

    forge(root)
        .args(["set-cp", "-5"])
        .assert()
        .success()
        .stdout("CP manually set from 150 to 0\n");
    forge(root)
        .arg("reset-cp")
        .assert()
        .success()
        .stdout("Current CP: 0\nTotal Earned: 0\nSpent: 0\n");
}

#[test]
fn add_cp_rejects_zero() {
    let temp = setup();
    forge(temp.path()).args(["add-cp", "0"]).assert().failure();
}

#[test]
fn offers_show_counts() {
    let temp = setup();
    let root = temp.path();
    forge(root).args(["add-cp", "60"]).assert().success();

    forge(root)
        .arg("domains")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crafting (2 total, 1 affordable)"))
        .stdout(predicate::str::contains("Magic (1 total, 0 affordable)"));

    forge(root)
        .args(["perks", "Crafting"])
        .assert()
        .success()
        .stdout("Tinker (Gadgets) [50 CP]\n    Small machines....\n");

    forge(root)
        .args(["perks", "Magic"])
        .assert()
        .success()
        .stdout("No affordable perks in this domain\n");
}

#[test]
fn missing_catalog_offers_nothing() {
    let temp = tempdir().unwrap();
    forge(temp.path())
        .args(["--quiet", "domains"])
        .assert()
        .success()
        .stdout("No domains available. The perk catalog is empty.\n");
}

#[test]
fn explicit_perks_path_is_used() {
    let temp = setup();
    let elsewhere = tempdir().unwrap();
    forge(elsewhere.path())
        .arg("--perks")
        .arg(temp.path().join("perks.json"))
        .args(["domains", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total"));
}
