use std::fs;

use registry_version::scan::{scan_templates, ScanOptions};
use tempfile::TempDir;

#[test]
fn test_scan_lists_subdirectories_sorted() {
    let dir = TempDir::new().unwrap();
    for name in ["jellyfin-server", "homepage", "adguard"] {
        fs::create_dir(dir.path().join(name)).unwrap();
    }

    let ids = scan_templates(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(ids, vec!["adguard", "homepage", "jellyfin-server"]);
}

#[test]
fn test_scan_skips_files_and_hidden_dirs() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("homepage")).unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("README.md"), "# templates").unwrap();

    let ids = scan_templates(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(ids, vec!["homepage"]);
}

#[test]
fn test_scan_normalizes_names() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Home Assistant")).unwrap();
    fs::create_dir(dir.path().join("Vault.Warden")).unwrap();

    let ids = scan_templates(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(ids, vec!["home-assistant", "vault-warden"]);
}

#[test]
fn test_scan_keeps_normalization_collisions() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("my app")).unwrap();
    fs::create_dir(dir.path().join("my_app")).unwrap();

    let ids = scan_templates(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(ids, vec!["my-app", "my-app"]);
}

#[test]
fn test_scan_required_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("complete")).unwrap();
    fs::write(dir.path().join("complete").join("docker-compose.yml"), "services: {}").unwrap();
    fs::create_dir(dir.path().join("draft")).unwrap();

    let options = ScanOptions {
        required_file: Some("docker-compose.yml".to_string()),
    };
    let ids = scan_templates(dir.path(), &options).unwrap();
    assert_eq!(ids, vec!["complete"]);
}
