//! Preference nodes over damaged or unusable node files
//!
//! A node that cannot be read or written must say so; losing preferences
//! silently is the failure mode these cases guard against.

use prefs_store::{Error, FileNode, PreferenceNode};
use std::fs;
use tempfile::tempdir;

#[test]
fn open_malformed_json_node_fails_with_parse_error() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("prefs.json");
    fs::write(&file_path, "{ not json").unwrap();

    let result = FileNode::open(file_path);

    assert!(
        matches!(result, Err(Error::ConfigParse { .. })),
        "Opening a malformed node file should fail"
    );
}

#[test]
fn open_node_with_non_string_value_fails() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("prefs.toml");
    fs::write(&file_path, "includedPaths = [\"src\", \"lib\"]\n").unwrap();

    let result = FileNode::open(file_path);

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn flush_onto_directory_keeps_node_dirty() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("prefs.toml");
    let node = FileNode::open(file_path.as_path()).unwrap();
    node.put("includedPaths", "src").unwrap();
    fs::create_dir_all(file_path.join("occupied")).unwrap();

    let result = node.flush();

    assert!(result.is_err(), "Flushing over a directory should fail");
    assert!(node.is_dirty(), "A failed flush must keep the node dirty");
    assert_eq!(node.get("includedPaths", "").unwrap(), "src");
}

#[test]
fn failed_flush_can_be_retried() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("prefs.toml");
    let node = FileNode::open(file_path.as_path()).unwrap();
    node.put("includedPaths", "src").unwrap();
    fs::create_dir_all(file_path.join("occupied")).unwrap();
    assert!(node.flush().is_err());

    fs::remove_dir_all(&file_path).unwrap();
    node.flush().unwrap();

    let reopened = FileNode::open(file_path).unwrap();
    assert_eq!(reopened.get("includedPaths", "").unwrap(), "src");
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    // Root ignores permission bits, so these cases cannot fail for it
    fn permissions_enforced() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() != "0",
            Err(_) => true,
        }
    }

    #[test]
    fn open_unreadable_node_fails_with_io_error() {
        if !permissions_enforced() {
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("prefs.toml");
        fs::write(&file_path, "includedPaths = \"src\"\n").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let result = FileNode::open(file_path.as_path());

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn flush_into_readonly_settings_dir_keeps_old_file() {
        if !permissions_enforced() {
            return;
        }
        let dir = tempdir().unwrap();
        let settings = dir.path().join(".settings");
        fs::create_dir(&settings).unwrap();
        let file_path = settings.join("prefs.toml");
        fs::write(&file_path, "includedPaths = \"src\"\n").unwrap();

        let node = FileNode::open(file_path.as_path()).unwrap();
        node.put("includedPaths", "src:lib").unwrap();
        fs::set_permissions(&settings, Permissions::from_mode(0o555)).unwrap();

        let result = node.flush();

        let _ = fs::set_permissions(&settings, Permissions::from_mode(0o755));
        assert!(result.is_err(), "Flushing into a read-only directory should fail");
        assert!(node.is_dirty());
        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "includedPaths = \"src\"\n",
            "The previous node file must survive a failed flush"
        );
    }

    #[test]
    fn removing_last_key_in_readonly_settings_dir_fails() {
        if !permissions_enforced() {
            return;
        }
        let dir = tempdir().unwrap();
        let settings = dir.path().join(".settings");
        fs::create_dir(&settings).unwrap();
        let file_path = settings.join("prefs.toml");
        fs::write(&file_path, "includedPaths = \"src\"\n").unwrap();

        let node = FileNode::open(file_path.as_path()).unwrap();
        node.remove("includedPaths").unwrap();
        fs::set_permissions(&settings, Permissions::from_mode(0o555)).unwrap();

        let result = node.flush();

        let _ = fs::set_permissions(&settings, Permissions::from_mode(0o755));
        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(file_path.exists());
    }
}
