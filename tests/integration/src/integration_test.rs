//! End-to-end scenarios across prefs-store and prefs-core
//!
//! Each test walks through what a host does over a project's lifetime:
//! open the node, flip resources on and off, save when changed, and
//! reopen later.

use std::rc::Rc;

use prefs_core::{
    EnablementPreferences, KEY_INCLUDED, ProjectPreferences, ProjectResource, ProjectScope,
    ScopeSettings, resource_path_of,
};
use prefs_store::{FileNode, MemoryNode, PreferenceNode};
use prefs_test_utils::TestProject;
use prefs_test_utils::project::DEFAULT_NODE_FILE;
use pretty_assertions::assert_eq;

fn scope(project: &TestProject) -> ProjectScope {
    ProjectScope::new(project.root(), ScopeSettings::default())
}

#[test]
fn toggle_resources_across_sessions() {
    let project = TestProject::new();
    let app = project.add_file("src/app.js");
    let spec = project.add_file("test/app_spec.js");

    // First session: enable both files by their on-disk location
    {
        let mut prefs = ProjectPreferences::open(scope(&project)).unwrap();
        for file in [&app, &spec] {
            let path = resource_path_of(&ProjectResource::new(project.root(), file.as_path()));
            prefs.enablement_mut().set_included(&path, true).unwrap();
        }
        assert!(prefs.save().unwrap());
    }
    project.assert_file_exists(DEFAULT_NODE_FILE);

    // Second session: disable one, the other stays
    {
        let mut prefs = ProjectPreferences::open(scope(&project)).unwrap();
        assert_eq!(
            prefs.enablement().included_paths().unwrap(),
            vec!["src/app.js", "test/app_spec.js"]
        );
        prefs.enablement_mut().set_included("test/app_spec.js", false).unwrap();
        assert!(prefs.save().unwrap());
    }

    // Third session: disable the last one; the node file goes away
    {
        let mut prefs = ProjectPreferences::open(scope(&project)).unwrap();
        assert!(prefs.enablement().is_included("src/app.js").unwrap());
        assert!(!prefs.enablement().is_included("test/app_spec.js").unwrap());
        prefs.enablement_mut().set_included("src/app.js", false).unwrap();
        prefs.save().unwrap();
    }
    project.assert_file_not_exists(DEFAULT_NODE_FILE);
}

#[test]
fn two_facades_share_one_node() {
    let node = Rc::new(MemoryNode::new("shared"));
    let mut writer = EnablementPreferences::new(Rc::clone(&node));
    let reader = EnablementPreferences::new(Rc::clone(&node));

    writer.set_included("/foo", true).unwrap();

    assert!(reader.is_included("/foo").unwrap());
    assert!(writer.has_changed());
    assert!(!reader.has_changed());
}

#[test]
fn set_then_unset_returns_node_to_baseline() {
    let project = TestProject::new();
    let node = FileNode::open(project.path(DEFAULT_NODE_FILE)).unwrap();
    let mut prefs = EnablementPreferences::new(&node);

    prefs.set_included("/foo", true).unwrap();
    prefs.clear_changed();
    prefs.set_included("/foo", false).unwrap();

    assert!(prefs.has_changed());
    assert!(node.keys().unwrap().is_empty());
    node.flush().unwrap();
    project.assert_file_not_exists(DEFAULT_NODE_FILE);
}

#[test]
fn paths_with_separator_survive_disk_round_trip() {
    let project = TestProject::new();
    let mut prefs = ProjectPreferences::open(scope(&project)).unwrap();

    prefs
        .enablement_mut()
        .set_included_paths(&["web/a:b.js", "c\\d.js"])
        .unwrap();
    prefs.save().unwrap();

    let reopened = ProjectPreferences::open(scope(&project)).unwrap();
    assert_eq!(
        reopened.enablement().included_paths().unwrap(),
        vec!["web/a:b.js", "c\\d.js"]
    );
    assert_eq!(
        reopened.enablement().node().get(KEY_INCLUDED, "").unwrap(),
        "web/a\\:b.js:c\\\\d.js"
    );
}
