//! Edge case and error handling tests for gentree


use harness::{TestTree, run_gentree, tree_lines};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_rendered_with_target() {
    let tree = TestTree::new();
    tree.add_file("project/main.rs", "");
    tree.add_file("outside/secret.txt", "");
    tree.add_symlink("project/link", "../outside");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["project"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["├── link@ -> ../outside", "└── main.rs"]
    );
    assert!(!stdout.contains("secret.txt"), "must not recurse into link");
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let tree = TestTree::new();
    tree.add_file("real.rs", "");
    tree.add_symlink("broken_link.rs", "nonexistent.rs");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &[]);
    assert!(success, "gentree should handle broken symlinks");
    assert_eq!(
        tree_lines(&stdout),
        vec!["├── broken_link.rs@ -> nonexistent.rs", "└── real.rs"]
    );
}

#[test]
#[cfg(unix)]
fn test_self_referential_symlink() {
    let tree = TestTree::new();
    tree.add_file("file.rs", "");
    tree.add_symlink("selfref", "selfref");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["--follow"]);
    assert!(success, "gentree should handle self-referential symlinks");
    assert_eq!(
        tree_lines(&stdout),
        vec!["├── file.rs", "└── selfref@ -> selfref"]
    );
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.rs", "");
    tree.add_symlink("subdir/parent", "..");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["--follow"]);
    assert!(success, "gentree should not hang on parent symlink");
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "└── subdir/",
            "    ├── file.rs",
            "    └── parent@ -> ..",
            "        └── parent/ (symlink loop)",
        ]
    );
    assert_eq!(stdout.matches("(symlink loop)").count(), 1);
}

#[test]
#[cfg(unix)]
fn test_followed_symlinked_node_modules_is_excluded() {
    let tree = TestTree::new();
    tree.add_file("app/main.js", "");
    tree.add_file("shared/node_modules/left-pad/index.js", "");
    tree.add_symlink("app/node_modules", "../shared/node_modules");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["app", "--follow"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└── main.js"]);
    assert!(!stdout.contains("left-pad"), "{}", stdout);
}

#[test]
#[cfg(unix)]
fn test_symlinked_root_keeps_its_own_name() {
    let tree = TestTree::new();
    tree.add_file("real_project/a.txt", "");
    tree.add_symlink("myproj", "real_project");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["myproj"]);
    assert!(success);
    assert_eq!(stdout, "myproj/\n└── a.txt\n");
}

#[test]
fn test_dot_root_uses_directory_name() {
    let tree = TestTree::new();
    let project = tree.add_dir("project");
    tree.add_file("project/a.txt", "");

    let (stdout, _stderr, success) = run_gentree(&project, &["."]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── a.txt\n");
}

#[test]
#[cfg(unix)]
fn test_excluded_symlink_is_hidden() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    tree.add_symlink("app.log", "real.txt");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└── real.txt"]);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("aaa/file.rs", "");
    tree.add_file("locked/hidden.rs", "");
    tree.add_file("zzz/after.rs", "");

    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");
    let bypassed = fs::read_dir(&locked).is_ok();

    let (stdout, _stderr, success) = run_gentree(tree.path(), &[]);

    // Restore permissions for cleanup
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(success, "gentree should handle unreadable directories");
    if bypassed {
        // Running with privileges that ignore permission bits
        return;
    }
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├── aaa/",
            "│   └── file.rs",
            "├── locked/",
            "│   └── Permission Denied",
            "└── zzz/",
            "    └── after.rs",
        ]
    );
    assert!(!stdout.contains("hidden.rs"));
}

// ============================================================================
// Fatal Errors
// ============================================================================

#[test]
fn test_nonexistent_root() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_gentree(tree.path(), &["does-not-exist"]);
    assert!(!success, "missing root should fail");
    assert!(stdout.is_empty(), "no tree should be printed: {}", stdout);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "");

    let (stdout, stderr, success) = run_gentree(tree.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_output_file_cannot_be_opened() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (stdout, stderr, success) =
        run_gentree(tree.path(), &["-o", "missing-dir/tree.txt"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("cannot open output file"), "stderr: {}", stderr);
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("file with spaces.rs", "");
    tree.add_file("dir with spaces/nested.rs", "");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &[]);
    assert!(success, "gentree should handle spaces in filenames");
    assert!(stdout.contains("├── dir with spaces/"));
    assert!(stdout.contains("└── file with spaces.rs"));
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.rs", "");
    tree.add_file("émoji_🎉.rs", "");
    tree.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &[]);
    assert!(success, "gentree should handle unicode filenames");
    assert!(stdout.contains("日本語.rs"));
    assert!(stdout.contains("émoji_🎉.rs"));
    assert!(stdout.contains("中文目录/"));
    assert!(stdout.contains("文件.rs"));
}

#[test]
fn test_empty_root() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_gentree(tree.path(), &["empty"]);
    assert!(success);
    assert_eq!(stdout, "empty/\n");
}
