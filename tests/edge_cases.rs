//! Edge case and error handling tests for dirtree


use dirtree::{
    CancelToken, LineKind, LineSink, RenderEvent, RenderWorker, TraversalConfig, TraversalResult,
    TreeLine, TreeRenderer,
};
use harness::{TestTree, run_dirtree, tree_body};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn lines(config: TraversalConfig) -> Vec<String> {
    TreeRenderer::new(config)
        .render()
        .unwrap()
        .lines
        .iter()
        .skip(1)
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

/// Makes a directory unreadable. Returns false when the current user can
/// read it anyway (e.g. running as root), in which case the test is moot.
fn lock(path: &std::path::Path) -> bool {
    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
    fs::read_dir(path).is_err()
}

fn unlock(path: &std::path::Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_unreadable_directory_is_contained() {
    let tree = TestTree::new();
    tree.add_file("a_locked/secret.txt", "");
    tree.add_file("b_open/visible.txt", "");
    let locked = tree.path().join("a_locked");
    if !lock(&locked) {
        unlock(&locked);
        return;
    }

    let rendered = TreeRenderer::new(TraversalConfig::new(tree.path()))
        .render()
        .unwrap();
    unlock(&locked);

    let text: Vec<String> = rendered.lines.iter().skip(1).map(ToString::to_string).collect();
    assert_eq!(
        text,
        vec![
            "├── a_locked",
            "│   └── [Error: Permission Denied for a_locked]",
            "└── b_open",
            "    └── visible.txt",
        ]
    );
    assert_eq!(
        rendered.result(),
        TraversalResult {
            directories: 2,
            files: 1
        }
    );
    let errors = rendered.lines.iter().filter(|l| l.kind == LineKind::Error).count();
    assert_eq!(errors, 1);
}

#[test]
fn test_unreadable_directory_cli_succeeds() {
    let tree = TestTree::new();
    tree.add_file("locked/secret.txt", "");
    let locked = tree.path().join("locked");
    if !lock(&locked) {
        unlock(&locked);
        return;
    }

    let (stdout, _stderr, success) = run_dirtree(tree.path(), &[]);
    unlock(&locked);

    assert!(success, "unreadable subdirectory must not fail the run");
    assert!(stdout.contains("[Error: Permission Denied for locked]"), "{}", stdout);
    assert!(stdout.contains("1 directory, 0 files"), "{}", stdout);
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_is_followed() {
    let tree = TestTree::new();
    tree.add_file("real/file.rs", "");
    symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

    assert_eq!(
        lines(TraversalConfig::new(tree.path())),
        vec!["├── link", "│   └── file.rs", "└── real", "    └── file.rs"]
    );
}

#[test]
fn test_symlink_to_file_counts_as_file() {
    let tree = TestTree::new();
    tree.add_file("target.rs", "");
    symlink(tree.path().join("target.rs"), tree.path().join("alias.rs")).unwrap();

    let rendered = TreeRenderer::new(TraversalConfig::new(tree.path()))
        .render()
        .unwrap();
    assert_eq!(rendered.result().files, 2);
}

#[test]
fn test_broken_symlink_is_a_file() {
    let tree = TestTree::new();
    symlink("nonexistent", tree.path().join("dangling")).unwrap();

    let config = TraversalConfig::new(tree.path());
    assert_eq!(lines(config.clone()), vec!["└── dangling"]);
    assert!(lines(config.with_dirs_only(true)).is_empty());
}

#[test]
fn test_symlink_loop_terminates() {
    let tree = TestTree::new();
    tree.add_dir("sub");
    symlink("..", tree.path().join("sub").join("up")).unwrap();

    let rendered = TreeRenderer::new(TraversalConfig::new(tree.path()).with_max_depth(Some(6)))
        .render()
        .unwrap();
    // sub, sub/up, sub/up/sub, ... alternating until the depth limit
    assert_eq!(rendered.result().directories, 6);
}

// ============================================================================
// Naming Edge Cases
// ============================================================================

#[test]
fn test_unicode_names_sorted_by_bytes() {
    let tree = TestTree::new();
    tree.add_file("zeta.txt", "");
    tree.add_file("Éclair.txt", "");
    tree.add_file("apple.txt", "");

    assert_eq!(
        lines(TraversalConfig::new(tree.path())),
        vec!["├── apple.txt", "├── zeta.txt", "└── Éclair.txt"]
    );
}

#[test]
fn test_names_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("my dir/my file.txt", "");
    assert_eq!(
        lines(TraversalConfig::new(tree.path())),
        vec!["└── my dir", "    └── my file.txt"]
    );
}

#[test]
fn test_hidden_only_directory_renders_empty() {
    let tree = TestTree::new();
    tree.add_file("cfg/.env", "");
    tree.add_file("cfg/.hidden/x", "");

    let rendered = TreeRenderer::new(TraversalConfig::new(tree.path()))
        .render()
        .unwrap();
    assert_eq!(rendered.lines.len(), 2);
    assert_eq!(
        rendered.result(),
        TraversalResult {
            directories: 1,
            files: 0
        }
    );
}

#[test]
fn test_empty_root() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_dirtree(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree_body(&stdout), vec!["", "0 directories, 0 files"]);
}

#[test]
fn test_ignored_name_at_depth() {
    let tree = TestTree::new();
    tree.add_file("a/node_modules/pkg/index.js", "");
    tree.add_file("a/b/node_modules/x.js", "");
    tree.add_file("a/b/keep.js", "");

    let config = TraversalConfig::new(tree.path()).with_ignore_names(["node_modules"]);
    let rendered = TreeRenderer::new(config).render().unwrap();
    assert!(rendered.lines.iter().all(|l| l.text != "node_modules"));
    assert_eq!(
        rendered.result(),
        TraversalResult {
            directories: 2,
            files: 1
        }
    );
}

// ============================================================================
// Cancellation
// ============================================================================

struct StopAfter {
    token: CancelToken,
    limit: usize,
    seen: usize,
}

impl LineSink for StopAfter {
    fn line(&mut self, _line: TreeLine) -> std::io::Result<()> {
        self.seen += 1;
        if self.seen == self.limit {
            self.token.cancel();
        }
        Ok(())
    }
}

#[test]
fn test_cancel_on_real_tree() {
    let tree = TestTree::new();
    tree.populate(3, 3, 2);

    let token = CancelToken::new();
    let renderer = TreeRenderer::new(TraversalConfig::new(tree.path())).with_cancel_token(token.clone());
    let mut sink = StopAfter {
        token,
        limit: 10,
        seen: 0,
    };

    let completion = renderer.render_to(&mut sink).unwrap();
    assert!(completion.is_cancelled());
    assert_eq!(sink.seen, 10);
}

#[test]
fn test_worker_cancel_mid_render() {
    let tree = TestTree::new();
    tree.populate(4, 4, 3);
    let full = TreeRenderer::new(TraversalConfig::new(tree.path()))
        .render()
        .unwrap();

    let worker = RenderWorker::spawn(TraversalConfig::new(tree.path())).unwrap();
    let mut received = 0;
    let mut completion = None;
    for event in worker.events() {
        match event {
            RenderEvent::Line(_) => {
                received += 1;
                if received == 5 {
                    worker.cancel();
                }
            }
            RenderEvent::Finished(c) => completion = Some(c),
            RenderEvent::Failed(e) => panic!("unexpected failure: {}", e),
        }
    }
    worker.join();

    let completion = completion.expect("worker always reports completion");
    assert!(completion.is_cancelled());
    assert!(received < full.lines.len());
}
