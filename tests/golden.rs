//! Golden output tests for the piped menus.

mod common;

use common::TestEnv;

/// Menu lines only - header paths are temp-dir dependent and excluded.
fn menu_lines(stdout: &str) -> String {
    stdout
        .lines()
        .filter(|line| line.starts_with('['))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn lifecycle_menu_is_stable() {
    let env = TestEnv::new();
    let result = env.run_with_stdin(&[], "3\n");
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);

    insta::assert_snapshot!(menu_lines(&result.stdout), @r"
    [STACK] Deckhand
    [1] Build images and start the stack
    [2] Start the stack
    [3] Stop the stack
    [4] Follow service logs
    [5] Restart services
    [6] Remove containers and volumes
    [OK] stop complete
    ");
}

#[test]
fn build_menu_is_stable() {
    let env = TestEnv::new();
    let result = env.run_with_stdin(&["build"], "3\n");
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);

    insta::assert_snapshot!(menu_lines(&result.stdout), @r"
    [BUILD] Deckhand Build
    [1] Build images (layer cache)
    [2] Rebuild from scratch (no cache)
    [3] Quit
    ");
}
