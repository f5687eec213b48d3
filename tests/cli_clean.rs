//! `vanillafy clean` end to end, with answers piped on stdin.

mod common;

use common::fixtures::protected_config;
use common::TestEnv;

fn game_arg(env: &TestEnv) -> String {
    env.game_dir().display().to_string()
}

#[test]
fn test_clean_removes_extras_after_confirmation() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");
    env.write_game_file("readme.txt");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path], "y\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Extra files detected:"));
    assert!(result.stdout.contains("mod1.dll"));
    assert!(result
        .stdout
        .contains("Do you want to delete these extra files? (y/n): "));
    assert!(result.stdout.contains("Deleted: mod1.dll"));
    assert!(result.stdout.contains("Deleted: readme.txt"));
    assert!(result
        .stdout
        .contains("Directory only contains whitelisted entries."));
    assert!(result.stdout.contains("Cleanup complete: 2 deleted."));

    assert!(!env.game_path("mod1.dll").exists());
    assert!(!env.game_path("readme.txt").exists());
    assert!(env.game_path("game.exe").exists());
    assert!(env.game_path("Data").is_dir());
}

#[test]
fn test_clean_declined_keeps_everything() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path], "n\nn\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Extra files were not removed."));
    // The enforcement pass lists the leftover again and asks once more.
    assert!(result
        .stdout
        .contains("Non-whitelisted files and folders detected:"));
    assert!(result
        .stdout
        .contains("Non-whitelisted items were not removed."));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_reprompts_on_unrecognized_answer() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path], "maybe\nyes\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("Invalid response. Please enter 'y' or 'n'."));
    assert!(!env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_removes_extra_directories_recursively() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("ENB/shaders/effect.fx");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path, "--yes"], "");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(!env.game_path("ENB").exists());
    assert!(env.game_path("Data").is_dir());
}

#[test]
fn test_clean_reports_missing_entries_with_hint() {
    let env = TestEnv::new();

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path, "--yes"], "");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Missing files detected:"));
    assert!(result.stdout.contains("Data"));
    assert!(result
        .stdout
        .contains("Reinstall TestGame to restore missing files."));
    assert!(result.stdout.contains("No extra files found."));
}

#[test]
fn test_clean_dry_run_deletes_nothing() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path, "--dry-run"], "");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("vanillafy clean (dry run)"));
    assert!(result.stdout.contains("Would remove 1 entries (dry run)."));
    assert!(result.stdout.contains("Dry run: nothing was deleted."));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_path_without_sentinel_fails() {
    let env = TestEnv::new();
    std::fs::remove_file(env.game_path("game.exe")).unwrap();
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path, "--yes"], "");

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("No TestGame installation found"));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_volume_scan_finds_nested_install() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");
    std::fs::create_dir_all(env.library().join("Other/Empty")).unwrap();

    let volume = env.library().display().to_string();
    let result = env.run(&["clean", "--volume", &volume, "--yes"], "");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("TestGame installation found"));
    assert!(!env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_volume_scan_without_install_fails() {
    let env = TestEnv::new();
    let empty = env.root().join("empty-volume");
    std::fs::create_dir_all(&empty).unwrap();

    let volume = empty.display().to_string();
    let result = env.run(&["clean", "--volume", &volume, "--yes"], "");

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result
        .stderr
        .contains("no installation containing game.exe was found"));
}

#[test]
fn test_clean_missing_volume_fails() {
    let env = TestEnv::new();
    let missing = env.root().join("not-mounted");

    let volume = missing.display().to_string();
    let result = env.run(&["clean", "--volume", &volume, "--yes"], "");

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("does not exist"));
}

#[test]
fn test_clean_protected_zone_declined_exits_cleanly() {
    let env = TestEnv::new();
    env.write_config(&protected_config(&env.library()));
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path], "n\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("is installed in a protected folder"));
    assert!(result.stdout.contains(
        "Do you want to proceed with cleaning the directory despite the risks? (y/n): "
    ));
    assert!(result
        .stdout
        .contains("Cleanup cancelled. Nothing was changed."));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_relative_path_inside_protected_zone_is_guarded() {
    let env = TestEnv::new();
    // The child's working directory is reported with symlinks resolved.
    let zone = env.library().canonicalize().unwrap();
    env.write_config(&protected_config(&zone));
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    // The binary runs from the temp root, so this is relative to it.
    let result = env.run(&["clean", "--path", "library/TestGame"], "n\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("is installed in a protected folder"));
    assert!(result
        .stdout
        .contains("Cleanup cancelled. Nothing was changed."));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_protected_zone_accepted_with_guidance() {
    let env = TestEnv::new();
    env.write_config(&protected_config(&env.library()));
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path], "y\ny\ny\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("D:\\Games\\TestGame"));
    assert!(result.stdout.contains("Deleted: mod1.dll"));
    assert!(!env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_menu_option_three_reads_path() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let input = format!("3\n\"{}\"\ny\n", game_arg(&env));
    let result = env.run(&["clean"], &input);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Choose an option:"));
    assert!(result.stdout.contains("Enter the full path to TestGame: "));
    assert!(!env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_menu_option_two_reads_volume() {
    let env = TestEnv::new();
    env.create_game_dir("Data");

    let input = format!("2\n{}\n", env.library().display());
    let result = env.run(&["clean"], &input);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Enter the drive letter (e.g., C): "));
    assert!(result.stdout.contains("All base game files are present."));
}

#[test]
fn test_clean_invalid_menu_choice_exits_two() {
    let env = TestEnv::new();
    env.write_game_file("mod1.dll");

    let result = env.run(&["clean"], "9\n");

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("invalid choice '9'"));
    assert!(env.game_path("mod1.dll").exists());
}

#[test]
fn test_clean_json_emits_event_stream() {
    let env = TestEnv::new();
    env.create_game_dir("Data");
    env.write_game_file("mod1.dll");

    let path = game_arg(&env);
    let result = env.run(&["--json", "clean", "--path", &path, "--yes"], "");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert_eq!(
        result.event_names(),
        vec![
            "start",
            "located",
            "reconciled",
            "removal_proposed",
            "item_deleted",
            "clean",
            "complete"
        ]
    );

    let events = result.events();
    assert_eq!(events[2]["extra"], serde_json::json!(["mod1.dll"]));
    assert_eq!(events[6]["status"], "success");
    assert_eq!(events[6]["deleted"], 1);
}

#[test]
fn test_clean_json_abort_is_reported_as_event() {
    let env = TestEnv::new();
    let missing = env.root().join("nowhere");

    let path = missing.display().to_string();
    let result = env.run(&["--json", "clean", "--path", &path, "--yes"], "");

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    let events = result.events();
    let last = events.last().expect("at least one event");
    assert_eq!(last["event"], "aborted");
    assert_eq!(last["reason"], "not_found");
}

#[test]
fn test_clean_pause_waits_for_enter() {
    let env = TestEnv::new();
    env.create_game_dir("Data");

    let path = game_arg(&env);
    let result = env.run(&["clean", "--path", &path, "--yes", "--pause"], "\n");

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Press Enter to exit..."));
}
