mod common;

use common::{run_tripfinder, TestEnv};

#[test]
fn tripfinder_help_shows_usage() {
    let output = run_tripfinder(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("find"));
    assert!(stdout.contains("tui"));
}

#[test]
fn tripfinder_version_shows_version() {
    let output = run_tripfinder(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("tripfinder "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_tripfinder(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("tripfinder"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_path_points_at_toml_file() {
    let output = run_tripfinder(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn config_show_works() {
    let output = run_tripfinder(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("[form]"));
}

#[test]
fn config_show_masks_api_key() {
    let env = TestEnv::new();
    env.write_config("[llm]\napi_key = \"super-secret\"\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("super-secret"));
    assert!(stdout.contains("********"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(first.status.success());
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(!second.status.success());
    assert!(stderr.contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn prompt_embeds_parameters_and_location() {
    let output = run_tripfinder(&[
        "prompt", "--lat", "51.9", "--lon", "4.4", "-d", "1100", "-t", "10", "-b", "2", "-s",
        "85", "-n", "no wind",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "prompt should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Distance from Rotterdam: 1100 km"));
    assert!(stdout.contains("85% chance minimum"));
    assert!(stdout.contains("\"no wind\""));
    assert!(stdout.contains("latitude 51.9, longitude 4.4"));
}

#[test]
fn prompt_uses_form_defaults_from_config() {
    let env = TestEnv::new();
    env.write_config("[form]\nterrain = 3\nadditional_input = \"coffee stops\"\n");

    let output = env.run(&["prompt", "--lat", "0", "--lon", "0"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("(0=Flat, 10=Mountains): 3"));
    assert!(stdout.contains("\"coffee stops\""));
}

#[test]
fn prompt_rejects_out_of_range_slider() {
    let output = run_tripfinder(&["prompt", "--lat", "0", "--lon", "0", "-t", "11"]);
    assert!(!output.status.success());
}

#[test]
fn render_classifies_markdown_lines() {
    let env = TestEnv::new();
    let answer = env.write_file("answer.md", "# Girona\n- Climb A\nGreat roads");

    let output = env.run(&["render", answer.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("GIRONA"));
    assert!(stdout.contains("• Climb A"));
    assert!(stdout.contains("Great roads"));
}

#[test]
fn render_json_lists_blocks_in_order() {
    let env = TestEnv::new();
    let answer = env.write_file("answer.md", "## Routes\n\n### Els Àngels");

    let output = env.run(&["render", "--json", answer.to_str().unwrap()]);
    let blocks: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("render --json prints JSON");

    assert_eq!(blocks.as_array().map(Vec::len), Some(3));
    assert_eq!(blocks[0]["kind"], "heading2");
    assert_eq!(blocks[1]["kind"], "paragraph");
    assert_eq!(blocks[1]["text"], "");
    assert_eq!(blocks[2]["text"], "Els Àngels");
}

#[test]
fn find_without_api_key_reports_grid_offline() {
    let output = run_tripfinder(&["find", "--lat", "1", "--lon", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("The grid is offline! (API Error)"),
        "expected the fixed failure message\nstderr:\n{}",
        stderr
    );
}

#[test]
fn find_network_failure_keeps_api_key_out_of_stderr() {
    let env = TestEnv::new();
    env.write_config(
        "[llm]\n\
         api_key = \"cli-secret-777\"\n\
         endpoint = \"http://127.0.0.1:9/v1beta\"\n\
         timeout_secs = 5\n",
    );

    let output = env.run(&["find", "--lat", "1", "--lon", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("The grid is offline! (API Error)"));
    assert!(
        !stderr.contains("cli-secret-777"),
        "api key must not reach stderr\nstderr:\n{}",
        stderr
    );
}

#[test]
fn malformed_config_only_breaks_commands_that_read_it() {
    let env = TestEnv::new();
    env.write_config("[llm\nthis is not toml");
    let answer = env.write_file("answer.md", "# Girona");

    let render = env.run(&["render", answer.to_str().unwrap()]);
    assert!(
        render.status.success(),
        "render should ignore the config file\nstderr:\n{}",
        String::from_utf8_lossy(&render.stderr)
    );
    assert!(String::from_utf8_lossy(&render.stdout).contains("GIRONA"));

    let path = env.run(&["config", "path"]);
    assert!(path.status.success());

    let show = env.run(&["config", "show"]);
    assert!(!show.status.success());
}
