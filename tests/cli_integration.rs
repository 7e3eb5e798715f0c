//! CLI integration tests: run the built `lgraph` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

use listgraph::cli::commands::{build_graph, parse_connection};
use listgraph::types::GraphError;

// ==================== CLI Helpers ====================

/// Locate the `lgraph` binary built alongside test binaries.
fn lgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("lgraph");
    path
}

/// Run the `lgraph` CLI with the Swedish rail network plus `args`.
fn run_lgraph(args: &[&str]) -> Output {
    Command::new(lgraph_bin())
        .args([
            "--edge",
            "Kiruna,Stockholm,Tåg,800",
            "--edge",
            "Stockholm,Göteborg,Tåg,400",
            "--node",
            "Visby",
        ])
        .args(args)
        .output()
        .expect("Failed to run lgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "lgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== Argument Parsing ====================

#[test]
fn test_parse_connection() {
    let conn = parse_connection("Kiruna, Stockholm ,Tåg,800.5").unwrap();
    assert_eq!(conn.from, "Kiruna");
    assert_eq!(conn.to, "Stockholm");
    assert_eq!(conn.label, "Tåg");
    assert!((conn.weight - 800.5).abs() < f64::EPSILON);
}

#[test]
fn test_parse_connection_rejects_malformed() {
    for bad in ["Kiruna,Stockholm,Tåg", "a,b,c,d,e", ",b,c,1", "a,b,c,heavy"] {
        assert!(
            matches!(parse_connection(bad), Err(GraphError::InvalidArgument(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_build_graph_propagates_graph_errors() {
    let edges = vec!["A,B,x,5".to_string(), "A,B,y,5".to_string()];
    assert!(matches!(
        build_graph(&[], &edges),
        Err(GraphError::AlreadyConnected(..))
    ));

    let edges = vec!["A,B,x,-5".to_string()];
    assert!(matches!(
        build_graph(&[], &edges),
        Err(GraphError::InvalidArgument(_))
    ));
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_stats() {
    let output = run_lgraph(&["stats"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Nodes: 4"), "unexpected stats: {}", out);
    assert!(out.contains("Edges: 2"), "unexpected stats: {}", out);
}

#[test]
fn test_cli_show_is_sorted() {
    let output = run_lgraph(&["show"]);
    assert_success(&output);
    let out = stdout_str(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Göteborg to Stockholm by Tåg takes 400",
            "Kiruna to Stockholm by Tåg takes 800",
            "Stockholm to Göteborg by Tåg takes 400 to Kiruna by Tåg takes 800",
            "Visby",
        ]
    );
}

#[test]
fn test_cli_show_json() {
    let output = run_lgraph(&["--format", "json", "show"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(value["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_reach() {
    let output = run_lgraph(&["reach", "Kiruna", "Göteborg"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("true"));

    let output = run_lgraph(&["reach", "Kiruna", "Visby"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("false"));

    // Unknown nodes are unreachable, not errors.
    let output = run_lgraph(&["reach", "Kiruna", "Luleå"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("false"));
}

#[test]
fn test_cli_path() {
    let output = run_lgraph(&["path", "Kiruna", "Göteborg"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("2 hop(s), total weight 1200"), "got: {}", out);
    assert!(out.contains("Kiruna -> Stockholm by Tåg (800)"), "got: {}", out);
    assert!(out.contains("Stockholm -> Göteborg by Tåg (400)"), "got: {}", out);
}

#[test]
fn test_cli_path_json() {
    let output = run_lgraph(&["--format", "json", "path", "Kiruna", "Göteborg"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["hops"], 2);
    assert_eq!(value["edges"][0]["destination"], "Stockholm");
    assert_eq!(value["edges"][1]["destination"], "Göteborg");
    assert_eq!(value["edges"][1]["label"], "Tåg");
}

#[test]
fn test_cli_no_path() {
    let output = run_lgraph(&["path", "Kiruna", "Visby"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("No path from Kiruna to Visby"));
}

#[test]
fn test_cli_neighbors() {
    let output = run_lgraph(&["neighbors", "Stockholm"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Stockholm (2 connection(s))"), "got: {}", out);
    assert!(out.contains("to Kiruna by Tåg takes 800"), "got: {}", out);
}

#[test]
fn test_cli_exit_codes() {
    let output = run_lgraph(&["path", "Kiruna", "Luleå"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_lgraph(&["--edge", "Kiruna,Stockholm,Flyg,90", "stats"]);
    assert_eq!(output.status.code(), Some(5));

    let output = run_lgraph(&["--edge", "Kiruna,Luleå,Tåg,-1", "stats"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid argument"));
}
