//! End-to-end tests for the `voltgen` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[models]]
name = "User"
fillable = ["name", "email", "password", "is_admin"]

[[models]]
name = "Order"
fillable = ["customer_name", "status", "total_amount"]

[tables]
users = [
    { name = "id", type = "bigint" },
    { name = "name", type = "varchar(255)" },
    { name = "email", type = "varchar(255)" },
    { name = "password", type = "varchar(255)" },
    { name = "is_admin", type = "boolean" },
    { name = "created_at", type = "timestamp" },
    { name = "updated_at", type = "timestamp" },
]
orders = [
    { name = "id", type = "bigint" },
    { name = "customer_name", type = "string" },
    { name = "status", type = "string" },
    { name = "total_amount", type = "decimal(10,2)" },
    { name = "created_at", type = "timestamp" },
]
"#;

/// A Laravel-shaped project with a manifest and an empty config file.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("volt-schema.toml"), MANIFEST).unwrap();
    fs::write(dir.path().join("voltgen.toml"), "").unwrap();
    dir
}

fn voltgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("voltgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("VOLTGEN_CONFIG", dir.join("voltgen.toml"));
    cmd
}

fn component(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join("app/Livewire").join(relative)).unwrap()
}

// ── generators ────────────────────────────────────────────────────────────────

#[test]
fn datatable_is_written_under_the_plural_model() {
    let dir = project();
    voltgen(dir.path())
        .args(["datatable", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Users/DataTable.php"));

    let text = component(dir.path(), "Users/DataTable.php");
    assert!(text.starts_with("<?php"));
    assert!(text.contains("use App\\Models\\User;"));
    assert!(text.contains("$q->orWhere('name', 'like', '%' . $this->search . '%')"));
    assert!(!text.contains("{{ table_headers }}"));
}

#[test]
fn form_action_picks_the_file_name() {
    let dir = project();
    voltgen(dir.path())
        .args(["form", "User", "--action", "edit"])
        .assert()
        .success();

    let text = component(dir.path(), "Users/Edit.php");
    assert!(text.contains("type=\"email\""));
    assert!(!text.contains("form.password"));
    assert!(text.contains("'form.is_admin' => 'boolean'"));
}

#[test]
fn chart_prints_the_chart_js_reminder() {
    let dir = project();
    voltgen(dir.path())
        .args([
            "chart",
            "Order",
            "--type",
            "line",
            "--metric",
            "sum",
            "--metric-column",
            "total_amount",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("chart.js"));

    let text = component(dir.path(), "Orders/Chart.php");
    assert!(text.contains("SUM(total_amount)"));
    assert!(text.contains("'%Y-%m'"));
}

#[test]
fn laravel_alias_and_explicit_search_lists() {
    let dir = project();
    voltgen(dir.path())
        .args([
            "make:volt-search",
            "Order",
            "--fields",
            "customer_name",
            "--filters",
            "status",
        ])
        .assert()
        .success();

    let text = component(dir.path(), "Orders/Search.php");
    assert!(text.contains("$q->orWhere('customer_name', 'like'"));
    assert!(!text.contains("orWhere('status'"));
    assert!(text.contains("=\"filters.status\""));
}

#[test]
fn card_and_modal_variants() {
    let dir = project();
    voltgen(dir.path())
        .args(["card", "Order", "--layout", "list"])
        .assert()
        .success();
    voltgen(dir.path())
        .args(["modal", "Order", "--type", "confirm"])
        .assert()
        .success();

    assert!(component(dir.path(), "Orders/Cards.php").contains("space-y-4"));
    assert!(component(dir.path(), "Orders/ConfirmModal.php").contains("{{ 'Delete Order' }}"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project();
    voltgen(dir.path())
        .args(["card", "User", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<?php"))
        .stdout(predicate::str::contains("Users/Cards.php"));

    assert!(!dir.path().join("app").exists());
}

#[test]
fn json_output_describes_the_artifact() {
    let dir = project();
    voltgen(dir.path())
        .args(["--output-format", "json", "search", "User"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"class\": \"Search\""))
        .stdout(predicate::str::contains("\"kind\": \"search\""));
}

#[test]
fn project_and_schema_flags() {
    let dir = project();
    let elsewhere = TempDir::new().unwrap();
    fs::write(elsewhere.path().join("voltgen.toml"), "").unwrap();

    voltgen(elsewhere.path())
        .arg("datatable")
        .arg("Order")
        .arg("--project")
        .arg(dir.path())
        .arg("--schema")
        .arg(dir.path().join("volt-schema.toml"))
        .assert()
        .success();

    assert!(dir.path().join("app/Livewire/Orders/DataTable.php").is_file());
}

#[test]
fn project_stub_override_is_honoured() {
    let dir = project();
    fs::create_dir_all(dir.path().join("stubs")).unwrap();
    fs::write(
        dir.path().join("stubs/volt-datatable.stub"),
        "{{ class }} for {{ model_class }}",
    )
    .unwrap();

    voltgen(dir.path()).args(["datatable", "User"]).assert().success();
    assert_eq!(
        component(dir.path(), "Users/DataTable.php"),
        "DataTable for App\\Models\\User"
    );
}

#[test]
fn generation_is_deterministic() {
    let dir = project();
    voltgen(dir.path()).args(["form", "User"]).assert().success();
    let first = component(dir.path(), "Users/Create.php");
    voltgen(dir.path()).args(["form", "User"]).assert().success();
    assert_eq!(first, component(dir.path(), "Users/Create.php"));
}

// ── other commands ────────────────────────────────────────────────────────────

#[test]
fn help_and_version_exit_zero() {
    let dir = project();
    voltgen(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("datatable"));
    voltgen(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    let dir = project();
    voltgen(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voltgen"));
}

#[test]
fn config_get_reads_file_and_env() {
    let dir = project();
    fs::write(
        dir.path().join("voltgen.toml"),
        "[generator.datatable]\nper_page = 25\n",
    )
    .unwrap();

    voltgen(dir.path())
        .args(["config", "get", "generator.datatable.per_page"])
        .assert()
        .success()
        .stdout(predicate::str::diff("25\n"));

    voltgen(dir.path())
        .env("VOLTGEN__GENERATOR__CARD__PER_PAGE", "30")
        .args(["config", "get", "generator.card.per_page"])
        .assert()
        .success()
        .stdout(predicate::str::diff("30\n"));
}

#[test]
fn configured_page_size_reaches_the_component() {
    let dir = project();
    fs::write(
        dir.path().join("voltgen.toml"),
        "[generator.datatable]\nper_page = 25\n",
    )
    .unwrap();

    voltgen(dir.path()).args(["datatable", "User"]).assert().success();
    assert!(component(dir.path(), "Users/DataTable.php").contains("->paginate(25);"));
}

#[test]
fn init_local_writes_a_loadable_config() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("voltgen").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("VOLTGEN_CONFIG")
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join(".voltgen.toml")).unwrap();
    assert!(written.contains("[generator.datatable]"));

    // second run without --force keeps the file
    let mut again = Command::cargo_bin("voltgen").unwrap();
    again
        .current_dir(dir.path())
        .env_remove("VOLTGEN_CONFIG")
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
