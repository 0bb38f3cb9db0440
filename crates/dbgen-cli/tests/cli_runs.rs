use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("dbgen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn dbgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbgen"))
        .current_dir(dir)
        .env_remove("DBGEN_MAX_CLIENTS")
        .env_remove("DBGEN_MAX_PURCHASES")
        .args(args)
        .output()
        .expect("run dbgen")
}

fn single_run_dir(runs: &Path) -> PathBuf {
    let entries: Vec<PathBuf> = fs::read_dir(runs)
        .expect("read runs dir")
        .map(|entry| entry.expect("dir entry").path())
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one run in {}", runs.display());
    entries.into_iter().next().expect("run dir")
}

#[test]
fn clients_then_purchases() {
    let dir = temp_dir("pipeline");

    let clients = dbgen(
        &dir,
        &["clients", "--count", "8", "--seed", "4", "--run-dir", "runs_clients"],
    );
    assert!(clients.status.success(), "{}", String::from_utf8_lossy(&clients.stderr));
    assert!(dir.join("clientes_ficticios.csv").exists());
    assert!(dir.join("clientes_ficticios.xlsx").exists());

    let purchases = dbgen(
        &dir,
        &[
            "purchases",
            "--rows",
            "3",
            "--no-xlsx",
            "--run-dir",
            "runs_purchases",
        ],
    );
    assert!(purchases.status.success(), "{}", String::from_utf8_lossy(&purchases.stderr));
    assert!(!dir.join("compras.xlsx").exists());

    let csv = fs::read_to_string(dir.join("compras.csv")).expect("read compras.csv");
    assert_eq!(csv.lines().count(), 9);

    let run = single_run_dir(&dir.join("runs_purchases"));
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(run.join("report.json")).expect("report"))
            .expect("parse report");
    assert_eq!(report["kind"], "purchases");
    assert_eq!(report["rows_requested"], 3);
    assert_eq!(report["rows_generated"], 8);
    assert_eq!(report["rows_adjusted"], true);

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(run.join("config.json")).expect("config"))
            .expect("parse config");
    assert_eq!(config["config"]["seed"], 42);

    let logs = fs::read_to_string(run.join("logs.ndjson")).expect("logs");
    assert!(logs.lines().any(|line| line.contains("run_finished")));
}

#[test]
fn invalid_bounds_fail_before_any_output() {
    let dir = temp_dir("invalid");
    let output = dbgen(
        &dir,
        &[
            "purchases",
            "--value-min",
            "100",
            "--value-max",
            "1",
            "--run-dir",
            "runs",
        ],
    );
    assert!(!output.status.success());
    assert!(!dir.join("compras.csv").exists());
    assert!(!dir.join("runs").exists());
}

#[test]
fn config_file_supplies_defaults() {
    let dir = temp_dir("config_file");
    fs::write(
        dir.join("dbgen.toml"),
        "[clients]\ncount = 3\nseed = 1\ndomain = \"loja.com.br\"\n",
    )
    .expect("write config");

    let output = dbgen(&dir, &["--config", "dbgen.toml", "clients", "--no-xlsx"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let csv = fs::read_to_string(dir.join("clientes_ficticios.csv")).expect("read clients");
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("@loja.com.br"));
}

#[test]
fn huge_value_bounds_fail_before_any_output() {
    let dir = temp_dir("huge_bounds");
    let output = dbgen(
        &dir,
        &[
            "purchases",
            "--value-min",
            "-1e308",
            "--value-max",
            "1e308",
            "--run-dir",
            "runs",
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("within"));
    assert!(!dir.join("compras.csv").exists());
    assert!(!dir.join("runs").exists());
}
