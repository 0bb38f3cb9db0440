use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use dbgen_core::{ClientConfig, Limits, PurchaseConfig};
use dbgen_generate::{DatasetKind, GenerationEngine, OutputPaths};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("dbgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn hash_file(path: &Path) -> String {
    let bytes = fs::read(path).unwrap_or_else(|_| panic!("missing file {}", path.display()));
    hex::encode(Sha256::digest(&bytes))
}

fn xlsx_part(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut part = archive.by_name(name).expect("xlsx part");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("read xlsx part");
    xml
}

/// The `<c>` element for `cell` in a sheet part.
fn cell_xml<'a>(sheet: &'a str, cell: &str) -> &'a str {
    let open = format!("<c r=\"{cell}\"");
    let start = sheet.find(&open).unwrap_or_else(|| panic!("cell {cell} missing"));
    let end = sheet[start..].find("</c>").expect("closed cell") + start;
    &sheet[start..end]
}

fn write_clients(dir: &Path, count: u64, seed: u64) -> PathBuf {
    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths::with_sibling_xlsx(dir.join("clientes_ficticios.csv"));
    engine
        .run_clients(
            &ClientConfig {
                count,
                seed: Some(seed),
                ..ClientConfig::default()
            },
            &out,
        )
        .expect("generate clients");
    out.csv
}

#[test]
fn client_files_are_written() {
    let dir = temp_out_dir("clients");
    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths::with_sibling_xlsx(dir.join("clientes_ficticios.csv"));
    let report = engine
        .run_clients(
            &ClientConfig {
                count: 15,
                seed: Some(3),
                ..ClientConfig::default()
            },
            &out,
        )
        .expect("generate clients");

    assert_eq!(report.kind, DatasetKind::Clients);
    assert_eq!(report.seed, 3);
    assert_eq!(report.rows_generated, 15);
    assert_eq!(report.outputs.len(), 2);

    let csv = fs::read_to_string(&out.csv).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("CódigoCliente,NomeCompleto,Celular,CPF,Email")
    );
    assert_eq!(lines.count(), 15);
    assert_eq!(report.outputs[0].bytes, csv.len() as u64);

    let xlsx = out.xlsx.expect("xlsx path");
    assert_eq!(xlsx, dir.join("clientes_ficticios.xlsx"));
    assert!(fs::metadata(&xlsx).expect("xlsx written").len() > 0);
}

#[test]
fn missing_seed_is_drawn_and_reported() {
    let dir = temp_out_dir("clients_seed");
    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths {
        csv: dir.join("clientes.csv"),
        xlsx: None,
    };
    let config = ClientConfig {
        count: 4,
        ..ClientConfig::default()
    };
    let first = engine.run_clients(&config, &out).expect("first run");
    let first_csv = fs::read_to_string(&out.csv).expect("read first");

    let replay = ClientConfig {
        seed: Some(first.seed),
        ..config
    };
    engine.run_clients(&replay, &out).expect("replay run");
    let replay_csv = fs::read_to_string(&out.csv).expect("read replay");
    assert_eq!(first_csv, replay_csv);
}

#[test]
fn purchase_files_reference_generated_clients() {
    let dir = temp_out_dir("purchases");
    let clients_csv = write_clients(&dir, 10, 1);

    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths::with_sibling_xlsx(dir.join("compras.csv"));
    let report = engine
        .run_purchases(
            &PurchaseConfig {
                rows: 4,
                ..PurchaseConfig::default()
            },
            &clients_csv,
            &out,
        )
        .expect("generate purchases");

    assert_eq!(report.kind, DatasetKind::Purchases);
    assert_eq!(report.rows_requested, 4);
    assert_eq!(report.rows_generated, 10);
    assert_eq!(report.baseline_rows, 10);
    assert_eq!(report.remainder_rows, 0);
    assert!(report.rows_adjusted);

    let csv = fs::read_to_string(&out.csv).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("CódigoCliente,DataCompra,Valor,CódigoFilial")
    );
    for (idx, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4, "{line}");
        assert_eq!(fields[0], format!("C{:05}", idx + 1));
        assert_eq!(fields[1].len(), 10);
        assert!(fields[1].starts_with("2024-"));
        let (_, cents) = fields[2].split_once('.').expect("decimal point");
        assert_eq!(cents.len(), 2);
        assert!(fields[3].starts_with('F') && fields[3].len() == 4);
    }
    assert!(out.xlsx.is_some_and(|path| path.exists()));
}

#[test]
fn purchase_sheet_holds_currency_cells() {
    let dir = temp_out_dir("purchases_xlsx");
    let clients_csv = write_clients(&dir, 3, 5);
    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths::with_sibling_xlsx(dir.join("compras.csv"));
    engine
        .run_purchases(
            &PurchaseConfig {
                rows: 3,
                value_min: 12.5,
                value_max: 12.5,
                ..PurchaseConfig::default()
            },
            &clients_csv,
            &out,
        )
        .expect("generate purchases");
    let xlsx = out.xlsx.expect("xlsx path");

    let workbook = xlsx_part(&xlsx, "xl/workbook.xml");
    assert!(workbook.contains("name=\"Compras\""), "{workbook}");

    let styles = xlsx_part(&xlsx, "xl/styles.xml");
    assert!(styles.contains("formatCode=\"R$ #,##0.00\""), "{styles}");

    let sheet = xlsx_part(&xlsx, "xl/worksheets/sheet1.xml");
    for row in 2..=4 {
        let amount = cell_xml(&sheet, &format!("C{row}"));
        assert!(!amount.contains(" t=\""), "amount cell is not numeric: {amount}");
        assert!(amount.contains(" s=\""), "amount cell has no style: {amount}");
        assert!(amount.contains("<v>12.5</v>"), "{amount}");
    }
    assert!(cell_xml(&sheet, "A2").contains(" t=\""), "client code is text");
}

#[test]
fn client_sheet_is_named() {
    let dir = temp_out_dir("clients_xlsx");
    write_clients(&dir, 2, 9);
    let workbook = xlsx_part(&dir.join("clientes_ficticios.xlsx"), "xl/workbook.xml");
    assert!(workbook.contains("name=\"Clientes\""), "{workbook}");
}

#[test]
fn oversized_spreadsheet_is_rejected_before_any_write() {
    let dir = temp_out_dir("sheet_limit");
    let clients_csv = write_clients(&dir, 3, 1);
    let limits = Limits {
        max_clients: 2_000_000,
        max_purchases: 2_000_000,
    };
    let engine = GenerationEngine::new(limits);

    let out = OutputPaths::with_sibling_xlsx(dir.join("compras.csv"));
    let err = engine
        .run_purchases(
            &PurchaseConfig {
                rows: 1_048_576,
                ..PurchaseConfig::default()
            },
            &clients_csv,
            &out,
        )
        .expect_err("too many rows for one sheet");
    assert!(err.is_configuration());
    assert!(!out.csv.exists());
    assert!(!dir.join("compras.xlsx").exists());

    let out = OutputPaths::with_sibling_xlsx(dir.join("muitos_clientes.csv"));
    let err = engine
        .run_clients(
            &ClientConfig {
                count: 1_048_576,
                seed: Some(1),
                ..ClientConfig::default()
            },
            &out,
        )
        .expect_err("too many clients for one sheet");
    assert!(err.is_configuration());
    assert!(!out.csv.exists());
}

#[test]
fn purchase_csv_is_byte_identical_across_runs() {
    let dir = temp_out_dir("determinism");
    let clients_csv = write_clients(&dir, 25, 8);
    let engine = GenerationEngine::new(Limits::default());
    let config = PurchaseConfig {
        rows: 400,
        seed: 2024,
        ..PurchaseConfig::default()
    };

    let out_a = OutputPaths {
        csv: dir.join("compras_a.csv"),
        xlsx: None,
    };
    let out_b = OutputPaths {
        csv: dir.join("compras_b.csv"),
        xlsx: None,
    };
    engine
        .run_purchases(&config, &clients_csv, &out_a)
        .expect("run a");
    engine
        .run_purchases(&config, &clients_csv, &out_b)
        .expect("run b");

    assert_eq!(hash_file(&out_a.csv), hash_file(&out_b.csv));
}

#[test]
fn invalid_config_writes_nothing() {
    let dir = temp_out_dir("invalid");
    let clients_csv = write_clients(&dir, 3, 1);
    let engine = GenerationEngine::new(Limits::default());
    let out = OutputPaths::with_sibling_xlsx(dir.join("compras.csv"));

    let err = engine
        .run_purchases(
            &PurchaseConfig {
                value_min: 100.0,
                value_max: 1.0,
                ..PurchaseConfig::default()
            },
            &clients_csv,
            &out,
        )
        .expect_err("inverted bounds");
    assert!(err.is_configuration());
    assert!(!out.csv.exists());

    let err = engine
        .run_purchases(
            &PurchaseConfig::default(),
            &dir.join("does_not_exist.csv"),
            &out,
        )
        .expect_err("missing client file");
    assert!(err.is_configuration());
    assert!(!out.csv.exists());
}
