use std::{fs, path::PathBuf};

use clap::Parser;
use rules_export::{
    backend::{Backend, Error, MemoryBackend, Snapshot},
    cli::Cli,
    config::TomlConfig,
    output::OutputFmt,
    printer::StdoutPrinter,
    rule::{normalize_all, Diagnostic, RuleField},
};

fn snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join("stores.toml")
}

fn backend() -> MemoryBackend {
    Snapshot::from_path(&snapshot_path()).unwrap().into()
}

#[test]
fn normalize_and_render_snapshot_rules() {
    let backend = backend();
    let store = backend.get_store("Work").unwrap();
    let raw_rules = backend.get_rules(&store).unwrap();
    assert_eq!(raw_rules.len(), 4);

    let normalized = normalize_all(&raw_rules, &store.name);
    let names: Vec<_> = normalized.iter().map(|n| n.rule_name.as_str()).collect();
    assert_eq!(names, vec!["Acme clients", "CC noise", "Team"]);

    let acme = &normalized[0].rule;
    assert_eq!(
        acme.render(),
        "If an email from [jane@co.com] then move to [Clients/Acme]"
    );
    assert_eq!(acme.to_csv_row(), "jane@co.com;Clients/Acme");

    let cc = &normalized[1].rule;
    assert_eq!(cc.render(), "If an email sent to me in CC then move to trash");

    let team = &normalized[2];
    assert_eq!(
        team.rule.render(),
        concat!(
            "If an email sent to [team@co.com,ops@co.com]",
            " with text in subject or body [outage OR incident]",
            " then copy to [Team/Incidents]",
        )
    );
    assert_eq!(
        team.diagnostics,
        vec![
            Diagnostic::new(RuleField::ToAddress, "directory unreachable"),
            Diagnostic::new(RuleField::ToAddress, "malformed entry"),
        ]
    );
}

#[test]
fn distinguish_missing_stores() {
    let backend = backend();

    assert!(matches!(
        backend.get_store("Home"),
        Err(Error::StoreNotFound(name)) if name == "Home"
    ));
    assert!(matches!(
        MemoryBackend::default().get_store("Home"),
        Err(Error::NoStores)
    ));

    let archives = backend.get_store("archives").unwrap();
    assert!(backend.get_rules(&archives).unwrap().is_empty());
}

#[test]
fn export_rules_from_cli() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.txt");

    let cli = Cli::try_parse_from([
        "rules-export",
        "rule",
        "export",
        "Work",
        "--file",
        path.to_str().unwrap(),
    ])
    .unwrap();

    let config = TomlConfig {
        snapshot: Some(snapshot_path()),
        ..Default::default()
    };
    let mut printer = StdoutPrinter::from(OutputFmt::Json);
    cli.command.execute(&mut printer, &config).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        concat!(
            "If an email from [jane@co.com] then move to [Clients/Acme]\n",
            "If an email sent to me in CC then move to trash\n",
            "If an email sent to [team@co.com,ops@co.com]",
            " with text in subject or body [outage OR incident]",
            " then copy to [Team/Incidents]\n",
        )
    );
}

#[test]
fn export_csv_rules_from_cli() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.csv");

    let cli = Cli::try_parse_from([
        "rules-export",
        "rules",
        "export",
        "--format",
        "csv",
        "--file",
        path.to_str().unwrap(),
    ])
    .unwrap();

    let config = TomlConfig {
        snapshot: Some(snapshot_path()),
        default_store: Some("Work".into()),
        ..Default::default()
    };
    let mut printer = StdoutPrinter::from(OutputFmt::Json);
    cli.command.execute(&mut printer, &config).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "jane@co.com;Clients/Acme\n;\n;\n"
    );
}
