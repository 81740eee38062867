use cohort_roster::commands::{
    execute_export, execute_query, run_query, validate_export_args, validate_query_args,
    validate_report_file, ExportArgs, OutputFormat, Query, QueryArgs, QueryOutput,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/cohort_data.txt")
}

fn query_args(query: Query) -> QueryArgs {
    QueryArgs {
        data_file: fixture(),
        query,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_validate_query_args_valid() {
    let args = query_args(Query::Cohort {
        name: "Harry Potter".to_string(),
    });
    assert!(validate_query_args(&args).is_ok());
}

#[test]
fn test_validate_query_args_empty_name() {
    let args = query_args(Query::Cohort { name: String::new() });
    assert!(validate_query_args(&args).is_err());
}

#[test]
fn test_validate_export_args_empty_data_file() {
    let args = ExportArgs {
        data_file: PathBuf::new(),
        ..Default::default()
    };
    assert!(validate_export_args(&args).is_err());
}

#[test]
fn test_houses_text_output() {
    let output = execute_query(&query_args(Query::Houses)).unwrap();
    assert_eq!(
        output,
        "Dumbledore's Army\nGryffindor\nHufflepuff\nRavenclaw\nSlytherin\n"
    );
}

#[test]
fn test_dupes_output() {
    let output = execute_query(&query_args(Query::Dupes)).unwrap();
    assert_eq!(output, "Creevey\nPatil\nWeasley\n");
}

#[test]
fn test_students_query_by_cohort() {
    let output = run_query(&query_args(Query::Students {
        cohort: Some("Summer 2016".to_string()),
    }))
    .unwrap();

    assert_eq!(
        output,
        QueryOutput::Names(vec!["Colin Creevey".to_string(), "Dennis Creevey".to_string()])
    );
}

#[test]
fn test_data_query_json() {
    let mut args = query_args(Query::Data);
    args.format = OutputFormat::Json;

    let json: serde_json::Value = serde_json::from_str(&execute_query(&args).unwrap()).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 23);
    assert_eq!(rows[0]["full_name"], "Harry Potter");
    assert_eq!(rows[0]["cohort"], "Fall 2015");
}

#[test]
fn test_rosters_query_json_has_seven_lists() {
    let mut args = query_args(Query::Rosters);
    args.format = OutputFormat::Json;

    let json: serde_json::Value = serde_json::from_str(&execute_query(&args).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 7);
    assert_eq!(json["ghosts"][0], "Fat Friar");
}

#[test]
fn test_housemates_for_unknown_name_is_empty() {
    let output = execute_query(&query_args(Query::Housemates {
        name: "Balloonicorn".to_string(),
    }))
    .unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_export_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let output_json = dir.path().join("out/report.json");

    let args = ExportArgs {
        data_file: fixture(),
        output_json: output_json.clone(),
        print_summary: false,
    };

    let report = execute_export(&args).unwrap();
    assert_eq!(report.record_count, 23);
    assert!(output_json.exists());

    assert!(validate_report_file(&output_json).is_ok());
}

#[test]
fn test_validate_report_rejects_non_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.json");
    std::fs::write(&path, r#"{"version": "1.0.0"}"#).unwrap();

    assert!(validate_report_file(&path).is_err());
}

#[test]
fn test_export_missing_roster_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = ExportArgs {
        data_file: dir.path().join("missing.txt"),
        output_json: dir.path().join("report.json"),
        print_summary: false,
    };

    assert!(execute_export(&args).is_err());
    assert!(!dir.path().join("report.json").exists());
}
