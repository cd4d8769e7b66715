//! Integration tests for ingestion, the session loop and chart rendering
//!
//! These go through the filesystem: CSV fixtures are written to a temp
//! directory, charts are rendered into another.

use std::io::Cursor;
use std::io::Write as _;
use std::path::PathBuf;

use approx::assert_relative_eq;
use ncaview::prelude::*;
use ncaview::session::run_session;

/// Write a CSV fixture and return its path (the dir keeps it alive)
fn fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const PK_CSV: &str = "\
time,concentration,subject
0,0.0,A
1,2.0,A
2,4.0,A
3,2.0,A
4,0.0,A
";

#[test]
fn csv_to_summary_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);

    let table = read_csv(&path).unwrap();
    assert_eq!(table.headers(), ["time", "concentration", "subject"]);
    assert_eq!(table.n_rows(), 5);

    let series = table.series("time", "concentration").unwrap();
    let summary = PkSummary::from_arrays(&series.time, &series.concentration).unwrap();
    assert_relative_eq!(summary.auc, 8.0, max_relative = 1e-12);
    assert_eq!(summary.cmax, 4.0);
    assert_eq!(summary.tmax, 2.0);
}

#[test]
fn non_numeric_selection_is_a_visible_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);

    let table = read_csv(&path).unwrap();
    let err = table.series("time", "subject").unwrap_err();
    assert!(matches!(err, DataError::NonNumericCell { ref column, row, .. }
        if column == "subject" && row == 1));
    // The message names the cell rather than producing a silent wrong answer
    assert!(err.to_string().contains("subject"));
}

#[test]
fn preview_shows_first_rows_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);

    let table = read_csv(&path).unwrap();
    let preview = table.preview(3);
    assert_eq!(preview.lines().count(), 4); // header + 3 rows
    assert!(preview.starts_with("time"));
}

#[test]
fn charts_render_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);
    let table = read_csv(&path).unwrap();
    let series = table.series("time", "concentration").unwrap();

    let line_path = dir.path().join("line.png");
    let area_path = dir.path().join("area.png");
    plot_concentration_time(&series, &line_path, None).unwrap();
    plot_auc_area(&series, &area_path, None).unwrap();

    // PNG magic bytes
    for path in [&line_path, &area_path] {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}

#[test]
fn charts_render_single_point_series() {
    let series = Series {
        time: vec![2.0],
        concentration: vec![5.0],
        time_label: "time".into(),
        concentration_label: "conc".into(),
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.png");
    plot_concentration_time(&series, &path, None).unwrap();
    assert!(path.exists());
}

#[test]
fn custom_plot_config_is_honored() {
    let series = Series {
        time: vec![0.0, 1.0, 2.0],
        concentration: vec![0.0, 3.0, 1.0],
        time_label: "time".into(),
        concentration_label: "conc".into(),
    };
    let mut config = PlotConfig::auc_area();
    config.title = "Exposure".to_string();
    config.width = 400;
    config.height = 300;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.png");
    plot_auc_area(&series, &path, Some(&config)).unwrap();
    assert!(path.exists());
}

#[test]
fn scripted_session_computes_and_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);
    let table = read_csv(&path).unwrap();

    let plot_dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    // Pick column 1 (time) and column 2 (concentration), then decline a rerun
    let mut input = Cursor::new("1\n2\nn\n");
    run_session(&table, &mut input, &mut out, plot_dir.path()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Pharmacokinetic parameters"));
    assert!(text.contains("8.00"));
    assert!(text.contains("4.00"));
    assert!(text.contains("2.00"));
    assert!(plot_dir.path().join("concentration_time.png").exists());
    assert!(plot_dir.path().join("auc_area.png").exists());
}

#[test]
fn scripted_session_propagates_bad_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "pk.csv", PK_CSV);
    let table = read_csv(&path).unwrap();

    let plot_dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    // Select the text column as concentration: the error must surface
    let mut input = Cursor::new("1\n3\n");
    let result = run_session(&table, &mut input, &mut out, plot_dir.path());
    assert!(matches!(
        result,
        Err(NcaviewError::Data(DataError::NonNumericCell { .. }))
    ));
}
