//! Interactive single-session driver
//!
//! One synchronous session per invocation: read the CSV, show a preview,
//! prompt for the time and concentration columns, then compute and render.
//! Until both columns are selected nothing is computed and no chart is
//! written. A new selection simply discards the previous results; there is
//! exactly one computation in flight at a time.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::data::{read_csv, Table};
use crate::error::NcaviewError;
use crate::nca::PkSummary;
use crate::plot::{plot_auc_area, plot_concentration_time};

/// Rows shown in the upload preview
const PREVIEW_ROWS: usize = 5;

/// Run a session on stdin/stdout for the CSV at `path`
///
/// Charts are written to the current working directory.
pub fn run(path: impl AsRef<Path>) -> Result<(), NcaviewError> {
    let table = read_csv(path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &table,
        &mut stdin.lock(),
        &mut stdout.lock(),
        Path::new("."),
    )
}

/// Drive a session over explicit reader/writer handles
///
/// Split out from [`run`] so the interaction loop is testable with scripted
/// input. Rendered charts land in `plot_dir`.
pub fn run_session<R: BufRead, W: Write>(
    table: &Table,
    input: &mut R,
    out: &mut W,
    plot_dir: &Path,
) -> Result<(), NcaviewError> {
    writeln!(out, "Uploaded pharmacokinetic data ({} rows):", table.n_rows())?;
    writeln!(out, "{}", table.preview(PREVIEW_ROWS))?;

    loop {
        // No computation or chart until both selections are made; an ended
        // input stream leaves the session with nothing rendered.
        let Some(time_column) = prompt_column(table, "time", input, out)? else {
            return Ok(());
        };
        let Some(conc_column) = prompt_column(table, "concentration", input, out)? else {
            return Ok(());
        };

        let series = table.series(&time_column, &conc_column)?;
        let summary = PkSummary::from_arrays(&series.time, &series.concentration)?;

        writeln!(out)?;
        writeln!(
            out,
            "Pharmacokinetic parameters ({} vs {}):",
            conc_column, time_column
        )?;
        writeln!(out, "{summary}")?;

        let line_path = plot_dir.join("concentration_time.png");
        let area_path = plot_dir.join("auc_area.png");
        plot_concentration_time(&series, &line_path, None)?;
        plot_auc_area(&series, &area_path, None)?;
        writeln!(
            out,
            "\nCharts written to {} and {}",
            line_path.display(),
            area_path.display()
        )?;

        write!(out, "\nAnalyze another column pair? [y/N] ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        writeln!(out)?;
    }
}

/// Prompt for one column by number or name; reprompts until valid
///
/// Returns `None` when the input stream ends before a valid selection.
fn prompt_column<R: BufRead, W: Write>(
    table: &Table,
    role: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, NcaviewError> {
    loop {
        writeln!(out, "Select the {role} column:")?;
        for (i, header) in table.headers().iter().enumerate() {
            writeln!(out, "  [{}] {}", i + 1, header)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        if let Ok(number) = choice.parse::<usize>() {
            if (1..=table.headers().len()).contains(&number) {
                return Ok(Some(table.headers()[number - 1].clone()));
            }
        } else if let Some(header) = table.headers().iter().find(|h| h.as_str() == choice) {
            return Ok(Some(header.clone()));
        }

        writeln!(out, "'{choice}' is not a column, try again.")?;
    }
}
