// File: crates/bench-report/src/table.rs
// Summary: CSV table loaded into memory; numeric columns are parsed on lookup.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};

/// Name of the x-axis column every benchmark CSV carries.
pub const SIZE_COLUMN: &str = "Size";

/// A loaded CSV. Cells stay as text until a column is requested, so a bad
/// column only fails the chart that uses it.
#[derive(Clone, Debug)]
pub struct Table {
    name: String,
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load `path`. A file that does not exist maps to [`ReportError::MissingInput`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ReportError::MissingInput { path: path.to_path_buf() });
            }
            Err(e) => return Err(e.into()),
        };
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let table = Self::from_reader(name, path.to_path_buf(), file)?;
        debug!(path = %path.display(), rows = table.len(), columns = ?table.headers, "loaded table");
        Ok(table)
    }

    /// Parse CSV text from `reader`; `name` is used in error messages.
    pub fn from_reader<R: Read>(name: impl Into<String>, path: PathBuf, reader: R) -> Result<Self> {
        let csv_err = |source| ReportError::Csv { path: path.clone(), source };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(csv_err)?;
            rows.push(rec.iter().map(str::to_string).collect());
        }
        Ok(Self { name: name.into(), path, headers, rows })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn path(&self) -> &Path { &self.path }

    pub fn headers(&self) -> &[String] { &self.headers }

    /// Number of data rows.
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    fn index_of(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Values of `column` in row order, parsed as `f64`.
    pub fn column(&self, column: &str) -> Result<Vec<f64>> {
        let idx = self.index_of(column).ok_or_else(|| ReportError::MissingColumn {
            table: self.name.clone(),
            column: column.to_string(),
        })?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, rec)| {
                let raw = rec.get(idx).map(String::as_str).unwrap_or("");
                raw.parse::<f64>().map_err(|_| ReportError::NotNumeric {
                    table: self.name.clone(),
                    column: column.to_string(),
                    row: row + 1,
                    value: raw.to_string(),
                })
            })
            .collect()
    }
}
