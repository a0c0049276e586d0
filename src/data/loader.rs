use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Table;

/// Everything from this byte to the end of the line is ignored.
const COMMENT: u8 = b'#';

const BUF_CAP: usize = 1 << 16;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failure from a bare reader, before a path is known.
    #[error("read error on line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}, field {column}: '{token}' is not a number")]
    BadNumber {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} field(s), found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric table from `path`.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_table(BufReader::with_capacity(BUF_CAP, file)).map_err(|e| match e {
        LoadError::Read { source, .. } => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse a table from any buffered reader.
///
/// * Fields are separated by any run of ASCII whitespace.
/// * `#` starts a comment; blank and comment-only lines are skipped.
/// * The first data line fixes the column count; every later line must match.
///
/// Nothing is returned on failure, not even the rows read so far.
pub fn parse_table<R: BufRead>(mut reader: R) -> Result<Table, LoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut skipped = 0usize;
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                line: line_no + 1,
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let content = match buf.iter().position(|&b| b == COMMENT) {
            Some(pos) => &buf[..pos],
            None => &buf[..],
        };
        let row = parse_row(content, line_no)?;
        if row.is_empty() {
            skipped += 1;
            continue;
        }

        match n_cols {
            None => n_cols = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(LoadError::RaggedRow {
                    line: line_no,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} blank or comment line(s)");
    }

    Ok(Table::from_rows(n_cols.unwrap_or(0), rows))
}

/// Split on whitespace (which also drops `\r` and `\n`) and parse each field.
fn parse_row(content: &[u8], line: usize) -> Result<Vec<f64>, LoadError> {
    content
        .split(|b| b.is_ascii_whitespace())
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(column, tok)| parse_field(tok, line, column))
        .collect()
}

fn parse_field(tok: &[u8], line: usize, column: usize) -> Result<f64, LoadError> {
    std::str::from_utf8(tok)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| LoadError::BadNumber {
            line,
            column,
            token: String::from_utf8_lossy(tok).into_owned(),
        })
}
