//! CSV writers.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats a value in 8-digit scientific notation, C `printf("%.8e")`
/// style: sign-prefixed exponent, zero-padded to two digits.
///
/// Rust's `{:e}` renders `2.5` as `2.5e0`; CSV consumers of these files
/// expect `2.50000000e+00`, so the exponent is rebuilt here. NaN and the
/// infinities carry no exponent and pass through as `{:e}` renders them.
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.8e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Writes a matrix to a CSV file, one matrix row per line.
///
/// The file at `path` is overwritten. The first line is the literal
/// `header` string; each subsequent line holds one row's values, comma-space
/// separated, with no trailing separator.
///
/// # Errors
///
/// Returns [`CalcularError::Io`](crate::CalcularError) if the file cannot
/// be created or written.
///
/// # Examples
///
/// ```no_run
/// use calcular::export::write_matrix;
/// use calcular::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
///     .expect("data length matches rows * cols");
/// write_matrix("out.csv", "a, b", &m).expect("path is writable");
/// ```
pub fn write_matrix<P: AsRef<Path>>(path: P, header: &str, matrix: &Matrix<f64>) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{header}")?;

    let (rows, cols) = matrix.shape();
    for i in 0..rows {
        for j in 0..cols {
            if j + 1 < cols {
                write!(file, "{}, ", scientific(matrix.get(i, j)))?;
            } else {
                writeln!(file, "{}", scientific(matrix.get(i, j)))?;
            }
        }
    }

    file.flush()?;
    info!("wrote {rows}x{cols} matrix to {}", path.display());
    Ok(())
}

/// Writes a vector to a CSV file, one value per line.
///
/// The file at `path` is overwritten; the first line is the literal
/// `header` string.
///
/// # Errors
///
/// Returns [`CalcularError::Io`](crate::CalcularError) if the file cannot
/// be created or written.
pub fn write_vector<P: AsRef<Path>>(path: P, header: &str, vector: &Vector<f64>) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{header}")?;

    for &value in vector.iter() {
        writeln!(file, "{}", scientific(value))?;
    }

    file.flush()?;
    info!("wrote {} values to {}", vector.len(), path.display());
    Ok(())
}

/// Writes vectors side by side as CSV columns. The vectors may differ in
/// length.
///
/// The file holds as many data rows as the longest vector; cells beyond a
/// given vector's length are emitted as empty fields (just the separator),
/// so shorter columns stay aligned. The last column of each row ends with a
/// line break instead of a separator.
///
/// # Errors
///
/// Returns [`CalcularError::Io`](crate::CalcularError) if the file cannot
/// be created or written.
pub fn write_columns<P: AsRef<Path>>(
    path: P,
    header: &str,
    columns: &[&Vector<f64>],
) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{header}")?;

    let n_rows = columns.iter().map(|v| v.len()).max().unwrap_or(0);
    for row in 0..n_rows {
        for (i, column) in columns.iter().enumerate() {
            if row < column.len() {
                write!(file, "{}", scientific(column[row]))?;
            }
            if i + 1 < columns.len() {
                write!(file, ", ")?;
            } else {
                writeln!(file)?;
            }
        }
    }

    file.flush()?;
    info!(
        "wrote {} columns ({n_rows} rows) to {}",
        columns.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
