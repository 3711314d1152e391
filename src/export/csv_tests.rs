pub(crate) use super::*;

use std::fs;
use tempfile::tempdir;

#[test]
fn test_scientific_format() {
    assert_eq!(scientific(1.0), "1.00000000e+00");
    assert_eq!(scientific(2.5), "2.50000000e+00");
    assert_eq!(scientific(0.0), "0.00000000e+00");
    assert_eq!(scientific(-0.5), "-5.00000000e-01");
    assert_eq!(scientific(12345.6789), "1.23456789e+04");
    assert_eq!(scientific(1.0e-10), "1.00000000e-10");
}

#[test]
fn test_scientific_format_wide_exponents() {
    // Three-digit exponents are not zero-truncated
    assert_eq!(scientific(1.0e100), "1.00000000e+100");
    assert_eq!(scientific(1.0e-100), "1.00000000e-100");
}

#[test]
fn test_write_matrix_exact_content() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("matrix.csv");

    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    write_matrix(&path, "a, b", &m).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert_eq!(
        content,
        "a, b\n1.00000000e+00, 2.00000000e+00\n3.00000000e+00, 4.00000000e+00\n"
    );
}

#[test]
fn test_write_matrix_empty_writes_header_only() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("empty.csv");

    write_matrix(&path, "nothing", &Matrix::zeros(0, 0)).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert_eq!(content, "nothing\n");
}

#[test]
fn test_write_vector_exact_content() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("vector.csv");

    let v = Vector::from_slice(&[0.5, -2.0]);
    write_vector(&path, "x", &v).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert_eq!(content, "x\n5.00000000e-01\n-2.00000000e+00\n");
}

#[test]
fn test_write_columns_ragged() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("columns.csv");

    let long = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let short = Vector::from_slice(&[4.0]);
    write_columns(&path, "long, short", &[&long, &short]).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert_eq!(
        content,
        "long, short\n\
         1.00000000e+00, 4.00000000e+00\n\
         2.00000000e+00, \n\
         3.00000000e+00, \n"
    );
}

#[test]
fn test_write_columns_short_first() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("columns.csv");

    let short = Vector::from_slice(&[4.0]);
    let long = Vector::from_slice(&[1.0, 2.0]);
    write_columns(&path, "short, long", &[&short, &long]).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert_eq!(
        content,
        "short, long\n4.00000000e+00, 1.00000000e+00\n, 2.00000000e+00\n"
    );
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("out.csv");

    let v = Vector::from_slice(&[1.0]);
    write_vector(&path, "first", &v).expect("temp path is writable");
    write_vector(&path, "second", &v).expect("temp path is writable");

    let content = fs::read_to_string(&path).expect("file was just written");
    assert!(content.starts_with("second\n"));
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let dir = tempdir().expect("temp directory is creatable");
    let path = dir.path().join("no-such-subdir").join("out.csv");

    let v = Vector::from_slice(&[1.0]);
    let result = write_vector(&path, "x", &v);
    assert!(matches!(result, Err(crate::CalcularError::Io(_))));
}
