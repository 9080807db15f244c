#![warn(clippy::pedantic)]

//! Text dump of a 4x4 matrix for interactive debugging.

use std::fmt::Display;
use std::io::{self, Write};

use glmath_algebra::matrix::Matrix4;
use log::warn;

const BORDER: &str = "+----------+----------+----------+----------+";

/// Writes `matrix` as a bordered grid of its 16 elements in storage order, four per line.
///
/// # Errors
///
/// Returns any error raised by `sink`.
pub fn dump_to<W, T>(sink: &mut W, matrix: Option<&Matrix4<T>>) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    let Some(matrix) = matrix else {
        return writeln!(sink, "mat4_dump(): undefined matrix");
    };

    writeln!(sink, "{BORDER}")?;
    for row in matrix.values().chunks(4) {
        writeln!(
            sink,
            "| {:8.4} | {:8.4} | {:8.4} | {:8.4} |",
            row[0], row[1], row[2], row[3]
        )?;
    }
    writeln!(sink, "{BORDER}")?;
    writeln!(sink, "   trans1     trans2     trans3")?;
    writeln!(sink)
}

/// Dumps `matrix` to standard error.
pub fn dump<T>(matrix: Option<&Matrix4<T>>)
where
    T: Display,
{
    let mut stderr = io::stderr().lock();
    if let Err(e) = dump_to(&mut stderr, matrix) {
        warn!("Couldn't dump matrix to stderr: {e}");
    }
}
