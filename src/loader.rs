use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use catalog::{Course, CourseIndex, IndexError};
use log::{debug, info, trace};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// Derived IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-blank line with too few fields to form a record
    #[error("line {line}: expected `identifier,title[,prerequisite...]`, got {got} field(s)")]
    MissingFields { line: usize, got: usize },

    /// The record on this line carries an identifier the index cannot hash
    #[error("line {line}: {source}")]
    Unhashable { line: usize, source: IndexError },
}

/// Reads course records from the file at `path` into `index`.
pub fn load_file(path: impl AsRef<Path>, index: &mut CourseIndex) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let count = load_from(BufReader::new(file), index)?;
    info!(target: "loader", "loaded {count} courses from {}", path.display());
    Ok(count)
}

/// Feeds `index` from any line-oriented source (a file, a socket, an
/// in-memory buffer) and returns how many records went in.
///
/// One line is one record: `identifier,title,prereq_1,...,prereq_n`.
/// Fields are trimmed, blank lines are skipped, and empty prerequisite
/// fields are dropped rather than stored as empty strings. Loading is
/// strict: the first malformed line aborts with its line number, leaving
/// the records inserted so far in place.
pub fn load_from<R: BufRead>(reader: R, index: &mut CourseIndex) -> Result<usize, LoadError> {
    let mut count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        let Some(course) = parse_line(&line, lineno)? else {
            continue;
        };
        trace!(
            target: "loader",
            "line {lineno}: course {} with {} prerequisite(s)",
            course.id,
            course.prerequisites.len()
        );

        match index.insert(course) {
            Ok(Some(old)) => {
                debug!(target: "loader", "line {lineno}: replaced course {}", old.id);
                count += 1;
            }
            Ok(None) => count += 1,
            Err(source) => return Err(LoadError::Unhashable { line: lineno, source }),
        }
    }

    Ok(count)
}

/// One raw line into one record, or `None` for a blank line.
fn parse_line(line: &str, lineno: usize) -> Result<Option<Course>, LoadError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 {
        return Err(LoadError::MissingFields {
            line: lineno,
            got: fields.len(),
        });
    }

    let prerequisites: Vec<String> = fields[2..]
        .iter()
        .copied()
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Some(Course::new(fields[0], fields[1], prerequisites)))
}
