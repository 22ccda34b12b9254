/*!
 * Program Loader
 * Parse process descriptions from program files
 */

use crate::core::errors::LoadError;
use crate::core::types::{Priority, QueueId, Tick};
use crate::process::Process;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Processes parsed from one program file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// File name of the program
    pub name: String,
    pub processes: Vec<Process>,
}

/// Read and parse the program file at `path`
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_program(name, &text)
}

/// Parse program text: one `name; burst; arrival; queue; priority` per line
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. A trailing `;` on any token is ignored. Arrival times may be
/// negative; they are lifted so the earliest arrival is 0.
pub fn parse_program(name: impl Into<String>, text: &str) -> Result<Program, LoadError> {
    let mut rows = Vec::new();
    let mut names = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = parse_line(line, trimmed)?;
        if !names.insert(row.name) {
            return Err(LoadError::DuplicateName {
                line,
                name: row.name.to_string(),
            });
        }
        rows.push(row);
    }

    let floor = rows.iter().map(|row| row.arrival).min().unwrap_or(0).min(0);
    let processes = rows
        .into_iter()
        .map(|row| {
            Process::new(
                row.name,
                row.burst,
                row.arrival.abs_diff(floor),
                row.queue,
                row.priority,
            )
            .map_err(|source| LoadError::InvalidProcess {
                line: row.line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Program {
        name: name.into(),
        processes,
    })
}

/// Fields of one process line, arrival still signed
struct Row<'a> {
    line: usize,
    name: &'a str,
    burst: Tick,
    arrival: i64,
    queue: QueueId,
    priority: Priority,
}

fn parse_line(line: usize, text: &str) -> Result<Row<'_>, LoadError> {
    let fields: Vec<&str> = text
        .split_whitespace()
        .map(|token| token.trim_end_matches(';'))
        .filter(|token| !token.is_empty())
        .collect();

    let &[name, burst, arrival, queue, priority] = fields.as_slice() else {
        return Err(LoadError::MissingFields {
            line,
            found: fields.len(),
        });
    };

    Ok(Row {
        line,
        name,
        burst: parse_field(line, "burst time", burst)?,
        arrival: parse_field(line, "arrival time", arrival)?,
        queue: parse_field(line, "queue", queue)?,
        priority: parse_field(line, "priority", priority)?,
    })
}

fn parse_field<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}
