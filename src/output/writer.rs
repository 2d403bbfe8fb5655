//! CSV file writer
//!
//! Minimal RFC4180-style output: fields containing the delimiter, a quote,
//! or a line break are wrapped in double quotes with embedded quotes doubled.
//! Everything else is written verbatim.

use crate::error::{Error, Result};
use crate::model::User;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column order of the export
pub const CSV_HEADER: [&str; 4] = ["firstName", "lastName", "email", "status"];

/// CSV writer over any byte sink
pub struct CsvWriter<W: Write> {
    out: W,
    rows_written: usize,
}

impl<W: Write> CsvWriter<W> {
    /// Create a new writer
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows_written: 0,
        }
    }

    /// Write the fixed header row
    pub fn write_header(&mut self) -> Result<()> {
        self.write_record(CSV_HEADER)
    }

    /// Write one user row. Missing profile fields become empty cells.
    pub fn write_user(&mut self, user: &User) -> Result<()> {
        self.write_record([
            user.profile.first_name.as_deref().unwrap_or(""),
            user.profile.last_name.as_deref().unwrap_or(""),
            user.profile.email.as_deref().unwrap_or(""),
            user.status.as_deref().unwrap_or(""),
        ])?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the sink and return the number of data rows written
    pub fn finish(mut self) -> Result<usize> {
        self.out.flush()?;
        Ok(self.rows_written)
    }

    fn write_record(&mut self, fields: [&str; 4]) -> Result<()> {
        let mut first = true;
        for field in fields {
            if !first {
                self.out.write_all(b",")?;
            }
            first = false;
            self.out.write_all(escape_field(field).as_bytes())?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Quote a field when it contains the delimiter, a quote, or a line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write the header plus one row per user to `path`, truncating any existing
/// file. Returns the number of data rows written.
pub fn write_users<'a>(
    path: &Path,
    users: impl IntoIterator<Item = &'a User>,
) -> Result<usize> {
    let file = File::create(path).map_err(|e| {
        Error::output(format!("failed to create {}: {e}", path.display()))
    })?;

    let mut writer = CsvWriter::new(BufWriter::new(file));
    writer.write_header()?;
    for user in users {
        writer.write_user(user)?;
    }
    writer.finish()
}
