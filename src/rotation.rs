//! Timestamps for record headers and rotated file names.

use std::io;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::Result;

const HEADER_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const SUFFIX_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

/// Current local time, or UTC when the local offset cannot be determined.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Timestamp written at the start of each record, e.g. `2026-01-09 14:03:27`.
///
/// This is local time when the offset can be read. The `time` crate refuses
/// to read it on Linux once the process has more than one thread; the
/// timestamp is then UTC, and nothing in the record marks it as such.
pub fn header_timestamp() -> Result<String> {
    Ok(now().format(HEADER_FORMAT)?)
}

/// Suffix for a rotated file, e.g. `2026-01-09_14-03-27` (without the leading dot).
///
/// Uses the same local-or-UTC clock as [`header_timestamp`].
pub fn rotation_suffix() -> Result<String> {
    Ok(now().format(SUFFIX_FORMAT)?)
}

/// `<path>.<ext>`, keeping non-UTF-8 bytes of `path` intact.
fn with_extra_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Pick the name a rotated file is moved to.
///
/// Normally `<base>.<suffix>`. If that already exists (two rotations within
/// the same second), `.1`, `.2`, ... is appended until a free name is found.
/// Collision handling is best-effort: a file created at the chosen name
/// between this check and the rename is overwritten on Unix.
pub fn rotated_path(base: &Path, suffix: &str) -> io::Result<PathBuf> {
    let candidate = with_extra_extension(base, suffix);
    if !candidate.try_exists()? {
        return Ok(candidate);
    }

    let mut n = 1u32;
    loop {
        let numbered = with_extra_extension(&candidate, &n.to_string());
        if !numbered.try_exists()? {
            return Ok(numbered);
        }
        n += 1;
    }
}

/// Check that `s` parses as a rotation suffix (`YYYY-MM-DD_HH-MM-SS`).
#[cfg(test)]
pub(crate) fn is_rotation_suffix(s: &str) -> bool {
    time::PrimitiveDateTime::parse(s, SUFFIX_FORMAT).is_ok()
}
