//! Append-only text log of performed workout sessions.
//!
//! Each session is one line:
//!
//! ```text
//! [1717171717] Devin M. did Temp Jog for 30 min, calories: 266.44
//! ```

use crate::{Person, Result, Workout};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "fitness_log.txt";

/// Session sink trait for recording performed workouts
pub trait SessionSink {
    fn log_session(&mut self, person: &Person, workout: &Workout, calories: f64) -> Result<()>;
}

/// Plain-text session log
///
/// The parent directory must already exist; a log that cannot be opened
/// for appending is an IO error and nothing is written.
pub struct TextLogSink {
    path: PathBuf,
}

impl TextLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry with an explicit timestamp
    pub fn append_at(
        &mut self,
        timestamp: i64,
        person: &Person,
        workout: &Workout,
        calories: f64,
    ) -> Result<()> {
        let mut line = format_entry(timestamp, person.name(), workout, calories);
        line.push('\n');

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;
        let written = (&file).write_all(line.as_bytes());
        file.unlock()?;
        written?;

        tracing::debug!("Logged {} to {:?}", workout.name(), self.path);
        Ok(())
    }
}

impl SessionSink for TextLogSink {
    fn log_session(&mut self, person: &Person, workout: &Workout, calories: f64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.append_at(now, person, workout, calories)
    }
}

/// Format a single log line (without trailing newline)
pub fn format_entry(timestamp: i64, person_name: &str, workout: &Workout, calories: f64) -> String {
    format!(
        "[{}] {} did {} for {} min, calories: {:.2}",
        timestamp,
        person_name,
        workout.name(),
        workout.duration_minutes(),
        calories
    )
}

/// A session read back from the log
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: i64,
    pub person_name: String,
    pub workout_name: String,
    pub duration_minutes: u32,
    pub calories: f64,
}

impl LogEntry {
    /// Parse one log line; returns None if it does not match the format
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (timestamp, rest) = rest.split_once("] ")?;
        let timestamp = timestamp.parse().ok()?;

        let (head, calories) = rest.rsplit_once(" min, calories: ")?;
        let calories = calories.trim().parse().ok()?;

        let (head, duration) = head.rsplit_once(" for ")?;
        let duration_minutes = duration.parse().ok()?;

        // Person names may contain spaces, so split on the first " did "
        let (person_name, workout_name) = head.split_once(" did ")?;

        Some(Self {
            timestamp,
            person_name: person_name.to_string(),
            workout_name: workout_name.to_string(),
            duration_minutes,
            calories,
        })
    }
}

/// Read all entries from a session log
///
/// A missing file yields no entries. Lines that do not parse are skipped.
pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.exists() {
        tracing::debug!("No session log found at {:?}", path);
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut reader = BufReader::new(&file);
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;

        // Invalid UTF-8 becomes replacement characters and fails to parse below
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        match LogEntry::parse(line) {
            Some(entry) => entries.push(entry),
            None => {
                tracing::warn!("Skipping malformed log line {}: {:?}", line_num, line);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Gender};

    fn devin() -> Person {
        Person::new("Devin M.", 22, 72.5, 175.0, Gender::Male)
    }

    #[test]
    fn test_format_entry() {
        let hiit = Workout::cardio("HIIT", 25, 9, 10.0);
        let line = format_entry(1_700_000_000, "Devin M.", &hiit, 362.5);
        assert_eq!(
            line,
            "[1700000000] Devin M. did HIIT for 25 min, calories: 362.50"
        );
    }

    #[test]
    fn test_append_and_read_back() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join(DEFAULT_LOG_FILE);

        let mut sink = TextLogSink::new(&log_path);
        let person = devin();
        let hiit = Workout::cardio("HIIT", 25, 9, 10.0);
        let yoga = Workout::flexibility("Yoga", 20, 3);

        sink.append_at(100, &person, &hiit, hiit.estimate_calories(&person))
            .unwrap();
        sink.log_session(&person, &yoga, yoga.estimate_calories(&person))
            .unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("[100] Devin M. did HIIT for 25 min, calories: 362.50\n"));

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, 100);
        assert_eq!(entries[0].person_name, "Devin M.");
        assert_eq!(entries[1].workout_name, "Yoga");
        assert_eq!(entries[1].duration_minutes, 20);
        assert!((entries[1].calories - 72.5).abs() < 0.01);
        assert!(entries[1].timestamp > 1_600_000_000);
    }

    #[test]
    fn test_unopenable_path_is_io_error_without_content() {
        let temp_dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened for appending
        let mut sink = TextLogSink::new(temp_dir.path());
        let result = sink.log_session(&devin(), &Workout::strength("Press", 10, 5), 50.0);
        assert!(matches!(result, Err(Error::Io(_))));

        // A missing parent directory is not created
        let nested = temp_dir.path().join("missing").join("log.txt");
        let mut sink = TextLogSink::new(&nested);
        let result = sink.log_session(&devin(), &Workout::strength("Press", 10, 5), 50.0);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!nested.exists());
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[test]
    fn test_read_missing_log() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = read_entries(&temp_dir.path().join("nope.txt")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("log.txt");
        std::fs::write(
            &log_path,
            "garbage\n\n[12] Ann did Swim for 40 min, calories: 300.00\n[x] Bob did Run for 1 min, calories: 1.00\n",
        )
        .unwrap();

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].person_name, "Ann");
    }

    #[test]
    fn test_invalid_utf8_lines_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("log.txt");
        let mut bytes = b"[7] Ann did Row for 20 min, calories: 150.00\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe garbage\n");
        bytes.extend_from_slice(b"[8] Ann did Swim for 30 min, calories: 210.00\r\n");
        std::fs::write(&log_path, bytes).unwrap();

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].workout_name, "Row");
        assert_eq!(entries[1].workout_name, "Swim");
        assert_eq!(entries[1].calories, 210.0);
    }

    #[test]
    fn test_parse_names_with_separators() {
        let entry =
            LogEntry::parse("[5] Jo did it did Run for fun for 12 min, calories: 10.25").unwrap();
        assert_eq!(entry.person_name, "Jo");
        assert_eq!(entry.workout_name, "it did Run for fun");
        assert_eq!(entry.duration_minutes, 12);
        assert_eq!(entry.calories, 10.25);
    }
}
