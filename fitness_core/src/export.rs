//! CSV export of a plan's per-workout calorie breakdown.

use crate::{Error, Person, Result, WorkoutKind, WorkoutPlan};
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: [&str; 6] = [
    "position",
    "kind",
    "name",
    "duration_minutes",
    "intensity",
    "calories",
];

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    position: usize,
    kind: WorkoutKind,
    name: &'a str,
    duration_minutes: u32,
    intensity: i32,
    calories: String,
}

/// Write the plan breakdown for `person` to a CSV file
///
/// The file is written to a temp file in the same directory and renamed
/// into place, so an existing export is never left half-written.
/// Returns the number of rows written.
pub fn write_plan_csv(plan: &WorkoutPlan, person: &Person, path: &Path) -> Result<usize> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    let rows = plan.breakdown(person);

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp.as_file());
        writer.write_record(HEADER)?;
        for row in &rows {
            writer.serialize(CsvRow {
                position: row.position,
                kind: row.workout.kind(),
                name: row.workout.name(),
                duration_minutes: row.workout.duration_minutes(),
                intensity: row.workout.intensity(),
                calories: format!("{:.2}", row.calories),
            })?;
        }
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Exported {} workouts to {:?}", rows.len(), path);
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, Workout};

    #[test]
    fn test_export_plan() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("plan.csv");

        let plan = WorkoutPlan::new()
            .with(Workout::cardio("HIIT", 25, 9, 10.0))
            .with(Workout::flexibility("Yoga", 20, 3));
        let person = Person::new("Devin M.", 22, 72.5, 175.0, Gender::Male);

        let count = write_plan_csv(&plan, &person, &csv_path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "position,kind,name,duration_minutes,intensity,calories",
                "1,cardio,HIIT,25,9,362.50",
                "2,flexibility,Yoga,20,3,72.50",
            ]
        );
    }

    #[test]
    fn test_export_replaces_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("plan.csv");
        std::fs::write(&csv_path, "old contents that are much longer than the new export\n")
            .unwrap();

        let plan = WorkoutPlan::new().with(Workout::strength("Press", 30, 5));
        write_plan_csv(&plan, &Person::default(), &csv_path).unwrap();

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert!(!contents.contains("old contents"));
        assert_eq!(contents.lines().count(), 2);

        // No stray temp files remain
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "plan.csv")
            .collect();
        assert!(extras.is_empty(), "found extras: {:?}", extras);
    }

    #[test]
    fn test_export_empty_plan_writes_header_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("empty.csv");
        let count = write_plan_csv(&WorkoutPlan::new(), &Person::default(), &csv_path).unwrap();
        assert_eq!(count, 0);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(
            contents,
            "position,kind,name,duration_minutes,intensity,calories\n"
        );
    }
}
