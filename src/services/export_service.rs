use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::database::{DatabaseError, Student, StudentRepository};
use crate::filter::{StudentFilter, StudentOrder};

/// Column headers, in export order
pub const EXPORT_HEADERS: [&str; 8] = [
    "ID",
    "Student Name",
    "Batch Year",
    "Course/Program",
    "College/University",
    "Current Status",
    "Created Date",
    "Last Updated",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum ExportError {
    /// The filtered view is empty; not a failure, there is just nothing to write
    #[error("No student data available to export.")]
    NothingToExport,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

/// A rendered CSV document and the name it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub record_count: usize,
}

impl CsvExport {
    /// Write the document into `dir` under its own filename
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

#[derive(Clone, Debug)]
pub struct ExportService {
    repository: StudentRepository,
}

impl ExportService {
    pub fn new(repository: StudentRepository) -> Self {
        Self { repository }
    }

    pub async fn export(&self, filter: StudentFilter) -> Result<CsvExport, ExportError> {
        self.export_at(filter, Local::now()).await
    }

    /// Export the filtered view (by ascending id), stamping the filename with `generated_at`
    pub async fn export_at(
        &self,
        filter: StudentFilter,
        generated_at: DateTime<Local>,
    ) -> Result<CsvExport, ExportError> {
        let students = self.repository.select_any(filter, StudentOrder::IdAscending).await?;
        if students.is_empty() {
            warn!("Export requested but no students match the current filter");
            return Err(ExportError::NothingToExport);
        }

        let export = CsvExport {
            filename: export_filename(&generated_at),
            content: render_csv(&students)?,
            record_count: students.len(),
        };
        info!("Exported {} students to {}", export.record_count, export.filename);
        Ok(export)
    }
}

pub fn export_filename(generated_at: &DateTime<Local>) -> String {
    format!("student_data_{}.csv", generated_at.format(FILENAME_TIMESTAMP_FORMAT))
}

/// Header row followed by one row per student
pub fn render_csv(students: &[Student]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;

    for student in students {
        writer.write_record([
            student.id.to_string(),
            student.student_name.clone(),
            student.batch_year.clone(),
            student.course_program.clone(),
            student.college_university.clone(),
            student.current_status.clone(),
            student.created_at.format(DATE_FORMAT).to_string(),
            student.updated_at.format(DATE_FORMAT).to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
