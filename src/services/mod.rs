pub mod export_service;
pub mod query_service;
pub mod seed;
pub mod student_service;

pub use export_service::{CsvExport, ExportError, ExportService};
pub use query_service::{QueryService, StudentListView};
pub use student_service::StudentService;

use crate::database::{DatabaseError, RecordError};

/// Errors surfaced by the query and mutation services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] RecordError),

    #[error("Student {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Storage(DatabaseError::Sqlx(err))
    }
}
