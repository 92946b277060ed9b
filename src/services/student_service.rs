use chrono::Utc;
use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::{error, info, warn};

use super::ServiceError;
use crate::database::{Student, StudentFields, StudentForm, StudentRepository};
use crate::filter::StudentFilter;
use crate::types::Operation;

/// Create, update and delete student records.
///
/// Every mutation runs in one transaction. The transaction is committed when
/// the work succeeds and explicitly rolled back otherwise, so a failed call
/// never leaves a partial write behind.
#[derive(Clone, Debug)]
pub struct StudentService {
    repository: StudentRepository,
}

impl StudentService {
    pub fn new(repository: StudentRepository) -> Self {
        Self { repository }
    }

    pub async fn find(&self, id: i64) -> Result<Student, ServiceError> {
        self.repository
            .select_one(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn count(&self) -> Result<i64, ServiceError> {
        Ok(self.repository.count(StudentFilter::all()).await?)
    }

    pub async fn create(&self, form: &StudentForm) -> Result<Student, ServiceError> {
        let fields = form.validate()?;

        let mut tx = self.repository.begin().await?;
        let result = Self::create_within(&mut tx, &fields).await;
        let student = finish(tx, result, Operation::Create).await?;

        info!("Created student {} ({})", student.id, student.student_name);
        Ok(student)
    }

    /// Unknown ids are reported as not found before the input is looked at
    pub async fn update(&self, id: i64, form: &StudentForm) -> Result<Student, ServiceError> {
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(err) => {
                self.find(id).await?;
                return Err(err.into());
            }
        };

        let mut tx = self.repository.begin().await?;
        let result = Self::update_within(&mut tx, id, &fields).await;
        let student = finish(tx, result, Operation::Update).await?;

        info!("Updated student {} ({})", student.id, student.student_name);
        Ok(student)
    }

    /// Removes the record and hands it back for confirmation messages
    pub async fn delete(&self, id: i64) -> Result<Student, ServiceError> {
        let mut tx = self.repository.begin().await?;
        let result = Self::delete_within(&mut tx, id).await;
        let student = finish(tx, result, Operation::Delete).await?;

        info!("Deleted student {} ({})", student.id, student.student_name);
        Ok(student)
    }

    async fn create_within(conn: &mut SqliteConnection, fields: &StudentFields) -> Result<Student, ServiceError> {
        Ok(StudentRepository::insert_in(conn, fields, Utc::now()).await?)
    }

    async fn update_within(
        conn: &mut SqliteConnection,
        id: i64,
        fields: &StudentFields,
    ) -> Result<Student, ServiceError> {
        StudentRepository::update_in(conn, id, fields, Utc::now())
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    async fn delete_within(conn: &mut SqliteConnection, id: i64) -> Result<Student, ServiceError> {
        StudentRepository::delete_in(conn, id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }
}

/// Commit on success, roll back on any error
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, ServiceError>,
    operation: Operation,
) -> Result<T, ServiceError> {
    match result {
        Ok(value) => {
            if let Err(e) = tx.commit().await {
                error!("Commit failed during student {}: {}", operation, e);
                return Err(e.into());
            }
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!("Rollback failed during student {}: {}", operation, rollback_err);
            }
            match &err {
                ServiceError::Storage(e) => error!("Error during student {}: {}", operation, e),
                ServiceError::NotFound(id) => warn!("Student {} not found during {}", id, operation),
                ServiceError::Validation(_) => {}
            }
            Err(err)
        }
    }
}
