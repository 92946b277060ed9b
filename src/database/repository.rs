use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::database::manager::DatabaseError;
use crate::database::models::Student;
use crate::database::query_builder::QueryBuilder;
use crate::database::record::StudentFields;
use crate::filter::{StudentFilter, StudentOrder};

/// Data access for the `students` table.
///
/// Reads go straight to the pool. Writes take a connection borrowed from a
/// transaction opened with [`StudentRepository::begin`], so the caller decides
/// whether to commit or roll back.
#[derive(Clone, Debug)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn select_any(
        &self,
        filter: StudentFilter,
        order: StudentOrder,
    ) -> Result<Vec<Student>, DatabaseError> {
        QueryBuilder::<Student>::new(Student::TABLE)
            .filter(filter)
            .order(order)
            .select_all(&self.pool)
            .await
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<Student>, DatabaseError> {
        let student = sqlx::query_as::<_, Student>(r#"SELECT * FROM "students" WHERE "id" = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    pub async fn count(&self, filter: StudentFilter) -> Result<i64, DatabaseError> {
        QueryBuilder::<Student>::new(Student::TABLE)
            .filter(filter)
            .count(&self.pool)
            .await
    }

    /// Distinct non-empty statuses across the whole table, sorted
    pub async fn distinct_statuses(&self) -> Result<Vec<String>, DatabaseError> {
        let statuses = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT "current_status" FROM "students"
               WHERE "current_status" <> ''
               ORDER BY "current_status""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(statuses)
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, DatabaseError> {
        Ok(self.pool.begin().await?)
    }

    pub async fn insert_in(
        conn: &mut SqliteConnection,
        fields: &StudentFields,
        now: DateTime<Utc>,
    ) -> Result<Student, DatabaseError> {
        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO "students"
               ("student_name", "batch_year", "course_program", "college_university", "current_status", "created_at", "updated_at")
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(fields.student_name())
        .bind(fields.batch_year())
        .bind(fields.course_program())
        .bind(fields.college_university())
        .bind(fields.current_status())
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await?;
        Ok(student)
    }

    /// Overwrite the five text fields and stamp `updated_at`; `None` when the id is unknown.
    ///
    /// The stamp never moves backwards, even if the clock does. Must be the first
    /// statement of its transaction: SQLite cannot wait out a read-to-write lock
    /// upgrade, so a prior read turns contention into SQLITE_BUSY.
    pub async fn update_in(
        conn: &mut SqliteConnection,
        id: i64,
        fields: &StudentFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Student>, DatabaseError> {
        let student = sqlx::query_as::<_, Student>(
            r#"UPDATE "students" SET
                 "student_name" = ?, "batch_year" = ?, "course_program" = ?,
                 "college_university" = ?, "current_status" = ?, "updated_at" = MAX(?, "updated_at")
               WHERE "id" = ?
               RETURNING *"#,
        )
        .bind(fields.student_name())
        .bind(fields.batch_year())
        .bind(fields.course_program())
        .bind(fields.college_university())
        .bind(fields.current_status())
        .bind(updated_at)
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(student)
    }

    /// Remove the row and hand it back; `None` when the id is unknown
    pub async fn delete_in(conn: &mut SqliteConnection, id: i64) -> Result<Option<Student>, DatabaseError> {
        let student = sqlx::query_as::<_, Student>(r#"DELETE FROM "students" WHERE "id" = ? RETURNING *"#)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(student)
    }
}
