use crate::config::DatabaseConfig;
use crate::database::{DatabaseManager, StudentForm, StudentRepository};

/// Fresh, migrated in-memory database private to the calling test
pub async fn memory_database() -> DatabaseManager {
    let db = DatabaseManager::connect(&DatabaseConfig::in_memory())
        .await
        .expect("failed to open in-memory database");
    db.migrate().await.expect("failed to create schema");
    db
}

pub async fn memory_repository() -> StudentRepository {
    StudentRepository::new(memory_database().await.pool().clone())
}

/// Valid form with the fields the filters look at; the rest are filled in
pub fn form(student_name: &str, college_university: &str, current_status: &str) -> StudentForm {
    StudentForm::new(student_name, "2023-24", "B.Tech Computer Science", college_university, current_status)
}
