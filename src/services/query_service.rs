use serde::Serialize;

use super::ServiceError;
use crate::database::{Student, StudentRepository};
use crate::filter::{StudentFilter, StudentOrder};

/// Everything a list page needs: the filtered rows, the filter echo, and the
/// statuses available for the status dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentListView {
    pub students: Vec<Student>,
    pub statuses: Vec<String>,
    pub search: String,
    pub status: String,
    pub total: usize,
}

impl StudentListView {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct QueryService {
    repository: StudentRepository,
}

impl QueryService {
    pub fn new(repository: StudentRepository) -> Self {
        Self { repository }
    }

    /// Filtered view, newest first, plus every status currently in the table
    pub async fn list_view(&self, filter: StudentFilter) -> Result<StudentListView, ServiceError> {
        let students = self.select(filter.clone(), StudentOrder::Newest).await?;
        let statuses = self.repository.distinct_statuses().await?;

        Ok(StudentListView {
            total: students.len(),
            students,
            statuses,
            search: filter.search().unwrap_or_default().to_string(),
            status: filter.status().unwrap_or_default().to_string(),
        })
    }

    pub async fn select(&self, filter: StudentFilter, order: StudentOrder) -> Result<Vec<Student>, ServiceError> {
        Ok(self.repository.select_any(filter, order).await?)
    }
}
