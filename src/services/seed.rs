use tracing::info;

use super::{ServiceError, StudentService};
use crate::database::StudentForm;

/// The five demo students loaded into an empty registry
pub fn sample_students() -> Vec<StudentForm> {
    vec![
        StudentForm::new(
            "Ishant Bhoyar",
            "2023-24",
            "B.Tech Computer Science",
            "Sitare University (SRMU) Lucknow, Uttar Pradesh",
            "Currently Studying",
        ),
        StudentForm::new("Prerna Hasija", "2023-24", "MBA Marketing", "Delhi University, New Delhi", "Graduated"),
        StudentForm::new("Rahul Sharma", "2023-24", "BCA", "Mumbai University, Maharashtra", "Employed"),
        StudentForm::new(
            "Anita Singh",
            "2023-24",
            "B.Tech Information Technology",
            "IIT Delhi, New Delhi",
            "Higher Studies",
        ),
        StudentForm::new("Vikram Patel", "2023-24", "B.Com", "Gujarat University, Ahmedabad", "Job Seeking"),
    ]
}

/// Insert the sample students when the table is empty; returns how many were added
pub async fn seed_if_empty(students: &StudentService) -> Result<usize, ServiceError> {
    if students.count().await? > 0 {
        return Ok(0);
    }

    let samples = sample_students();
    for form in &samples {
        students.create(form).await?;
    }

    info!("Sample student data added successfully ({} records)", samples.len());
    Ok(samples.len())
}
