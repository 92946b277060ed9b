use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::database::Student;

const CLI_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                collection_name: []
            }))?);
        }
        OutputFormat::Text => {
            println!("{}", message);
        }
    }
    Ok(())
}

/// Output students as JSON or as an aligned table
pub fn output_students(output_format: &OutputFormat, students: &[Student]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "students": students }))?);
        }
        OutputFormat::Text => {
            for line in format_student_table(students) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn format_student_table(students: &[Student]) -> Vec<String> {
    let name_width = students
        .iter()
        .map(|s| s.student_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let status_width = students
        .iter()
        .map(|s| s.current_status.chars().count())
        .max()
        .unwrap_or(0)
        .max("STATUS".len());

    let mut lines = vec![format!(
        "{:>5}  {:<name_width$}  {:<status_width$}  {:<16}  COLLEGE",
        "ID", "NAME", "STATUS", "CREATED"
    )];
    lines.extend(students.iter().map(|s| {
        format!(
            "{:>5}  {:<name_width$}  {:<status_width$}  {:<16}  {}",
            s.id,
            s.student_name,
            s.current_status,
            s.created_at.format(CLI_DATE_FORMAT).to_string(),
            s.college_university
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn table_aligns_columns() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let students = vec![Student {
            id: 12,
            student_name: "Vikram Patel".to_string(),
            batch_year: "2023-24".to_string(),
            course_program: "B.Com".to_string(),
            college_university: "Gujarat University, Ahmedabad".to_string(),
            current_status: "Job Seeking".to_string(),
            created_at: at,
            updated_at: at,
        }];

        let lines = format_student_table(&students);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "   ID  NAME          STATUS       CREATED           COLLEGE");
        assert_eq!(lines[1], "   12  Vikram Patel  Job Seeking  2024-05-01 09:30  Gujarat University, Ahmedabad");
    }
}
