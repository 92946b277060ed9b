use serde_json::json;
use std::path::Path;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::database::StudentRepository;
use crate::filter::StudentFilter;
use crate::services::{ExportError, ExportService};

pub async fn handle(
    repository: StudentRepository,
    filter: StudentFilter,
    output_dir: &Path,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let export = match ExportService::new(repository).export(filter).await {
        Ok(export) => export,
        Err(ExportError::NothingToExport) => {
            return output_error(&output_format, "No student data available to export.", Some("NOTHING_TO_EXPORT"));
        }
        Err(e) => return Err(e.into()),
    };

    let path = export.write_to(output_dir)?;
    output_success(
        &output_format,
        &format!("Exported {} students to {}", export.record_count, path.display()),
        Some(json!({
            "file": path.display().to_string(),
            "records": export.record_count,
        })),
    )
}
