use crate::cli::utils::{output_empty_collection, output_students};
use crate::cli::OutputFormat;
use crate::database::StudentRepository;
use crate::filter::StudentFilter;
use crate::services::QueryService;

pub async fn handle(
    repository: StudentRepository,
    filter: StudentFilter,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let view = QueryService::new(repository).list_view(filter).await?;

    if view.students.is_empty() {
        return output_empty_collection(&output_format, "students", "No students match the current filter");
    }

    output_students(&output_format, &view.students)
}
