use anyhow::Result;
use clap::Parser;

use student_registry::cli::{self, Cli};
use student_registry::config::AppConfig;

fn registry(database_url: &str, args: &[&str]) -> Cli {
    let mut argv = vec!["registry", "--json", "--database-url", database_url];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[tokio::test]
async fn seed_then_export_writes_csv_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("students.db").display());
    let output_dir = dir.path().join("exports");
    std::fs::create_dir_all(&output_dir)?;

    cli::run(registry(&database_url, &["seed"]), AppConfig::for_tests()).await?;
    // Seeding is a no-op once the registry has students
    cli::run(registry(&database_url, &["seed"]), AppConfig::for_tests()).await?;

    let output = output_dir.display().to_string();
    cli::run(
        registry(&database_url, &["export", "--status", "Graduated", "--output-dir", &output]),
        AppConfig::for_tests(),
    )
    .await?;

    let files: Vec<_> = std::fs::read_dir(&output_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    assert_eq!(files.len(), 1, "files: {:?}", files);

    let name = files[0].file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
    assert!(name.starts_with("student_data_") && name.ends_with(".csv"), "{}", name);

    let content = std::fs::read_to_string(&files[0])?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "content: {}", content);
    assert!(lines[1].contains("Prerna Hasija"));

    Ok(())
}

#[tokio::test]
async fn export_with_no_matches_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("students.db").display());
    let output = dir.path().display().to_string();

    cli::run(registry(&database_url, &["export", "--output-dir", &output]), AppConfig::for_tests()).await?;

    let csv_files = std::fs::read_dir(dir.path())?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "csv"))
        .count();
    assert_eq!(csv_files, 0);

    Ok(())
}
