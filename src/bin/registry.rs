use clap::Parser;
use student_registry::cli::Cli;
use student_registry::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    student_registry::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = student_registry::cli::run(cli, AppConfig::from_env()).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
