use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_stats::{config::Config, pipeline};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries summaries
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let packages = match &config.packages_path {
        Some(path) => match pipeline::load_packages(path) {
            Ok(packages) => packages,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => pipeline::sample_packages(),
    };

    for line in pipeline::process_all(&packages, config.output).into_iter().flatten() {
        println!("{}", line);
    }

    ExitCode::SUCCESS
}
