use clap::Parser;
use trivia_night::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let config = Config::parse();

    if let Err(e) = trivia_night::logging::init(&config.log_path()) {
        eprintln!("Error setting up logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = trivia_night::run(config).await {
        tracing::error!("Quiz stopped: {}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
