use env_logger::Env;

#[tokio::main]
async fn main() {
    // Logs go to stderr so command output on stdout stays clean.
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(e) = kamusi::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
