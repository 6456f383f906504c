/// `RUST_LOG` wins over `--verbose`. Logs go to stderr because stdout carries the movie list.
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    builder.filter(None, level);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.target(env_logger::Target::Stderr).init();
}
