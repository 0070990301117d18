// Installs a JSON tracing subscriber for embedders of the library. Safe to call more than once;
// only the first call takes effect.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in aggregated logs.
        .with_ansi(false)
        // the log shipper adds the ingestion time.
        .without_time()
        .json()
        .try_init();
}
