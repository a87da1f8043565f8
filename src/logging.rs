use tracing::metadata::Level;
use tracing_subscriber::filter::EnvFilter;

/// Map the number of `-v` flags to a log level.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Setup logging
///
/// `RUST_LOG` wins when set and valid; otherwise logs from this crate are
/// shown at `level`. Logs go to stderr so stdout stays clean for `--show`.
///
/// # Errors
/// - If the global tracing subscriber cannot be installed.
pub fn setup(level: Level) -> anyhow::Result<()> {
    let default_directive = format!(
        "off,version_bump={}",
        level.to_string().to_ascii_lowercase()
    );

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directive) => match EnvFilter::try_new(&directive) {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("invalid log filter: {err}");
                eprintln!("falling back to default logging");
                EnvFilter::try_new(&default_directive)?
            }
        },
        Err(_) => EnvFilter::try_new(&default_directive)?,
    };

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
    Ok(())
}
