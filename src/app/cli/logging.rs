use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub(super) fn init(verbose: u8) {
    let filter = match verbose {
        0 => "noetherian=warn",
        1 => "noetherian=info",
        2 => "noetherian=debug",
        _ => "noetherian=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt().with_env_filter(env_filter).with_target(false).with_writer(std::io::stderr).init();
}
