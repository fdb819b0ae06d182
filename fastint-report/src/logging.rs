//! Diagnostic logging setup

use std::env::{self, VarError};

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "FASTINT_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        Self {
            filter: env::var(LOG_ENV),
        }
    }
}

/// Install a stderr subscriber if `FASTINT_LOG` is set.
///
/// Standard output stays reserved for the report. A malformed directive
/// is reported on stderr and leaves logging off.
pub fn init_tracing() -> anyhow::Result<()> {
    let cfg = LoggerConfig::from_env();
    let filter = match cfg.filter {
        Ok(filter) => match EnvFilter::try_new(&filter) {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("warning: ignoring {}={:?}: {}", LOG_ENV, filter, err);
                return Ok(());
            }
        },
        Err(_) => return Ok(()),
    };

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::Registry::default()
        .with(filter)
        .with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
