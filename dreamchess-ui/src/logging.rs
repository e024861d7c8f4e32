//! Global logging setup.

use std::{backtrace::Backtrace, env, panic};

use tracing::{error, info, trace};
use tracing_subscriber::{
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter, Registry,
};

/// Our crate logs at debug, everything else at warn.
const DEFAULT_FILTER: &str = "warn,dreamchess_ui=debug";

/// Installs a stdout `tracing` subscriber. `RUST_LOG` directives are appended
/// to the default filter. Panics are routed through the logger as well.
pub fn init_logging() {
    let format = fmt::format().compact().with_timer(uptime()).with_line_number(true);
    let stdout_log = fmt::layer().event_format(format);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default().with(EnvFilter::new(filter)).with(stdout_log);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging already initialised: {e}");
        return;
    }
    info!("starting dreamchess-ui");

    panic::set_hook(Box::new(|info| {
        error!("{}", info);
        if env::var("RUST_BACKTRACE").map(|val| val == "1").unwrap_or(true) {
            error!("{}", Backtrace::force_capture());
        }
    }));
    trace!("installed custom panic hook");
}
