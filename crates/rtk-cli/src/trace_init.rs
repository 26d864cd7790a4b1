use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `RTK_LOG=rtk_cli=debug`.
pub const LOG_ENV: &str = "RTK_LOG";

/// Install a stderr subscriber. Logs stay out of stdout, which belongs to
/// the drill and to `convert` output.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(filter);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}
