use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "lingo_core=warn,lingo_cli=warn";
const VERBOSE_FILTER: &str = "lingo_core=debug,lingo_cli=debug";

/// Install the stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool, json: bool) {
    INIT.call_once(|| {
        let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}
