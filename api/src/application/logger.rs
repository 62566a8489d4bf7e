use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Install the global subscriber. `RUST_LOG` wins over `--log-filter` when set.
pub fn init_logger(args: &LogArgs) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if args.json {
        registry.with(fmt::layer().with_target(true).json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
