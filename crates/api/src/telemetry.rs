use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "coop_api=debug,coop_db=info,tower_http=debug";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the filter. `LOG_FORMAT=json` switches the output to
/// one JSON object per line; anything else keeps the human-readable format.
pub fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let (plain_layer, json_layer) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(plain_layer)
        .with(json_layer)
        .init();
}
