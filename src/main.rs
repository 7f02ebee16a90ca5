#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use campusly::core::config::Config;
    use leptos::prelude::get_configuration;
    use tracing_subscriber::EnvFilter;

    let _ = dotenvy::dotenv();

    // Unset variables take defaults, malformed ones stop startup
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_new(config.log_filter_or_default()).unwrap_or_else(|err| {
        eprintln!("invalid LOG_FILTER, falling back to 'info': {err}");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // [package.metadata.leptos], overridable through LEPTOS_SITE_ADDR
    let leptos_options = get_configuration(None).unwrap().leptos_options;
    let addr = leptos_options.site_addr;

    let app = site::router(leptos_options, &config);

    tracing::info!(
        %addr,
        custom_log_filter = config.has_log_filter(),
        compression = config.enable_compression,
        "campusly listening"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}

#[cfg(feature = "ssr")]
mod site {
    use axum::Router;
    use campusly::app::{App, shell};
    use campusly::core::config::Config;
    use leptos::config::LeptosOptions;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    /// Pages, the hashed wasm bundle and static assets behind one router
    pub fn router(options: LeptosOptions, config: &Config) -> Router {
        let routes = generate_route_list(App);

        // Prefer the .br/.gz files cargo-leptos emits next to the bundle
        let bundle = ServeDir::new(format!("{}/pkg", options.site_root))
            .precompressed_br()
            .precompressed_gzip();

        let router = Router::new()
            .nest_service("/pkg", bundle)
            .leptos_routes(&options, routes, {
                let options = options.clone();
                move || shell(options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(options);

        if !config.enable_compression {
            return router;
        }
        router.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `hydrate` in lib.rs
}
