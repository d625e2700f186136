#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    portfolio::logging::init_server_logging();

    if let Err(e) = serve().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), portfolio::error::SiteError> {
    use std::path::Path;

    use axum::Router;
    use http::{header, HeaderValue};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio::{app::*, content::PROFILE, error::SiteError};
    use tower::ServiceBuilder;
    use tower_http::{services::ServeFile, set_header::SetResponseHeaderLayer, trace::TraceLayer};

    let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // the hero links the résumé by a fixed path, serve it as a download
    let cv_file = Path::new(&*leptos_options.site_root).join(PROFILE.cv_path.trim_start_matches('/'));
    let cv_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"cv.pdf\""),
        ))
        .service(ServeFile::new(cv_file));

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route_service(PROFILE.cv_path, cv_service)
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
