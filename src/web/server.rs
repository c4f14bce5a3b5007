use anyhow::Context;
use axum::{
    extract::{DefaultBodyLimit, Form, Query},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use url::form_urlencoded;

use crate::cli::ServeArgs;
use crate::inspect::inspect;
use crate::render::html::{render_page, render_table};

/// Form submissions carry text only; anything bigger is abuse.
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

/// Form fields posted by the input page.
#[derive(Deserialize)]
struct InspectForm {
    #[serde(default)]
    string: String,
    /// Checkbox value; present as "on" when ticked
    #[serde(default)]
    ascii: Option<String>,
}

/// Query parameters of the analysis endpoint.
#[derive(Deserialize)]
struct AnalyzeParams {
    #[serde(default)]
    string: Option<String>,
    #[serde(default)]
    ascii: Option<String>,
}

/// The include-ASCII flag is true only for the literal checkbox value "on";
/// any other value, including absence, means false.
fn ascii_flag(raw: Option<&str>) -> bool {
    raw == Some("on")
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router() -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .context("invalid rate limiter configuration")?;

    let app = Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/api/", get(analyze_handler))
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting string-inspector web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Form submission handler: forwards the submitted string and flag to the
/// analysis endpoint so results live at a shareable URL.
async fn submit_handler(Form(form): Form<InspectForm>) -> Redirect {
    Redirect::to(&analysis_url(&form.string, form.ascii.as_deref()))
}

/// Analysis endpoint: inspect the string from the query and render the
/// report table as a full HTML page.
async fn analyze_handler(Query(params): Query<AnalyzeParams>) -> Html<String> {
    let input = params.string.as_deref().unwrap_or("");
    let include_ascii = ascii_flag(params.ascii.as_deref());

    tracing::debug!(
        input_bytes = input.len(),
        include_ascii,
        "inspection request"
    );

    let reports = inspect(input, include_ascii);
    Html(render_page(&render_table(&reports)))
}

/// Build the `/api/` URL carrying the submitted values, percent-encoded.
/// The `ascii` pair is omitted when the checkbox was not ticked, since
/// absence already means false.
fn analysis_url(string: &str, ascii: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("string", string);
    if let Some(ascii) = ascii {
        query.append_pair("ascii", ascii);
    }
    format!("/api/?{}", query.finish())
}
