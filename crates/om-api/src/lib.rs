use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::connect_info::ConnectInfo,
    extract::DefaultBodyLimit,
    extract::State,
    http::header::{self, CONTENT_TYPE},
    http::{HeaderName, HeaderValue, Method, Request},
    middleware,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use governor::{
    clock::DefaultClock, middleware::NoOpMiddleware, state::keyed::DashMapStateStore, Quota,
    RateLimiter,
};
use om_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use om_common::matching::MatchingEngine;
use om_common::{profile_id, seed};
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{chat, health, matches, profiles, projects};

const SHUTDOWN_DRAIN_GRACE: std::time::Duration = std::time::Duration::from_millis(200);
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5181,http://localhost:5173,http://localhost:8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "om-api", about = "HTTP API for community organizing and collaborator matching")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3022)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "OM_CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    cors_origins: String,

    /// Seed the matching pool with the sample community profiles
    #[arg(long, env = "OM_SEED_PROFILES", default_value_t = true, action = clap::ArgAction::Set)]
    seed_profiles: bool,

    /// Maximum accepted request body in bytes
    #[arg(long, env = "OM_MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub seed_profiles: bool,
    pub max_body_bytes: usize,
}

type IpRateLimiter = RateLimiter<IpAddr, DashMapStateStore<IpAddr>, DefaultClock, NoOpMiddleware>;

#[derive(Clone)]
pub struct RateLimits {
    global: Arc<IpRateLimiter>,
    write: Arc<IpRateLimiter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub global_per_sec: u32,
    pub global_burst: u32,
    pub write_per_sec: u32,
    pub write_burst: u32,
}

impl RateLimitConfig {
    fn parse_env_u32(name: &str) -> Option<u32> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
    }

    fn from_env() -> Self {
        Self {
            global_per_sec: Self::parse_env_u32("OM_RATE_LIMIT_GLOBAL_PER_SEC").unwrap_or(20),
            global_burst: Self::parse_env_u32("OM_RATE_LIMIT_GLOBAL_BURST").unwrap_or(40),
            write_per_sec: Self::parse_env_u32("OM_RATE_LIMIT_WRITE_PER_SEC").unwrap_or(2),
            write_burst: Self::parse_env_u32("OM_RATE_LIMIT_WRITE_BURST").unwrap_or(5),
        }
    }
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "OM_CORS_ORIGINS must list explicit origins when credentials are enabled".into(),
            ));
        }

        if cli.max_body_bytes == 0 {
            return Err(ApiError::BadRequest(
                "OM_MAX_BODY_BYTES must be positive".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
            seed_profiles: cli.seed_profiles,
            max_body_bytes: cli.max_body_bytes,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 3022,
            cors_origins: vec!["http://localhost:5173".into()],
            seed_profiles: true,
            max_body_bytes: 256 * 1024,
        }
    }
}

/// The matching pool sits behind a single read-write lock: profile creation and
/// outcome recording take the write side, matching and analytics the read side.
pub type SharedEngine = Arc<RwLock<MatchingEngine>>;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub engine: SharedEngine,
    pub(crate) rate_limits: RateLimits,
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let engine = if config.seed_profiles {
            MatchingEngine::with_profiles(seed::community_profiles())
        } else {
            MatchingEngine::new()
        };

        Self {
            config,
            engine: Arc::new(RwLock::new(engine)),
            rate_limits: default_rate_limits(),
            readiness: Arc::new(AtomicBool::new(true)),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-request-id")])
        .allow_credentials(true)
}

fn build_ip_limiter(per_second: u32, burst_size: u32) -> Arc<IpRateLimiter> {
    let per_second = NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN);
    let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);

    Arc::new(RateLimiter::keyed(
        Quota::per_second(per_second).allow_burst(burst),
    ))
}

pub fn default_rate_limits() -> RateLimits {
    let cfg = RateLimitConfig::from_env();
    RateLimits {
        global: build_ip_limiter(cfg.global_per_sec, cfg.global_burst),
        write: build_ip_limiter(cfg.write_per_sec, cfg.write_burst),
    }
}

fn request_ip<B>(req: &Request<B>) -> Option<IpAddr> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
}

fn enforce_rate_limit(limiter: &IpRateLimiter, ip: Option<IpAddr>) -> Result<(), ApiError> {
    if let Some(client_ip) = ip {
        if limiter.check_key(&client_ip).is_err() {
            return Err(ApiError::TooManyRequests("rate limit exceeded".into()));
        }
    }

    Ok(())
}

async fn global_rate_limit(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_rate_limit(&state.rate_limits.global, request_ip(&req))?;
    Ok(next.run(req).await)
}

async fn write_rate_limit(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_rate_limit(&state.rate_limits.write, request_ip(&req))?;
    Ok(next.run(req).await)
}

async fn attach_request_id_context(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    Ok(error::with_request_id(request_id, next.run(req)).await)
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
            status = tracing::field::Empty,
        )
    });

    let write_limit = || middleware::from_fn_with_state(state.clone(), write_rate_limit);

    let api_routes = Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/projects/recommended", post(projects::recommended_projects))
        .route(
            "/projects/:project_id/collaborators",
            get(matches::project_collaborators),
        )
        .route("/campaigns", get(projects::list_campaigns))
        .route("/chat", post(chat::chat))
        .route("/matches", post(matches::find_matches))
        .route("/matching/analytics", get(matches::analytics))
        .route(
            "/profiles",
            post(profiles::create_profile).route_layer(write_limit()),
        )
        .route("/profiles/:profile_id", get(profiles::get_profile))
        .route(
            "/profiles/:profile_id/outcomes",
            post(profiles::record_outcome).route_layer(write_limit()),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            global_rate_limit,
        ))
        .layer(middleware::from_fn(attach_request_id_context))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid::default(),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .with_state(state)
}

/// State with the seeded sample pool, for router tests.
pub fn test_state() -> SharedState {
    Arc::new(AppState::new(AppConfig::for_tests()))
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;
    let state = Arc::new(AppState::new(config.clone()));

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state.clone());

    info!(
        %addr,
        run_id = profile_id::run_id(),
        seeded_profiles = state.engine.read().await.len(),
        "om-api listening"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    info!("om-api stopped");
    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received; draining");
    state.readiness.store(false, Ordering::SeqCst);

    // let load balancers see /readyz fail before the listener closes
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Mutex;
    use tower::ServiceExt;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn with_envs(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let _guard = ENV_GUARD.lock().unwrap();

        let previous: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(var, value)| {
                let old = env::var(var).ok();
                match value {
                    Some(v) => env::set_var(var, v),
                    None => env::remove_var(var),
                }
                (*var, old)
            })
            .collect();

        f();

        for (var, previous_value) in previous {
            match previous_value {
                Some(v) => env::set_var(var, v),
                None => env::remove_var(var),
            }
        }
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["om-api"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn rate_limit_config_respects_env_overrides() {
        with_envs(
            &[
                ("OM_RATE_LIMIT_GLOBAL_PER_SEC", Some("10")),
                ("OM_RATE_LIMIT_GLOBAL_BURST", Some("25")),
                ("OM_RATE_LIMIT_WRITE_PER_SEC", Some("0")),
                ("OM_RATE_LIMIT_WRITE_BURST", None),
            ],
            || {
                let cfg = RateLimitConfig::from_env();
                assert_eq!(
                    cfg,
                    RateLimitConfig {
                        global_per_sec: 10,
                        global_burst: 25,
                        write_per_sec: 2,
                        write_burst: 5,
                    }
                );
            },
        );
    }

    #[test]
    fn rejects_wildcard_cors_origin() {
        let result = AppConfig::from_cli(cli(&["--cors-origins", "http://a.test, *"]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn parses_origins_and_seed_flag() {
        let config = AppConfig::from_cli(cli(&[
            "--cors-origins",
            "http://a.test, ,http://b.test",
            "--seed-profiles",
            "false",
        ]))
        .unwrap();

        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.seed_profiles);
        assert!(AppState::new(config).engine.try_read().unwrap().is_empty());
    }

    #[test]
    fn rate_limiter_rejects_after_burst() {
        let limiter = build_ip_limiter(1, 2);
        let ip = Some(IpAddr::from([127, 0, 0, 1]));

        assert!(enforce_rate_limit(&limiter, ip).is_ok());
        assert!(enforce_rate_limit(&limiter, ip).is_ok());
        assert!(matches!(
            enforce_rate_limit(&limiter, ip),
            Err(ApiError::TooManyRequests(_))
        ));
        assert!(enforce_rate_limit(&limiter, None).is_ok());
    }

    #[tokio::test]
    async fn sets_request_id_and_security_headers() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
