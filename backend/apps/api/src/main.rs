//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the
//! feature crates' own types.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::MessageCatalog;
use auth::handlers::AuthAppState;
use auth::middleware::{AuthenticatedUser, BearerAuthState, require_bearer};
use auth::models::UserId;
use auth::{
    AuthConfig, AuthError, AuthResult, BcryptHasher, PgUserStore, WalletProvisioner,
    auth_router_generic,
};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet::{
    GenerateWalletUseCase, PgWalletRepository, WalletAppState, WalletDto, WalletOwner,
    wallet_router_generic,
};

/// Bridges the auth crate's provisioning port to the wallet crate.
///
/// The auth crate only knows the `WalletProvisioner` trait; this
/// adapter runs the wallet use case and maps its errors into the auth
/// error taxonomy. The wallet DTO is the registration success payload.
struct WalletBridge {
    use_case: GenerateWalletUseCase<PgWalletRepository>,
}

impl WalletProvisioner for WalletBridge {
    type Receipt = WalletDto;

    async fn generate_wallet(&self, user_id: &UserId) -> AuthResult<WalletDto> {
        let wallet = self
            .use_case
            .execute(user_id.into_uuid())
            .await
            .map_err(|e| AuthError::Provisioning(e.to_string()))?;

        Ok(WalletDto::from(wallet))
    }
}

/// Re-expose the authenticated identity under the wallet crate's own
/// extension type, so wallet handlers stay decoupled from auth types.
async fn attach_wallet_owner(mut req: Request<Body>, next: Next) -> Response {
    if let Some(user) = req.extensions().get::<AuthenticatedUser>().copied() {
        req.extensions_mut().insert(WalletOwner {
            user_id: user.user_id,
        });
    }
    next.run(req).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,wallet=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    let user_store = PgUserStore::new(pool.clone());
    user_store.ensure_schema().await?;

    let wallet_repo = PgWalletRepository::new(pool.clone());
    wallet_repo.ensure_schema().await?;

    tracing::info!("Database schema ready");

    // Auth configuration
    let config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing secret from the environment
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        AuthConfig {
            token_secret: secret.into_bytes(),
            ..AuthConfig::default()
        }
    };
    let config = Arc::new(config);

    // Error message catalog: file-backed if configured, built-in otherwise
    let catalog = match env::var("ERROR_CATALOG_PATH") {
        Ok(path) => MessageCatalog::from_json_str(&std::fs::read_to_string(&path)?)?,
        Err(_) => MessageCatalog::default(),
    };

    let bearer_state = BearerAuthState {
        signer: Arc::new(config.signer()),
    };

    let auth_state = AuthAppState {
        store: Arc::new(user_store),
        wallet: Arc::new(WalletBridge {
            use_case: GenerateWalletUseCase::new(Arc::new(wallet_repo.clone())),
        }),
        hasher: Arc::new(BcryptHasher::new(config.hash_cost)),
        config: config.clone(),
        catalog: Arc::new(catalog),
    };

    let wallet_state = WalletAppState {
        repo: Arc::new(wallet_repo),
    };

    // Wallet routes require a bearer token; require_bearer runs first,
    // then the owner extension is attached for the wallet handlers.
    let wallet_routes = wallet_router_generic(wallet_state)
        .layer(axum::middleware::from_fn(attach_wallet_owner))
        .layer(axum::middleware::from_fn_with_state(
            bearer_state,
            require_bearer,
        ));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8080,http://127.0.0.1:8080".to_string());

    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router_generic(auth_state))
        .nest("/api/wallet", wallet_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
