//! eshop Storefront Server

use std::{process, sync::Arc};

use salvo::{
    csrf::{FormFinder, bcrypt_cookie_csrf},
    prelude::*,
    session::{CookieStore, SessionHandler},
};
use tracing::{error, info};

use eshop_app::context::AppContext;

use crate::{config::ServerConfig, state::State, views::TeraViews};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod baskets;
mod config;
mod extensions;
mod observability;
mod products;
mod router;
mod security;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod views;

/// eshop storefront server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.http.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.run_migrations,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let renderer = match TeraViews::new() {
        Ok(renderer) => renderer,
        Err(view_error) => {
            error!("failed to load templates: {view_error}");

            process::exit(1);
        }
    };

    let session = match SessionHandler::builder(
        CookieStore::new(),
        config.http.session_secret.as_bytes(),
    )
    .build()
    {
        Ok(session) => session,
        Err(session_error) => {
            error!("failed to build session handler: {session_error}");

            process::exit(1);
        }
    };

    let csrf = bcrypt_cookie_csrf(FormFinder::new(views::CSRF_TOKEN_ATTRIBUTE));

    let service = router::build(State::shared(app, Arc::new(renderer)), session, csrf);

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.http.shutdown_grace();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;
}
