// Roster
// Copyright 2026 The Roster Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service that stores employees, students and super heroes.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use axum::http::HeaderValue;
use log::info;
use roster_core::db::Db;
use roster_core::env::get_optional_var;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub(crate) mod db;
pub(crate) mod driver;
use driver::Driver;
pub(crate) mod model;
pub(crate) mod rest;
use rest::app;

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Configuration of the HTTP server.
#[derive(Debug, PartialEq)]
pub struct ServiceOptions {
    /// Port to listen on.
    pub port: u16,

    /// Origin allowed to issue cross-origin requests, if any.
    pub cors_origin: Option<String>,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, cors_origin: None }
    }
}

impl ServiceOptions {
    /// Creates a set of options from environment variables whose name is prefixed with the given
    /// `prefix`.
    ///
    /// This will use variables such as `<prefix>_PORT` and `<prefix>_CORS_ORIGIN`, all of which
    /// are optional.
    pub fn from_env(prefix: &str) -> Result<ServiceOptions, String> {
        Ok(ServiceOptions {
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT),
            cors_origin: get_optional_var::<String>(prefix, "CORS_ORIGIN")?,
        })
    }
}

/// Prepares the database and serves the application on `bind_addr` until the server stops.
async fn run(
    bind_addr: SocketAddr,
    db: Arc<dyn Db + Send + Sync>,
    opts: &ServiceOptions,
) -> Result<(), Box<dyn Error>> {
    db::init_schema(&mut db.ex().await?).await?;

    let mut app = app(Driver::new(db));
    if let Some(origin) = opts.cors_origin.as_ref() {
        let origin = HeaderValue::from_str(origin)
            .map_err(|e| format!("Invalid CORS origin '{}': {}", origin, e))?;
        info!("Allowing cross-origin requests from {:?}", origin);
        app = app.layer(
            CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any),
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// The database is closed before returning, whether the server fails to start or stops.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Arc<dyn Db + Send + Sync>,
    opts: &ServiceOptions,
) -> Result<(), Box<dyn Error>> {
    let result = run(bind_addr.into(), db.clone(), opts).await;
    db.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_service_options_from_env_defaults() {
        temp_env::with_vars_unset(["ROSTER_TEST_PORT", "ROSTER_TEST_CORS_ORIGIN"], || {
            let opts = ServiceOptions::from_env("ROSTER_TEST").unwrap();
            assert_eq!(ServiceOptions::default(), opts);
        });
    }

    #[test]
    fn test_service_options_from_env_all_present() {
        temp_env::with_vars(
            [
                ("ROSTER_TEST_PORT", Some("8080")),
                ("ROSTER_TEST_CORS_ORIGIN", Some("http://localhost:4200")),
            ],
            || {
                let opts = ServiceOptions::from_env("ROSTER_TEST").unwrap();
                assert_eq!(
                    ServiceOptions {
                        port: 8080,
                        cors_origin: Some("http://localhost:4200".to_owned()),
                    },
                    opts
                );
            },
        );
    }

    #[test]
    fn test_service_options_from_env_bad_port() {
        temp_env::with_vars([("ROSTER_TEST_PORT", Some("http"))], || {
            let err = ServiceOptions::from_env("ROSTER_TEST").unwrap_err();
            assert!(err.contains("ROSTER_TEST_PORT"), "Unexpected error: {}", err);
        });
    }

    #[tokio::test]
    async fn test_serve_rejects_bad_cors_origin() {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(roster_core::db::sqlite::testutils::setup().await);
        let opts = ServiceOptions { port: 0, cors_origin: Some("bad\norigin".to_owned()) };

        let err = serve((Ipv4Addr::LOCALHOST, 0), db, &opts).await.unwrap_err();
        assert!(err.to_string().contains("Invalid CORS origin"), "Unexpected error: {}", err);
    }
}
