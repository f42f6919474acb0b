// ABOUTME: Shared HTTP client with connection pooling for FoodSeer REST calls
// ABOUTME: Built once from the first ClientConfig that asks for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use crate::config::ClientConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

/// Pooled client together with the timeouts it was built with
struct SharedClient {
    client: Client,
    timeouts: (Duration, Duration),
}

static SHARED_CLIENT: OnceLock<SharedClient> = OnceLock::new();

/// Build a standalone client with the configured timeouts
///
/// # Errors
///
/// Returns an internal error if the TLS backend cannot be initialized
pub fn build_client(config: &ClientConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(concat!("food-seer/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            AppError::internal(format!(
                "{} could not build its HTTP client: {e}",
                service_names::FOOD_SEER_CLI
            ))
            .with_source(e)
        })
}

/// Process-wide pooled client
///
/// The first call builds the client from `config`. Later calls reuse it and
/// warn when their timeouts differ.
///
/// # Errors
///
/// Same as [`build_client`]; only the first call can fail
pub fn shared_client(config: &ClientConfig) -> AppResult<&'static Client> {
    let timeouts = (config.request_timeout(), config.connect_timeout());
    if let Some(shared) = SHARED_CLIENT.get() {
        if shared.timeouts != timeouts {
            warn!(
                requested = ?timeouts,
                active = ?shared.timeouts,
                "shared HTTP client already built; keeping its timeouts"
            );
        }
        return Ok(&shared.client);
    }

    let client = build_client(config)?;
    debug!(?timeouts, "built shared HTTP client");
    Ok(&SHARED_CLIENT.get_or_init(|| SharedClient { client, timeouts }).client)
}
