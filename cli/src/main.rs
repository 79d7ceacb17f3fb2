//! Token engine demo driver
//!
//! Walks one token through its whole life against the configured file
//! stores: sign, validate, refresh, revoke, validate again.

mod logging;

use anyhow::Context;
use tracing::info;

use token_core::{
    encode_segment, sign, signing_input, Header, Payload, TokenService, TokenServiceConfig,
};
use token_infra::open_stores;
use token_shared::config::loader::load_config;

fn main() -> anyhow::Result<()> {
    let config = load_config(None)
        .map_err(anyhow::Error::msg)
        .context("loading configuration")?;
    logging::init(&config.logging)?;

    info!(environment = %config.environment, "Starting token demo");

    let stores = open_stores(&config.storage);
    let service = TokenService::new(
        stores.revocations,
        stores.refresh_tokens,
        TokenServiceConfig::from(&config.auth),
    );
    let secret = config.auth.secret.as_str();

    let header = Header::hs256();
    println!("Encoded Header: {}", encode_segment(&header)?);

    let payload = Payload::issued_now(
        "1234567890",
        "John Doe",
        service.config().access_token_ttl_seconds,
    );
    let unsigned = signing_input(&header, &payload)?;
    println!("Unsigned JWT: {unsigned}");

    let signature = sign(&unsigned, secret.as_bytes())?;
    let token = format!("{unsigned}.{signature}");
    println!("JWT Token: {token}");

    match service.validate(&token, secret) {
        Ok(claims) => println!("\nValid token for subject {}", claims.sub),
        Err(e) => println!("\nError validating token: {e}"),
    }

    let refresh_token = service
        .issue_default_refresh_token(&payload.sub)
        .context("issuing refresh token")?;
    println!("\nRefresh Token: {refresh_token}");

    let refreshed = service
        .refresh_access_token(&refresh_token, secret)
        .context("refreshing access token")?;
    println!("Refreshed JWT: {refreshed}");

    service.revoke(&token).context("revoking token")?;
    match service.validate(&token, secret) {
        Ok(_) => println!("\nRevoked token still validates"),
        Err(e) => println!("\nAfter revocation: {e}"),
    }

    Ok(())
}
