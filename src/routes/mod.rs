use crate::config::rate_limit::{RateLimitConfig, RateLimitRule};
use crate::handlers;
use axum::{routing, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

pub fn create_routes() -> Router {
    let rate_limit_config = RateLimitConfig::from_env();

    let submit = submit_routes(&rate_limit_config);
    let read = read_routes(&rate_limit_config);

    // Moderation links arrive from the admins' inboxes; never throttled.
    let moderation = Router::new().route("/api/moderar", routing::get(handlers::moderate::moderate));

    submit.merge(read).merge(moderation)
}

/// Public writes: wizard submissions plus the moderation intake.
fn submit_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        .route(
            "/api/v1/cadastros",
            routing::post(handlers::submission::create_submission),
        )
        .route("/api/notify", routing::post(handlers::notify::notify));

    with_optional_rate_limit(router, config.enabled, config.submit)
}

/// Public reads: rendered cards, the city directory, wizard transitions.
fn read_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        .route(
            "/api/v1/registros",
            routing::get(handlers::catalog::list_records),
        )
        .route(
            "/api/v1/cidades",
            routing::get(handlers::city::list_cities),
        )
        .route(
            "/api/v1/wizard",
            routing::post(handlers::wizard::advance_wizard),
        );

    with_optional_rate_limit(router, config.enabled, config.read)
}

fn with_optional_rate_limit(router: Router, enabled: bool, rule: RateLimitRule) -> Router {
    if !enabled {
        return router;
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rule.per_second)
        .burst_size(rule.burst_size)
        .finish()
        .expect("Invalid rate limit configuration");

    router.layer(GovernorLayer::new(governor_conf))
}
