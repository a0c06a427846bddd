//! # cardlink-client
//!
//! The persistence façade the rest of the application talks to.
//!
//! [`CardRepository`] hides the two storage tiers (remote backend, local
//! cache) behind four operations that never fail: every lower-layer error is
//! converted into a degraded-but-successful outcome or an explicit
//! "not found".

pub mod policy;
pub mod repository;

pub use repository::{CardRepository, SaveReceipt, SaveStatus};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging for an embedding host.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug for the cardlink
/// crates and warn for everything else.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("cardlink_client=debug,cardlink_remote=debug,cardlink_store=info,warn")
    });

    fmt().with_env_filter(filter).with_target(true).init();
}
