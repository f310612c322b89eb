//! Feature slices
//!
//! Each feature is a vertical slice with its own `queries/` (the operation
//! itself, callable without HTTP) and `routes.rs` (the axum binding).
//!
//! - **lookup**: `POST /search`, identifier to full protein report
//! - **autocomplete**: `GET /autocomplete`, partial query to suggestions

pub mod autocomplete;
pub mod lookup;

use axum::Router;
use std::sync::Arc;

use crate::uniprot::ProteinSource;

/// Upstream handle shared by all feature routes
pub type SharedSource = Arc<dyn ProteinSource>;

/// Creates the router with all feature routes mounted at the root
pub fn router(source: SharedSource) -> Router<()> {
    Router::new()
        .merge(lookup::lookup_routes())
        .merge(autocomplete::autocomplete_routes())
        .with_state(source)
}
