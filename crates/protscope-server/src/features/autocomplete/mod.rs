//! Search-as-you-type suggestions backed by the UniProt search endpoint

pub mod queries;
pub mod routes;

pub use queries::AutocompleteQuery;
pub use routes::autocomplete_routes;
