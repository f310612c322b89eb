pub mod suggestions;

pub use suggestions::AutocompleteQuery;
