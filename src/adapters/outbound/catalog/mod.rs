/// Fraction catalog adapters
mod toml_catalog;

pub use toml_catalog::TomlFractionCatalog;
