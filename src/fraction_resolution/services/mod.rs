mod graph_resolver;
mod scope_mapper;
mod spec_classifier;

pub use graph_resolver::GraphResolver;
pub use scope_mapper::ScopeMapper;
pub use spec_classifier::{SpecClassifier, SpecDisposition};
