//! Fraction resolution core: domain values and the pure algorithms that
//! classify scopes, collapse dependency graphs and triage artifact specs.
pub mod domain;
pub mod services;
