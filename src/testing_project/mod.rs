//! Declarative model of the generated testing project and the fraction
//! expectations derived from it.
//!
//! A [`TestingProject`] is built once per scenario, validated on
//! construction and never mutated. Scenario identity crosses process
//! boundaries as a colon-delimited record (see [`TestingProject::serialize`]).
mod matrix;
mod model;
mod variants;

pub use matrix::all_valid_projects;
pub use model::TestingProject;
pub use variants::{
    AdditionalDependency, AdditionalFraction, Autodetection, Dependencies, IncludedTechnology,
    Packaging,
};
