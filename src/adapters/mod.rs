/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the JSON
/// build snapshot standing in for the host build tool, the TOML fraction
/// catalog, and the filesystem/console surfaces.
pub mod outbound;
