/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the build through these traits:
/// the host build tool (graph, projects, native resolution), the fraction
/// catalog, and the console/filesystem surfaces.
pub mod outbound;
