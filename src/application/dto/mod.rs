/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod report_metadata;
mod resolve_request;
mod resolve_response;
mod specs_request;

pub use output_format::OutputFormat;
pub use report_metadata::ReportMetadata;
pub use resolve_request::ResolveRequest;
pub use resolve_response::ResolveResponse;
pub use specs_request::SpecsRequest;
