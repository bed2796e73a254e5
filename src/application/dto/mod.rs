/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod layout_engine;
mod output_format;
mod visualize_request;
mod visualize_response;

pub use layout_engine::LayoutEngine;
pub use output_format::OutputFormat;
pub use visualize_request::VisualizeRequest;
pub use visualize_response::VisualizeResponse;
