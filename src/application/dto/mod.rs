/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod resolve_request;
mod resolve_response;

pub use resolve_request::{
    ResolveOptions, ResolveRequest, DEFAULT_BLOCKED_COOLDOWN, DEFAULT_INPUT_ENCODING,
    DEFAULT_REGISTRY_DELAY,
};
pub use resolve_response::ResolveResponse;
