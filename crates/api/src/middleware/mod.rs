/// Identity of the calling user, as asserted by the upstream identity provider
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
