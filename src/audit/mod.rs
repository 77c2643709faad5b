/// Audit report core - Domain models and services
///
/// This layer contains the pure business logic: the audit record model,
/// the lockfile position index, and the advisory stream processor.
pub mod domain;
pub mod services;
