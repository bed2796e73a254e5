/// Domain layer - Package index and dependency graph models plus the pure
/// services that build them. Nothing in here performs I/O on its own.
pub mod domain;
pub mod services;
