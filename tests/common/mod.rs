//! Shared test utilities for git-sift
//!
//! Integration tests run against real git repositories created in temporary
//! directories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
