//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the object storage client that holds product images.

pub mod storage;
