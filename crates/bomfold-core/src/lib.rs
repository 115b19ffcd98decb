//! Core data types for bomfold.
//!
//! This crate models a build's declarative dependency manifest: configuration
//! flags, dependency declarations (including platform BOMs) and plugin
//! activations. It validates raw entries into a [`manifest::Manifest`],
//! resolves inherited versions into a [`resolve::ResolvedManifest`] and
//! serializes the result in declaration order.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod dependency;
pub mod entry;
pub mod error;
pub mod flag;
pub mod manifest;
pub mod plugin;
pub mod properties;
pub mod resolve;
pub mod source;
