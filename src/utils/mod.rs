//! Shared helpers for the rotorcrypt library.

pub mod converter;
