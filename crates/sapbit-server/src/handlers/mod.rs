//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod documents;
pub(crate) mod navigation;
