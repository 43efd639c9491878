//! HTTP adapter
//!
//! `reqwest`-backed implementation of the `HttpClient` port.

pub mod client;

pub use client::ReqwestHttpClient;
