//! Marketstall API library.
//!
//! The HTTP service as a library, so the router can be driven in tests
//! against an in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
