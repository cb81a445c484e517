//! Clients for talking to services outside the process.

pub mod client;
