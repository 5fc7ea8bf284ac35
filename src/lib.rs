//! Integration test support for a GitHub-compatible issue tracker's
//! "edit issue" endpoint.
//!
//! The library is thin glue: [`config`] supplies actor credentials and
//! repository coordinates, [`payload`] serializes issue content,
//! [`client`] wraps one authenticated HTTP session per actor, and
//! [`scenario`] composes them into the setup/act/assert/teardown cycle
//! the acceptance suite drives.

pub mod client;
pub mod config;
pub mod payload;
pub mod scenario;
