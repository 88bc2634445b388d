//! Networking for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `advisor` source traits over `gloo-net` in the
//! browser. Wire types live in `advisor::types`.

pub mod api;
