//! HTTP collaborators: the external volumes API, the anonymous identity
//! endpoint, and the remote customization store. All requests run through
//! `gloo-net` in the browser; off-browser stubs return errors so callers
//! exercise their fallback paths.

pub mod api;
pub mod store;
