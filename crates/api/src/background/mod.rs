//! Background tasks.
//!
//! Work detached from the request that triggered it runs here, tracked so
//! the server can wait for it during graceful shutdown.

pub mod report_jobs;
