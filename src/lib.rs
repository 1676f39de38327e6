//! Crate for the `awslogs-forwarder` Lambda function
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_copy_implementations)]
#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod forwarder;
pub mod handler;
pub mod http;
pub mod logger;
pub mod logs;

/// Directory holding the deployed function code, and `forwarder.yaml`.
pub const LAMBDA_TASK_ROOT: &str = "LAMBDA_TASK_ROOT";
pub const DEFAULT_TASK_ROOT: &str = "/var/task";
