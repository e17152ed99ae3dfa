// Domain-driven module structure for the Logdrop Forwarder.

// Core infrastructure
pub mod parser;
pub mod sink;

// Domain modules
pub mod conf;
pub mod dispatch;
pub mod poll;
pub mod runtime;
