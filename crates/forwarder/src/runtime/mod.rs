//! Runtime module — process lifecycle: boot, run loop, shutdown.

pub mod boot;
pub mod run;
pub mod stop;
