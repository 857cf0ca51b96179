/// Version string stamped by `build.rs` (`git describe` or `GIT_VERSION`).
pub const GIT_VERSION: &str = env!("GIT_VERSION");
