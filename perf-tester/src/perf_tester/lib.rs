pub mod executor;
pub mod fortio;
