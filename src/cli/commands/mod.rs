mod command_result;
mod context;
pub mod init;
pub mod scan;
pub mod write;

pub use command_result::*;
pub use context::RunContext;
