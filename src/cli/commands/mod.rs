mod command_result;
pub mod migrate;

pub use command_result::*;
