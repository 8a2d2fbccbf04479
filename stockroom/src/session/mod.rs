mod command;
mod confirm;
mod coordinator;

pub use command::*;
pub use confirm::*;
pub use coordinator::*;
