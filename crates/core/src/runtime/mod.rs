mod session;
mod shutdown;

pub use session::ChatRuntime;
pub use shutdown::ShutdownGuard;
pub use crate::types::BotStatus;
