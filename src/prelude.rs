pub use crate::config::Config;
pub use crate::result::{AppError, Result};
pub use crate::AppState;
