mod error;
mod memory;
mod traits;

pub mod filesystem;

pub use error::SessionError;
pub use filesystem::{FileSessionStore, SESSION_FILE};
pub use memory::MemorySessionStore;
pub use traits::SessionStore;
