mod role;
mod session;

pub use role::Role;
pub use session::{Session, UserRecord};
