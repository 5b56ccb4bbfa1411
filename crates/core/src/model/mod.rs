mod forms;
mod level;
mod role;
mod session;

pub use forms::{Credentials, FormError, Registration};
pub use level::{Level, ParseLevelError};
pub use role::{ParseRoleError, Role};
pub use session::{InvalidSessionWrite, Session};
