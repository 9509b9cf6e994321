//! Page navigation, the mock session and the authentication gate that
//! sits between them.

pub use guard::*;
pub use navigation::*;
pub use registry::*;
pub use session::*;

mod guard;
mod navigation;
mod registry;
mod session;
