pub use page_id::*;
pub use post::*;
pub use post_status::*;
pub use theme::*;

pub mod catalog;

mod page_id;
mod post;
mod post_status;
mod theme;
