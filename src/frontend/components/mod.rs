//! Reusable UI components for the page layer

mod alert;
mod button;
mod footer;
mod header;
mod input;
mod post_card;

pub use alert::{Badge, BadgeTone, Notice};
pub use button::{Button, ButtonVariant};
pub use footer::Footer;
pub use header::Header;
pub use input::{EmailInput, PasswordInput, TextInput};
pub use post_card::PostCard;
