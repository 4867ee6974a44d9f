pub mod config;
pub mod models;
pub mod page;

pub use config::{PageCopy, SaveMessages, SocialCardConfig};
pub use models::{CardField, CardRecord, ContactKind, ContactLink, ViewMode};
pub use page::{CardPage, Layout, Notice, Panels};
