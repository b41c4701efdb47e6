//! User resource area (`/v1/me`)

mod client;
mod types;

pub use client::UserClient;
pub use types::{Profile, Storage};
