pub mod token;

pub use token::{moderation_link, sign_token, verify_token};
