mod admin;
mod files;
mod login;

pub use admin::Admin;
pub use files::Files;
pub use login::Login;
