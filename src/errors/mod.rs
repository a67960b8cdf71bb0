mod auth;
mod login;
mod logout;
mod refresh;
mod signup;

pub use auth::*;
pub use login::*;
pub use logout::*;
pub use refresh::*;
pub use signup::*;
