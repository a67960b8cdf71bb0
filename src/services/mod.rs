pub mod auth;
pub mod auth_session;
pub mod fingerprint;
pub mod hashmap_denylist_store;
pub mod hashmap_user_store;
pub mod password_hasher;
pub mod token_codec;

pub use auth::*;
pub use auth_session::*;
pub use fingerprint::*;
pub use hashmap_denylist_store::*;
pub use hashmap_user_store::*;
pub use password_hasher::*;
pub use token_codec::*;
