pub mod denylist_store;
pub mod user_store;
pub mod user_store_err;

pub use denylist_store::DenylistStore;
pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
