pub mod data_stores;
pub mod email;
pub mod issued_token;
pub mod password;
pub mod requests;
pub mod responses;
pub mod token_claims;
pub mod token_type;
mod user;
pub mod verified_token;

pub use data_stores::*;
pub use email::*;
pub use issued_token::*;
pub use password::*;
pub use requests::*;
pub use responses::*;
pub use token_claims::*;
pub use token_type::*;
pub use user::*;
pub use verified_token::*;
