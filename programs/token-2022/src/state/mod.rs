mod account_state;
mod account_type;
pub mod extension;
mod mint;
mod multisig;
mod token;

pub use {account_state::*, account_type::*, mint::*, multisig::*, token::*};
