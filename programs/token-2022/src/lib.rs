pub mod codec;
pub mod error;
pub mod state;
pub mod ui_amount;

pub use {
    error::TokenCodecError,
    state::extension::{
        compute_mint_size, compute_token_size, Extension, ExtensionType, MintWithExtensions,
        StateWithExtensionsOwned, TokenAccountWithExtensions,
    },
};

solana_address::declare_id!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// The original token program, whose accounts carry no extensions.
pub mod legacy_token {
    solana_address::declare_id!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}

/// The Mint that represents the native token
pub mod native_mint {
    /// There are `10^9` lamports in one SOL.
    pub const DECIMALS: u8 = 9;

    // The Mint for native SOL Token accounts.
    solana_address::declare_id!("9pan9bMn5HatX4EJdBwg9VgCa7Uz5HL8N1m5D3NdXejP");

    /// Seed for the native mint's program-derived address
    pub const PROGRAM_ADDRESS_SEEDS: &[&[u8]] = &["native-mint".as_bytes(), &[255]];
}
