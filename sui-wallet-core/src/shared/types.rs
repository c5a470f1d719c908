// Basic types shared by the coin and network modules
pub type Address = String;
/// Fully-qualified Move type, e.g. `0x2::sui::SUI`
pub type CoinType = String;
pub type NetworkId = String;
/// Balances stay decimal strings end to end; they can exceed any native integer width.
pub type Balance = String;
pub type Decimals = u8;
pub type GasBudget = u64;

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
