pub mod nft;
pub mod pricing;
pub mod registry;
pub mod utils;
