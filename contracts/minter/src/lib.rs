pub mod contract;
mod error;
pub mod handler;
pub mod msg;
pub mod state;

#[cfg(test)]
mod mock_querier;


pub use crate::error::ContractError;
