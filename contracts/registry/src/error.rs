use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("NotMinter: Sender {sender} is not the minter.")]
    NotMinter { sender: String },

    #[error("InvalidName: {name}")]
    InvalidName { name: String },

    #[error("DomainTaken: {name} is already registered.")]
    DomainTaken { name: String },
}
