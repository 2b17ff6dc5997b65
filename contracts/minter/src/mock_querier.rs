use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, WasmQuery,
};
use std::collections::HashMap;
use tld::nft::{BalanceResponse, QueryMsg as NftQueryMsg};

/// mock_dependencies is a drop-in replacement for cosmwasm_std::testing::mock_dependencies
/// that also answers `balance_of` queries for NFT collections.
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let custom_querier: WasmMockQuerier =
        WasmMockQuerier::new(MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
    }
}

pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    nft_querier: NftQuerier,
}

#[derive(Clone, Default)]
pub struct NftQuerier {
    // collection address -> owner address -> balance
    balances: HashMap<String, HashMap<String, u64>>,
}

impl NftQuerier {
    pub fn set_balance(&mut self, collection: &str, owner: &str, balance: u64) {
        self.balances
            .entry(String::from(collection))
            .or_default()
            .insert(String::from(owner), balance);
    }

    fn balance(&self, collection: &str, owner: &str) -> Option<u64> {
        self.balances
            .get(collection)
            .map(|holders| holders.get(owner).copied().unwrap_or_default())
    }
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match from_binary(msg) {
                    Ok(NftQueryMsg::BalanceOf { owner }) => {
                        match self.nft_querier.balance(contract_addr, &owner) {
                            Some(balance) => SystemResult::Ok(ContractResult::from(to_binary(
                                &BalanceResponse { balance },
                            ))),
                            None => SystemResult::Err(SystemError::NoSuchContract {
                                addr: contract_addr.clone(),
                            }),
                        }
                    }
                    Err(e) => SystemResult::Err(SystemError::InvalidRequest {
                        error: format!("Parsing nft query: {}", e),
                        request: msg.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            nft_querier: NftQuerier::default(),
        }
    }

    pub fn set_nft_balance(&mut self, collection: &str, owner: &str, balance: u64) {
        self.nft_querier.set_balance(collection, owner, balance);
    }
}
