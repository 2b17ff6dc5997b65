mod tests {
    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{coins, from_binary, Addr, OwnedDeps};
    use tld::registry::{
        BalanceResponse, ContractInfoResponse, DomainResponse, ExecuteMsg, InstantiateMsg,
        MintResponse, MinterResponse, NumTokensResponse, OwnerOfResponse, OwnerResponse, QueryMsg,
    };
    use tld::utils::get_token_id_from_name;

    fn setup_registry() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            name: String::from(".satrap"),
            symbol: String::from(".SATRAP"),
            minter: Some(String::from("minter")),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
        deps
    }

    fn query_balance(deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>, owner: &str) -> u64 {
        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::BalanceOf {
                owner: String::from(owner),
            },
        )
        .unwrap();
        let balance_response: BalanceResponse = from_binary(&res).unwrap();
        balance_response.balance
    }

    #[test]
    fn proper_initialization() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            name: String::from(".satrap"),
            symbol: String::from(".SATRAP"),
            minter: None,
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
        assert_eq!(0, res.messages.len());

        // Minter defaults to the owner
        let res = query(deps.as_ref(), mock_env(), QueryMsg::Minter {}).unwrap();
        let minter_response: MinterResponse = from_binary(&res).unwrap();
        assert_eq!(minter_response.minter, Addr::unchecked("creator"));

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap();
        let owner_response: OwnerResponse = from_binary(&res).unwrap();
        assert_eq!(owner_response.owner, Addr::unchecked("creator"));
    }

    #[test] // Should confirm TLD name & symbol
    fn test_contract_info() {
        let deps = setup_registry();
        let res = query(deps.as_ref(), mock_env(), QueryMsg::ContractInfo {}).unwrap();
        let contract_info: ContractInfoResponse = from_binary(&res).unwrap();
        assert_eq!(contract_info.name, ".satrap");
        assert_eq!(contract_info.symbol, ".SATRAP");
    }

    #[test] // Minting increases the holder balance by exactly one
    fn test_mint() {
        let mut deps = setup_registry();
        assert_eq!(query_balance(&deps, "user2"), 0);

        let msg = ExecuteMsg::Mint {
            name: String::from("user2"),
            owner: String::from("user2"),
        };
        let res = execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg).unwrap();
        let mint_response: MintResponse = from_binary(&res.data.unwrap()).unwrap();
        assert_eq!(mint_response.token_id, get_token_id_from_name("user2"));
        assert_eq!(query_balance(&deps, "user2"), 1);

        let msg = ExecuteMsg::Mint {
            name: String::from("user2b"),
            owner: String::from("user2"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg).unwrap();
        assert_eq!(query_balance(&deps, "user2"), 2);

        let res = query(deps.as_ref(), mock_env(), QueryMsg::NumTokens {}).unwrap();
        let num_tokens: NumTokensResponse = from_binary(&res).unwrap();
        assert_eq!(num_tokens.count, 2);

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::OwnerOf {
                token_id: get_token_id_from_name("user2b"),
            },
        )
        .unwrap();
        let owner_of: OwnerOfResponse = from_binary(&res).unwrap();
        assert_eq!(owner_of.owner, "user2");
    }

    #[test] // Names are stored lowercased
    fn test_mint_normalizes_name() {
        let mut deps = setup_registry();
        let msg = ExecuteMsg::Mint {
            name: String::from("Alice"),
            owner: String::from("alice"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg).unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Domain {
                name: String::from("ALICE"),
            },
        )
        .unwrap();
        let domain: DomainResponse = from_binary(&res).unwrap();
        assert_eq!(
            domain,
            DomainResponse {
                name: String::from("alice"),
                token_id: String::from(
                    "9c0257114eb9399a2985f8e75dad7600c5d89fe3824ffa99ec1c3eb8bf3b0501"
                ),
                owner: Addr::unchecked("alice"),
            }
        );
    }

    #[test] // Only the minter can mint
    fn test_mint_only_minter() {
        let mut deps = setup_registry();
        let msg = ExecuteMsg::Mint {
            name: String::from("user1"),
            owner: String::from("user1"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotMinter {
                sender: String::from("creator")
            }
        );
        assert_eq!(query_balance(&deps, "user1"), 0);
    }

    #[test]
    fn test_mint_taken_name() {
        let mut deps = setup_registry();
        let msg = ExecuteMsg::Mint {
            name: String::from("user1"),
            owner: String::from("user1"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg.clone()).unwrap();

        let msg = ExecuteMsg::Mint {
            name: String::from("USER1"),
            owner: String::from("user2"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::DomainTaken {
                name: String::from("user1")
            }
        );
        assert_eq!(query_balance(&deps, "user1"), 1);
        assert_eq!(query_balance(&deps, "user2"), 0);
    }

    #[test]
    fn test_mint_invalid_name() {
        let mut deps = setup_registry();
        for name in ["", "sub.user", "two words"].iter() {
            let msg = ExecuteMsg::Mint {
                name: String::from(*name),
                owner: String::from("user1"),
            };
            let err =
                execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg).unwrap_err();
            assert_eq!(
                err,
                ContractError::InvalidName {
                    name: String::from(*name)
                }
            );
        }
        assert_eq!(query_balance(&deps, "user1"), 0);
    }

    #[test]
    fn test_change_minter() {
        let mut deps = setup_registry();

        // Not owner
        let msg = ExecuteMsg::ChangeMinter {
            minter: String::from("new_minter"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwner {
                sender: String::from("minter"),
                owner: String::from("creator"),
            }
        );

        execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap();
        let res = query(deps.as_ref(), mock_env(), QueryMsg::Minter {}).unwrap();
        let minter_response: MinterResponse = from_binary(&res).unwrap();
        assert_eq!(minter_response.minter, Addr::unchecked("new_minter"));

        // Old minter is locked out
        let msg = ExecuteMsg::Mint {
            name: String::from("user1"),
            owner: String::from("user1"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("minter", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotMinter {
                sender: String::from("minter")
            }
        );
        execute(deps.as_mut(), mock_env(), mock_info("new_minter", &[]), msg).unwrap();
        assert_eq!(query_balance(&deps, "user1"), 1);
    }

    #[test]
    fn test_transfer_ownership() {
        let mut deps = setup_registry();
        let msg = ExecuteMsg::TransferOwnership {
            owner: String::from("new_owner"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap();
        let owner_response: OwnerResponse = from_binary(&res).unwrap();
        assert_eq!(owner_response.owner, Addr::unchecked("new_owner"));

        let msg = ExecuteMsg::ChangeMinter {
            minter: String::from("creator"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwner {
                sender: String::from("creator"),
                owner: String::from("new_owner"),
            }
        );
    }
}
