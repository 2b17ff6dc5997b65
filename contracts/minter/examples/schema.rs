use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use partner_minter::msg::{
    ConfigResponse, EligibilityResponse, ExecuteMsg, FreeClaimsResponse, InstantiateMsg,
    MigrateMsg, MintPriceResponse, OwnerResponse, PartnerNftAddressesResponse, PausedResponse,
    PriceResponse, QueryMsg,
};
use partner_minter::state::Config;
use tld::pricing::PriceTiers;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(PriceTiers), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(OwnerResponse), &out_dir);
    export_schema(&schema_for!(PausedResponse), &out_dir);
    export_schema(&schema_for!(PriceResponse), &out_dir);
    export_schema(&schema_for!(MintPriceResponse), &out_dir);
    export_schema(&schema_for!(EligibilityResponse), &out_dir);
    export_schema(&schema_for!(FreeClaimsResponse), &out_dir);
    export_schema(&schema_for!(PartnerNftAddressesResponse), &out_dir);
}
