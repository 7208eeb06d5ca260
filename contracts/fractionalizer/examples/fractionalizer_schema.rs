use std::{env::current_dir, fs::create_dir_all};

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use fractionalizer::msg::{
    BuyoutPriceResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RecordResponse,
    ShareBalanceResponse,
};

fn main() {
    let mut out_dir = current_dir().expect("The working directory should be accessible");
    out_dir.push("schema");
    create_dir_all(&out_dir).expect("The output directory should be writable");
    remove_schemas(&out_dir).expect("The output directory should be writable");

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);

    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(RecordResponse), &out_dir);
    export_schema(&schema_for!(BuyoutPriceResponse), &out_dir);
    export_schema(&schema_for!(ShareBalanceResponse), &out_dir);
}
