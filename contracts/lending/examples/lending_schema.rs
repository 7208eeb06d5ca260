use std::{env::current_dir, fs::create_dir_all};

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use lending::msg::{
    BorrowerLoansResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, LoanResponse, QueryMsg,
    RepaymentResponse,
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
    export_schema(&schema_for!(LoanResponse), &out_dir);
    export_schema(&schema_for!(RepaymentResponse), &out_dir);
    export_schema(&schema_for!(BorrowerLoansResponse), &out_dir);
}
