use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

use finance::percent::Percent;
use registry::Asset;

use crate::state::{config::Config, loan::Loan, LoanId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// The cw20 stable-value ledger the engine lends in
    pub stable_ledger: Addr,
    /// Receiver of the collateral of expired loans
    pub liquidation_beneficiary: Addr,
    /// The highest principal-to-collateral ratio accepted at creation
    pub max_ltv: Percent,
    pub min_duration_secs: u32,
    pub max_duration_secs: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Lock the asset as collateral and draw the principal
    ///
    /// The caller must own the asset and have approved the engine to
    /// transfer it.
    CreateLoan {
        asset: Asset,
        principal: Uint128,
        interest_rate: Percent,
        duration_secs: u32,
        collateral_value: Uint128,
    },
    /// Pay the principal plus the accrued interest back and reclaim the
    /// asset; only the borrower may do so
    RepayLoan { loan_id: LoanId },
    /// Hand the collateral of an expired loan over to the liquidation
    /// beneficiary; anyone may call this
    LiquidateLoan { loan_id: LoanId },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    Config(),
    Loan { loan_id: LoanId },
    /// The amount settling the loan at the query block time
    RepaymentAmount { loan_id: LoanId },
    /// All loan ids ever created for the borrower, in creation order
    BorrowerLoans { borrower: Addr },
}

pub type ConfigResponse = Config;

pub type LoanResponse = Loan;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct RepaymentResponse {
    pub amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct BorrowerLoansResponse {
    pub loan_ids: Vec<LoanId>,
}
