use crate::bonus_by_profit::BonusByProfit;
use crate::error::PolicyError;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusPolicy, RevenuePolicy};
use configuration::Policies;
use core_types::{BonusPolicyId, RevenuePolicyId};

/// Creates the revenue policy named by `id`.
pub fn create_revenue_policy(id: RevenuePolicyId) -> Box<dyn RevenuePolicy> {
    // A complete match: adding a RevenuePolicyId without handling it here won't compile.
    match id {
        RevenuePolicyId::SimpleRevenue => Box::new(SimpleRevenue),
    }
}

/// Creates the bonus policy selected in `policies`, with its configured parameters.
pub fn create_bonus_policy(policies: &Policies) -> Result<Box<dyn BonusPolicy>, PolicyError> {
    match policies.bonus {
        BonusPolicyId::ByProfit => {
            let params = policies.bonus_by_profit.clone();
            tracing::debug!(?params, "Creating BonusByProfit policy.");
            Ok(Box::new(BonusByProfit::new(params)?))
        }
    }
}
