use cosmwasm_std::{coins, Addr, BankMsg, QuerierWrapper, StdError, StdResult, SubMsg, Uint128};
use cw_shares::{Ledger, Payout};

/// The chain's bank module seen as the dispatcher's ledger.
///
/// Transfers are queued as submessages replying on error, so a recipient
/// that rejects its funds only reverts its own send.
pub struct BankLedger<'a> {
    querier: QuerierWrapper<'a>,
    contract_addr: &'a Addr,
    denom: &'a str,
    pub msgs: Vec<SubMsg>,
    pub pending: Vec<(u64, Payout)>,
}

impl<'a> BankLedger<'a> {
    pub fn new(querier: QuerierWrapper<'a>, contract_addr: &'a Addr, denom: &'a str) -> Self {
        BankLedger {
            querier,
            contract_addr,
            denom,
            msgs: vec![],
            pending: vec![],
        }
    }
}

impl Ledger for BankLedger<'_> {
    type Error = StdError;

    fn balance(&self) -> StdResult<Uint128> {
        Ok(self
            .querier
            .query_balance(self.contract_addr, self.denom)?
            .amount)
    }

    fn transfer(&mut self, recipient: &Addr, amount: Uint128) -> StdResult<()> {
        let id = self.pending.len() as u64;

        self.msgs.push(SubMsg::reply_on_error(
            BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount.u128(), self.denom),
            },
            id,
        ));
        self.pending.push((
            id,
            Payout {
                addr: recipient.clone(),
                amount,
            },
        ));

        Ok(())
    }
}
