use std::fmt::Display;

use cosmwasm_std::{Addr, Uint128};

/// The system of record holding the fund.
///
/// Deposits arrive from outside; the distributor only reads the balance and
/// asks for outbound transfers, any of which may fail on its own.
pub trait Ledger {
    type Error: Display;

    fn balance(&self) -> Result<Uint128, Self::Error>;

    fn transfer(&mut self, recipient: &Addr, amount: Uint128) -> Result<(), Self::Error>;
}
