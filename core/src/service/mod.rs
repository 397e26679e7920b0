pub mod carry_forward;
pub mod ledger;
pub mod mutator;
