//! Heuristic invoice field extraction.
//!
//! Every locator works over the same normalized line set and degrades
//! to "field absent" on malformed or ambiguous text; nothing in this
//! module returns an error.

pub mod amount;
pub mod currency;
pub mod date;
pub mod debtor;
pub mod description;
pub mod invoice_number;
pub mod lines;
pub mod numeric;
pub mod patterns;
pub mod score;

mod parser;

pub use parser::HeuristicInvoiceParser;
