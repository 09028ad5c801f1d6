mod errors;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::InvalidInput;
pub use transaction::TransactionLine;
