mod channel;
mod errors;
#[cfg(test)]
mod tests;

pub use channel::{Channel, ChannelFilter};
pub use errors::ChannelError;

pub type TransactionId = String;
pub type CustomerId = String;
pub type StoreId = String;
