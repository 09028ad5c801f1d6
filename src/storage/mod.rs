mod errors;
mod loader;
mod sales_table;
#[cfg(test)]
mod tests;

pub use loader::SalesLoader;
pub use sales_table::{LoadReport, SalesTable};
