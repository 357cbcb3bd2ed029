pub mod aggregate;
pub mod analysis;
pub mod clock;
pub mod journal;
pub mod store;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
