pub mod checksum;

pub use checksum::{compute, AccountNumber, CheckKey, Computation};
pub use crate::utils::error::Result;
