pub mod collection;
pub mod errors;
pub mod schemas;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
