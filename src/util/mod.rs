pub mod bytewise_comparator_impl;
pub mod coding;
pub mod comparator;
#[cfg(test)]
pub(crate) mod test_util;
