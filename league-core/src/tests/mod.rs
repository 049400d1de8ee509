//! Crate-internal behaviour tests sharing the `test_support` fixtures.
