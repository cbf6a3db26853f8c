//! Document-level tests over a fully populated record.
