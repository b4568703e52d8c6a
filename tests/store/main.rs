//! Run Store Integration Tests
//!
//! Tests for the storage contract and the filesystem implementation:
//! contract conformance across backends, on-disk format, and enumeration.

mod contract;
