//! Integration tests for the dusnap disk usage snapshot tool

mod snapshot_roundtrip;
