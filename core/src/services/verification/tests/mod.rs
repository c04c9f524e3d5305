//! Tests for the verification service

mod mocks;
