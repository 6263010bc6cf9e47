//! Unit tests for the quoting service

mod mocks;
