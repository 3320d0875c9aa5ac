//! Endpoint selector tests
