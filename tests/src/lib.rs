//! Shared test vectors for the josekdf integration tests
