//! Cross-crate tests for faultline live under `tests/`
