//! End-to-end tests over the full HTTP application
