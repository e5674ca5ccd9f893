//! Input/output adapters: CSV tables on disk or embedded.

pub mod datasets;
