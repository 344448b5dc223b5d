//! Command implementations, invoked by thin wrapper binaries.

pub mod check;
