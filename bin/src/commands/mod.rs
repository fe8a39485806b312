//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod export;
pub(crate) mod sync;
