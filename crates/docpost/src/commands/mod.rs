//! CLI command implementations.

pub(crate) mod inspect;
pub(crate) mod process;

pub(crate) use inspect::{InspectArgs, InspectReport};
pub(crate) use process::ProcessArgs;
