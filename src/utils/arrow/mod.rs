//! Arrow interop helpers

pub mod array_utils;

pub use array_utils::{downcast_array, get_column};
