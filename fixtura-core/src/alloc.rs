//! Fallible reservation for buffers sized by the caller.
//!
//! Requests that pass range and edge-bound validation can still ask for more
//! memory than the address space holds; those surface as
//! [`FixtureError::AllocationFailed`] rather than a capacity-overflow panic.

use std::{collections::HashSet, hash::Hash};

use crate::error::{FixtureError, Result};

const fn failed(requested: usize) -> FixtureError {
    FixtureError::AllocationFailed { requested }
}

/// Returns an empty vector with room for `len` elements.
pub(crate) fn vec_for<T>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| failed(len))?;
    Ok(buffer)
}

/// Returns an empty set with room for `len` elements.
pub(crate) fn set_for<T: Eq + Hash>(len: usize) -> Result<HashSet<T>> {
    let mut set = HashSet::new();
    set.try_reserve(len).map_err(|_| failed(len))?;
    Ok(set)
}

/// Returns an empty string with room for `len` bytes.
pub(crate) fn string_for(len: usize) -> Result<String> {
    let mut text = String::new();
    text.try_reserve_exact(len).map_err(|_| failed(len))?;
    Ok(text)
}
