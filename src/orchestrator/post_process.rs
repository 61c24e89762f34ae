//! Result handoff.
//!
//! Sequences "load" after "run or skip". No transformation happens here.

use std::path::Path;

use log::debug;

use crate::error::Result;

/// Turns a finished run directory into structured output.
pub trait ResultLoader {
    type Output;

    fn load(&self, dir: &Path, system_name: &str, units: bool) -> Result<Self::Output>;
}

impl<L: ResultLoader + ?Sized> ResultLoader for &L {
    type Output = L::Output;

    fn load(&self, dir: &Path, system_name: &str, units: bool) -> Result<Self::Output> {
        (**self).load(dir, system_name, units)
    }
}

/// Delegate to `loader`, passing its result and errors through unchanged.
pub(crate) fn hand_off<L: ResultLoader>(
    loader: &L,
    dir: &Path,
    system_name: &str,
    units: bool,
) -> Result<L::Output> {
    debug!(
        "loading results for {} from {} (units={})",
        system_name,
        dir.display(),
        units
    );
    loader.load(dir, system_name, units)
}
