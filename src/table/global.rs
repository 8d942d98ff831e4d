//! The process-wide style table.
//!
//! The table is set at most once, either explicitly through [`install`] or
//! implicitly with the built-in styles on the first [`style_table`] call.
//! After that, reads are lock-free.

use log::debug;
use once_cell::sync::OnceCell;

use crate::style::StyleError;

use super::StyleTokenTable;

static INSTALLED: OnceCell<StyleTokenTable> = OnceCell::new();

/// Makes `table` the process-wide style table.
///
/// Must run before the first [`style_table`] call. Fails with
/// [`StyleError::AlreadyInstalled`] once a table is in place, including the
/// built-in one installed by an earlier read.
pub fn install(table: StyleTokenTable) -> Result<(), StyleError> {
    INSTALLED
        .set(table)
        .map_err(|_| StyleError::AlreadyInstalled)?;
    debug!("installed custom style table");
    Ok(())
}

/// Returns the process-wide style table, installing the built-in styles if
/// nothing was installed yet.
pub fn style_table() -> &'static StyleTokenTable {
    INSTALLED.get_or_init(|| {
        debug!("installing built-in style table");
        StyleTokenTable::builtin().clone()
    })
}

pub fn is_installed() -> bool {
    INSTALLED.get().is_some()
}
