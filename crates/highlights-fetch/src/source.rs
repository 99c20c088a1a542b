//! The transport seam.

use std::future::Future;

use highlights_model::SheetSpec;

use crate::error::Result;

/// Retrieves the CSV export of one sheet.
///
/// Implementations must be shareable across tasks; [`fetch_all`] calls
/// `fetch_csv` concurrently for every configured sheet.
///
/// [`fetch_all`]: crate::fetch_all
pub trait SheetSource: Send + Sync + 'static {
    /// Returns the sheet's CSV text, or the transport failure.
    fn fetch_csv(&self, sheet: &SheetSpec) -> impl Future<Output = Result<String>> + Send;
}
