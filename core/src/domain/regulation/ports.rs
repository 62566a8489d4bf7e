use std::future::Future;

use crate::domain::regulation::entities::RegulatoryNotice;

/// Compliance source queried with the untranslated user query. Never fails.
#[cfg_attr(test, mockall::automock)]
pub trait RegulatoryProvider: Send + Sync {
    fn review(&self, query: String) -> impl Future<Output = RegulatoryNotice> + Send;
}
