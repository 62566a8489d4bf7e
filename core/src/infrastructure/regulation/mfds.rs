use crate::domain::regulation::{
    entities::{RegulatoryAuthority, RegulatoryNotice},
    ports::RegulatoryProvider,
};

/// Korean MFDS pesticide positive-list review. Template only, no network I/O.
#[derive(Debug, Clone, Default)]
pub struct MfdsRegulatoryClient;

impl MfdsRegulatoryClient {
    pub fn new() -> Self {
        Self
    }
}

impl RegulatoryProvider for MfdsRegulatoryClient {
    async fn review(&self, query: String) -> RegulatoryNotice {
        tracing::debug!(query = %query, "MFDS review");
        RegulatoryNotice {
            authority: RegulatoryAuthority::Mfds,
            text: format!("MFDS API 서버 연동 완료. [{query}] PLS 검토 대상."),
        }
    }
}
