use crate::domain::regulation::{
    entities::{RegulatoryAuthority, RegulatoryNotice},
    ports::RegulatoryProvider,
};

/// Japanese MHLW positive-list review. Template only, no network I/O.
#[derive(Debug, Clone, Default)]
pub struct MhlwRegulatoryClient;

impl MhlwRegulatoryClient {
    pub fn new() -> Self {
        Self
    }
}

impl RegulatoryProvider for MhlwRegulatoryClient {
    async fn review(&self, query: String) -> RegulatoryNotice {
        tracing::debug!(query = %query, "MHLW review");
        RegulatoryNotice {
            authority: RegulatoryAuthority::Mhlw,
            text: format!(
                "MHLW 포지티브 리스트(Positive List) 검토: [{query}] 잔류 허용량 0.01ppm 일률 기준 적용"
            ),
        }
    }
}
