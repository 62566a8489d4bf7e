use crate::domain::term::OriginHint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegulatoryAuthority {
    /// Korea, Ministry of Food and Drug Safety.
    Mfds,
    /// Japan, Ministry of Health, Labour and Welfare.
    Mhlw,
}

impl RegulatoryAuthority {
    pub fn origin(self) -> OriginHint {
        match self {
            RegulatoryAuthority::Mfds => OriginHint::Korean,
            RegulatoryAuthority::Mhlw => OriginHint::Japanese,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulatoryNotice {
    pub authority: RegulatoryAuthority,
    pub text: String,
}
