/// Language of the text handed to the display translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginHint {
    English,
    Korean,
    Japanese,
}

impl OriginHint {
    /// Only foreign non-English sources get the "processed by internal engine" notice.
    pub fn discloses_passthrough(self) -> bool {
        matches!(self, OriginHint::Japanese)
    }
}
