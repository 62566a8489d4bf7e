use crate::domain::regulation::entities::RegulatoryNotice;

#[derive(Debug, Clone)]
pub struct SearchIngredientInput {
    pub query: String,
}

/// Per-request values shared by every normalized record of one search.
#[derive(Debug, Clone)]
pub struct SearchContext<'a> {
    pub raw_query: &'a str,
    pub canonical: &'a str,
    pub domestic: &'a RegulatoryNotice,
    pub foreign: &'a RegulatoryNotice,
}
