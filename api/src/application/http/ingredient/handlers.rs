pub mod search_ingredient;
