pub mod usda_client;
