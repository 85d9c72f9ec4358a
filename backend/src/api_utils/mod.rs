pub mod experience_api_client;
