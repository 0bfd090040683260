mod test_client;
mod test_marketplace_services;
mod test_transaction_services;
