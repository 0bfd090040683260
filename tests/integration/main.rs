mod bank_account_tests;
mod card_tests;
