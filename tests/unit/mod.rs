mod application;
mod common;
mod model;
mod presentation;
mod test_error;
