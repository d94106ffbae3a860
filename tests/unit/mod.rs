mod application;
mod common;
mod model;
mod presentation;
mod session;
mod test_error;
