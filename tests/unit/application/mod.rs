mod test_audit_store;
mod test_client;
mod test_inactivity;
