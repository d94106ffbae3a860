mod test_events;
