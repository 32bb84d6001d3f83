mod basic_test;
mod test_drain;
