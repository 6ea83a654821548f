mod test_registry;
mod phoneutil_tests;
