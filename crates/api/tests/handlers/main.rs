mod availability_test;
mod holiday_test;
mod middleware_test;
mod prescription_test;
mod session_test;
mod test_utils;
