
mod classes_test;
mod middleware_test;
mod views_test;
