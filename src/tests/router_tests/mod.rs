mod contact_tests;
mod page_tests;
mod projects_tests;
mod static_tests;
