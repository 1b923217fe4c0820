mod content_tests;
mod inquiry_tests;
mod investments_tests;
mod pages_tests;
