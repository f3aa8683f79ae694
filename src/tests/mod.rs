mod helpers;

mod format_test;
