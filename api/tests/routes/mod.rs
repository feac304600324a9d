mod auth_test;
mod feedback_test;
mod root_test;
mod submissions_test;
