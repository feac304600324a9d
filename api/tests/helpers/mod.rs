
pub use app::{body_json, body_text, get, json_request, make_test_app};
