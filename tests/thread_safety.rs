mod common;

use civils_security::constants::{header, method};
use common::asserts::{assert_preflight, assert_simple};
use common::builders::{cors, preflight_request, simple_request};
use common::headers::header_value;
use std::sync::Arc;
use std::thread;

#[test]
fn cors_can_be_shared_across_threads() {
    let cors = Arc::new(cors().build());

    let mut handles = Vec::new();
    for i in 0..8 {
        let cors = Arc::clone(&cors);
        handles.push(thread::spawn(move || {
            let origin = if i % 2 == 0 {
                "http://localhost:3000"
            } else {
                "http://localhost:5173"
            };
            let headers = assert_preflight(
                preflight_request()
                    .origin(origin)
                    .request_method(method::POST)
                    .request_headers("X-Thread")
                    .check(&cors),
            );

            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
                Some("X-Thread"),
            );

            let simple_headers = assert_simple(simple_request().origin(origin).check(&cors));
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin),
            );
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
