use http::header::CONTENT_TYPE;
use http::{Response, StatusCode};
use hyper::Body;
use perf_tester_http::GenericError;

/// Result-file bytes, returned verbatim as the response body.
pub fn result_response(results: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(results))
        .unwrap()
}

pub fn error_response(err: GenericError) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(err.error_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(err.message))
        .unwrap()
}
