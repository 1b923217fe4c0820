use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "The page you are looking for does not exist.".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::DbError(_) | ServerError::InternalError => {
            tracing::error!(error = %err, "request failed");
            (500, "Something went wrong on our side. Please try again later.".to_string())
        }
    };
    html_error_response(status, &message)
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
