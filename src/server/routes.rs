//! Request routing and handlers
//!
//! Handlers work on an already-collected body and return a [`Reply`], so
//! they can be exercised without a socket.

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::AppState;
use crate::services::DealAggregator;
use crate::types::{
    CarDealsError, ErrorResponse, Result, SearchContext, SearchRequest, SearchResponse,
};

static INDEX_HTML: &str = include_str!("../../assets/index.html");
static INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Status, content type and body of a handled request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Bytes,
}

impl Reply {
    fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: JSON,
                body: Bytes::from(body),
            },
            Err(e) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                content_type: TEXT,
                body: Bytes::from(format!("{}: {}", INTERNAL_SERVER_ERROR, e)),
            },
        }
    }

    fn html(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: HTML,
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::json(status, &ErrorResponse::new(message))
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        response
    }
}

/// Route a request to its handler
pub fn dispatch(method: &Method, path: &str, body: &[u8], state: &AppState) -> Reply {
    match (method, path) {
        (&Method::GET, "/") => Reply::html(INDEX_HTML),
        (&Method::POST, "/search") => search(body, state),
        (&Method::GET, "/health") => Reply::json(StatusCode::OK, &Health { status: "healthy" }),
        _ => Reply::error(StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// `POST /search`: rank deals for a fresh aggregator built from the request
fn search(body: &[u8], state: &AppState) -> Reply {
    match run_search(body, state) {
        Ok(response) => Reply::json(StatusCode::OK, &response),
        Err(e) => {
            state.logger.error(&format!("Error in search: {}", e));
            Reply::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn run_search(body: &[u8], state: &AppState) -> Result<SearchResponse> {
    let value: Value = serde_json::from_slice(body)?;
    // Derived struct impls also accept arrays; only an object is a valid search
    if !value.is_object() {
        return Err(CarDealsError::Request(
            "request body must be a JSON object".into(),
        ));
    }
    let request: SearchRequest = serde_json::from_value(value)?;

    let mut context = SearchContext::new(&state.config.default_location);
    context.apply(&request);

    let aggregator = DealAggregator::new(context, state.logger.clone());
    let all_deals = aggregator.get_all_deals();
    let cheapest_deal = aggregator.find_cheapest_deal();
    let top_deals = aggregator.get_top_deals(state.config.top_limit);

    Ok(SearchResponse {
        success: true,
        cheapest_deal,
        top_deals,
        total_deals: all_deals.len(),
        search_params: aggregator.context().clone(),
    })
}
