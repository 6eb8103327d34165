//! HTTP server: one tokio task per connection, one aggregator per request

mod routes;

pub use routes::{dispatch, Reply};

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::services::{Config, Logger};
use crate::types::Result;

/// Read-only state shared by every connection
pub struct AppState {
    pub config: Config,
    pub logger: Arc<dyn Logger>,
}

impl AppState {
    pub fn new(config: Config, logger: Arc<dyn Logger>) -> Self {
        Self { config, logger }
    }
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let address = state.config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    state
        .logger
        .info(&format!("Listening on http://{}", listener.local_addr()?));

    tokio::select! {
        result = serve(listener, state.clone()) => result,
        _ = tokio::signal::ctrl_c() => {
            state.logger.info("Shutting down");
            Ok(())
        }
    }
}

/// Accept connections on `listener` forever
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = state.clone();

        tokio::task::spawn(async move {
            let service = service_fn(|req| {
                let state = state.clone();
                async move { Ok::<_, Infallible>(handle(req, &state).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                state
                    .logger
                    .warn(&format!("Failed to serve connection: {}", err));
            }
        });
    }
}

async fn handle(req: Request<Incoming>, state: &AppState) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    state.logger.info(&format!("{} {}", method, path));

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            state.logger.error(&format!("Failed to read body: {}", e));
            return Reply::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    dispatch(&method, &path, &body, state).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryLogger;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn start() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::new(Config::default(), Arc::new(MemoryLogger::new())));
        tokio::spawn(serve(listener, state));
        addr
    }

    async fn roundtrip(addr: std::net::SocketAddr, request: String) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8(response).unwrap()
    }

    #[tokio::test]
    async fn test_health_over_socket() {
        let addr = start().await;
        let response = roundtrip(
            addr,
            "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n".to_string(),
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("application/json"));
        assert!(response.contains(r#"{"status":"healthy"}"#));
    }

    #[tokio::test]
    async fn test_search_over_socket() {
        let addr = start().await;
        let body = r#"{"location":"Toulon"}"#;
        let request = format!(
            "POST /search HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let response = roundtrip(addr, request).await;
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains(r#""location":"Toulon""#));
        assert!(response.contains(r#""total_deals":7"#));
    }
}
