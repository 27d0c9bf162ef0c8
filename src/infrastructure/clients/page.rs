use crate::error::{Result, ScrapeError};
use reqwest::Client;
use tracing::{error, info};

/// Retrieves the raw HTML of a source page.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {url}");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    url,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    "Request failed: {e}"
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(url, %status, headers = ?response.headers(), "Unexpected response");
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await?;
        info!("Fetched {} bytes from {url}", html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single request with `status_line` and `body`, returning the
    /// URL to hit.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/status")
    }

    #[tokio::test]
    async fn returns_body_of_successful_response() {
        let body = r#"<ul class="rrItemsList"><li class="rrItem">Field 1</li></ul>"#;
        let url = serve_once("200 OK", body).await;

        let html = HttpFetcher::new(Client::new()).fetch(&url).await.unwrap();
        assert_eq!(html, body);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("503 Service Unavailable", "down").await;

        let err = HttpFetcher::new(Client::new()).fetch(&url).await.unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::HttpStatus { url: ref failed, status }
                if status == StatusCode::SERVICE_UNAVAILABLE && *failed == url
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpFetcher::new(Client::new())
            .fetch(&format!("http://{addr}/"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Network(_)));
    }
}
