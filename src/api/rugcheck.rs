//! RugCheck API client
//!
//! Single endpoint: `/v1/tokens/{mint}/report`, no authentication.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RugcheckError;
use crate::models::TokenReport;

#[derive(Debug, Clone)]
pub struct RugcheckClient {
    base_url: String,
    client: Client,
}

impl RugcheckClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client for RugCheck")?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The token address is inserted into the path as-is.
    pub fn report_url(&self, token_address: &str) -> String {
        format!("{}/v1/tokens/{}/report", self.base_url, token_address)
    }

    /// Fetches and decodes the full risk report for a token.
    pub async fn get_token_report(&self, token_address: &str) -> Result<TokenReport, RugcheckError> {
        let url = self.report_url(token_address);
        debug!("Fetching RugCheck report for {}: {}", token_address, url);

        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(RugcheckError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("RugCheck report API error for token {}: {}", token_address, status);
            return Err(RugcheckError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(RugcheckError::Body)?;
        let report: TokenReport = serde_json::from_slice(&body)?;

        debug!(
            "Decoded RugCheck report for {} ({} risks, {} holders, {} markets)",
            token_address,
            report.risks.len(),
            report.top_holders.len(),
            report.markets.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> RugcheckClient {
        let config = Config {
            api_url: server.url(),
            timeout: Duration::from_secs(5),
        };
        RugcheckClient::new(&config).unwrap()
    }

    #[test]
    fn test_report_url() {
        let config = Config {
            api_url: "https://api.rugcheck.xyz/".to_string(),
            timeout: Duration::from_secs(30),
        };
        let client = RugcheckClient::new(&config).unwrap();
        assert_eq!(
            client.report_url("MintAbc"),
            "https://api.rugcheck.xyz/v1/tokens/MintAbc/report"
        );
    }

    #[tokio::test]
    async fn test_get_token_report_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/tokens/MintAbc/report")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"mint": "MintAbc", "tokenMeta": {"name": "Foo", "symbol": "FOO"}, "token": {"supply": 1000000.5}}"#)
            .create_async()
            .await;

        let report = client_for(&server).get_token_report("MintAbc").await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.mint, "MintAbc");
        assert_eq!(report.token_meta.symbol, "FOO");
        assert!((report.token.supply - 1000000.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_get_token_report_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/tokens/Unknown/report")
            .with_status(404)
            .with_body(r#"{"error": "not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).get_token_report("Unknown").await.unwrap_err();

        assert!(matches!(err, RugcheckError::HttpStatus(status) if status == StatusCode::NOT_FOUND));
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_get_token_report_non_200_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/tokens/MintAbc/report")
            .with_status(204)
            .create_async()
            .await;

        let err = client_for(&server).get_token_report("MintAbc").await.unwrap_err();
        assert!(matches!(err, RugcheckError::HttpStatus(status) if status.as_u16() == 204));
    }

    #[tokio::test]
    async fn test_get_token_report_truncated_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/tokens/MintAbc/report")
            .with_status(200)
            .with_body(r#"{"mint": "MintAbc", "tokenMeta": {"name": "Fo"#)
            .create_async()
            .await;

        let err = client_for(&server).get_token_report("MintAbc").await.unwrap_err();
        assert!(matches!(err, RugcheckError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_token_report_connection_refused() {
        // Grab a free port, then close it so the connect is refused.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = Config {
            api_url: format!("http://127.0.0.1:{}", port),
            timeout: Duration::from_secs(5),
        };
        let client = RugcheckClient::new(&config).unwrap();

        let err = client.get_token_report("MintAbc").await.unwrap_err();
        assert!(matches!(err, RugcheckError::Request(_)));
    }

    #[tokio::test]
    async fn test_get_token_report_short_body() {
        use std::io::{Read, Write};

        // Advertise more bytes than are sent, then hang up.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 1000\r\n\r\n{\"mint\":")
                .unwrap();
            stream.flush().unwrap();
        });

        let config = Config {
            api_url: format!("http://127.0.0.1:{}", port),
            timeout: Duration::from_secs(5),
        };
        let client = RugcheckClient::new(&config).unwrap();

        let err = client.get_token_report("MintAbc").await.unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, RugcheckError::Body(_)), "unexpected error: {:?}", err);
        assert_eq!(err.exit_code(), 3);
    }
}
