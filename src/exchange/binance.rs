// =================================================================
// exchange/binance.rs - Binance USDT-M Futures REST Client
// =================================================================

use chrono::Utc;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{signer::HmacSigner, ExchangeError, FuturesClient};
use crate::config::{Credentials, ExchangeSettings};
use crate::orders::OrderRequest;

// Constants
pub const FUTURES_MAINNET_URL: &str = "https://fapi.binance.com";
pub const FUTURES_TESTNET_URL: &str = "https://testnet.binancefuture.com";
const ORDER_ENDPOINT: &str = "/fapi/v1/order";
const API_KEY_HEADER: &str = "x-mbx-apikey";

/// Error body returned by Binance on rejected requests.
#[derive(Debug, Deserialize)]
struct BinanceErrorResponse {
    code: i64,
    msg: String,
}

/// Synchronous client for Binance USDT-M futures order entry.
#[derive(Debug)]
pub struct BinanceFuturesClient {
    client: Client,
    base_url: String,
    signer: HmacSigner,
    recv_window_ms: u64,
}

impl BinanceFuturesClient {
    pub fn new(credentials: &Credentials, settings: &ExchangeSettings) -> Result<Self, ExchangeError> {
        let base_url = settings
            .base_url
            .clone()
            .unwrap_or_else(|| {
                if settings.testnet {
                    FUTURES_TESTNET_URL.to_string()
                } else {
                    FUTURES_MAINNET_URL.to_string()
                }
            })
            .trim_end_matches('/')
            .to_string();

        let signer = HmacSigner::new(&credentials.api_key, &credentials.api_secret);

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let api_key = HeaderValue::from_str(signer.api_key())
            .map_err(|e| ExchangeError::Configuration(format!("Invalid API key: {}", e)))?;
        headers.insert(API_KEY_HEADER, api_key);

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ExchangeError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            signer,
            recv_window_ms: settings.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Form-encoded, signed request body for `request` at `timestamp_ms`.
    pub fn signed_payload(
        &self,
        request: &OrderRequest,
        timestamp_ms: i64,
    ) -> Result<String, ExchangeError> {
        let recv_window = self.recv_window_ms.to_string();
        let timestamp = timestamp_ms.to_string();

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in request.to_params() {
            serializer.append_pair(key, &value);
        }
        serializer.append_pair("recvWindow", &recv_window);
        serializer.append_pair("timestamp", &timestamp);
        let query = serializer.finish();

        let signature = self.signer.signature(&query)?;
        Ok(format!("{}&signature={}", query, signature))
    }

    /// Turn a raw HTTP status and body into a confirmation or an error.
    pub fn parse_response(status: u16, body: &str) -> Result<Value, ExchangeError> {
        if !(200..300).contains(&status) {
            if let Ok(error) = serde_json::from_str::<BinanceErrorResponse>(body) {
                return Err(ExchangeError::Api {
                    status,
                    code: error.code,
                    message: error.msg,
                });
            }
            return Err(ExchangeError::Api {
                status,
                code: 0,
                message: format!("Invalid JSON error message from Binance: {}", body),
            });
        }

        serde_json::from_str(body).map_err(|e| {
            ExchangeError::InvalidResponse(format!("{} - body: {}", e, body))
        })
    }
}

impl FuturesClient for BinanceFuturesClient {
    fn create_order(&self, request: &OrderRequest) -> Result<Value, ExchangeError> {
        let url = format!("{}{}", self.base_url, ORDER_ENDPOINT);
        let payload = self.signed_payload(request, Utc::now().timestamp_millis())?;

        debug!("POST {} {:?}", url, request.to_params());

        let response = self.client.post(&url).body(payload).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!("Response {}: {}", status, body);

        Self::parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::OrderSide;
    use rust_decimal_macros::dec;

    fn client(settings: ExchangeSettings) -> BinanceFuturesClient {
        let credentials = Credentials {
            api_key: "test_key".to_string(),
            api_secret: "test_secret".to_string(),
        };
        BinanceFuturesClient::new(&credentials, &settings).unwrap()
    }

    #[test]
    fn test_base_url_selection() {
        assert_eq!(client(ExchangeSettings::default()).base_url(), FUTURES_TESTNET_URL);

        let mainnet = ExchangeSettings {
            testnet: false,
            ..ExchangeSettings::default()
        };
        assert_eq!(client(mainnet).base_url(), FUTURES_MAINNET_URL);

        let custom = ExchangeSettings {
            base_url: Some("http://localhost:8080/".to_string()),
            ..ExchangeSettings::default()
        };
        assert_eq!(client(custom).base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_signed_payload_layout() {
        let client = client(ExchangeSettings::default());
        let request = OrderRequest::stop_limit(
            "BTCUSDT".to_string(),
            OrderSide::Buy,
            dec!(0.5),
            dec!(61000),
            dec!(60000),
        );

        let payload = client.signed_payload(&request, 1_700_000_000_000).unwrap();
        let (query, signature) = payload.split_once("&signature=").unwrap();

        assert_eq!(
            query,
            "symbol=BTCUSDT&side=BUY&type=STOP&quantity=0.5&price=61000&stopPrice=60000\
             &timeInForce=GTC&recvWindow=5000&timestamp=1700000000000"
        );
        assert_eq!(signature.len(), 64);
        assert_eq!(signature, client.signer.signature(query).unwrap());
    }

    #[test]
    fn test_parse_success_passes_body_through() {
        let body = r#"{"orderId":123,"symbol":"BTCUSDT","status":"NEW"}"#;
        let order = BinanceFuturesClient::parse_response(200, body).unwrap();
        assert_eq!(order["orderId"], 123);
        assert_eq!(order["status"], "NEW");
    }

    #[test]
    fn test_parse_structured_rejection() {
        let body = r#"{"code":-2019,"msg":"Margin is insufficient."}"#;
        match BinanceFuturesClient::parse_response(400, body) {
            Err(ExchangeError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(code, -2019);
                assert_eq!(message, "Margin is insufficient.");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unstructured_rejection() {
        let err = BinanceFuturesClient::parse_response(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, ExchangeError::Api { status: 502, .. }));
        assert!(err.to_string().contains("Invalid JSON error message from Binance: Bad Gateway"));
    }

    #[test]
    fn test_parse_garbage_success_body() {
        let err = BinanceFuturesClient::parse_response(200, "<html>").unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidResponse(_)));
    }
}
