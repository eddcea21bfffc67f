//! HTTP ソースの実装
//!
//! reqwest の blocking クライアントで 2 つのエンドポイントを GET する。
//! リトライは行わない。失敗はそのまま Error としてフェッチサイクルを中断させる。

use crate::api::endpoints::Endpoints;
use crate::api::source::CatalogSource;
use crate::error::Error;
use serde_json::Value;

/// HTTP で上流 API を叩くソース
pub struct HttpCatalogSource {
    endpoints: Endpoints,
}

impl HttpCatalogSource {
    /// 新しい HTTP ソースを作成
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    fn get_json(&self, url: &str) -> Result<Value, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["message"]
                    .as_str()
                    .or_else(|| v["error"].as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("API error: {}", error_msg)));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))
    }
}

impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_products(&self) -> Result<Value, Error> {
        self.get_json(&self.endpoints.products_url)
    }

    fn fetch_branches(&self) -> Result<Value, Error> {
        self.get_json(&self.endpoints.branches_url)
    }
}
