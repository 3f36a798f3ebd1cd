use mockend::{Builder, FieldSchema, ServerHandle};

use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr};

/// A running mock backend plus an HTTP client pointed at it.
pub struct Backend {
    server: ServerHandle,
    client: reqwest::Client,
    base: String,
}

impl Backend {
    pub async fn start(url: &str, model: &str) -> Backend {
        let fields = FieldSchema::parse([
            ("name", "string"),
            ("age", "number"),
            ("active", "boolean"),
            ("hired", "date"),
        ])
        .unwrap();

        let server = Builder::new()
            .host(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .port(0)
            .model(model)
            .fields(fields)
            .url(url)
            .serve()
            .await
            .unwrap();

        let base = format!("http://{}/api/model", server.local_addr());

        Backend {
            server,
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn table_name(&self) -> String {
        self.server.db().model().table_name()
    }

    /// Name of the key field in returned records
    pub fn primary_key(&self) -> &'static str {
        self.server.db().capability().primary_key
    }

    /// The key of `record` as it appears in a request path
    pub fn id_of(&self, record: &Value) -> String {
        match &record[self.primary_key()] {
            Value::String(id) => id.clone(),
            id => id.to_string(),
        }
    }

    pub async fn send(&self, method: Method, id: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let url = match id {
            Some(id) => format!("{}/{id}", self.base),
            None => self.base.clone(),
        };

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.unwrap();
        let status = response.status();
        let body = response.json().await.unwrap();

        (status, body)
    }

    pub async fn shutdown(self) {
        self.server.shutdown().await.unwrap();
    }
}
