use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::Value;
use time::macros::date;

use ratemymp::api::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, Normalizer, ParliamentClient,
    error::transport_error,
};

enum Scripted {
    Respond(HttpResponse),
    Unreachable,
}

/// Answers by `"<METHOD> <path>"`; anything unscripted gets a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn script(&self, method: HttpMethod, path: &str, scripted: Scripted) {
        self.routes
            .lock()
            .expect("routes lock")
            .insert(format!("{} {}", method, path), scripted);
    }

    pub fn json(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.text(method, path, status, &body.to_string());
    }

    pub fn text(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.script(
            method,
            path,
            Scripted::Respond(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn unreachable(&self, method: HttpMethod, path: &str) {
        self.script(method, path, Scripted::Unreachable);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.endpoint))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = format!("{} {}", request.method, request.endpoint);
        self.requests.lock().expect("requests lock").push(request);

        match self.routes.lock().expect("routes lock").get(&key) {
            Some(Scripted::Respond(response)) => Ok(response.clone()),
            Some(Scripted::Unreachable) => Err(transport_error("connection refused")),
            None => Ok(HttpResponse {
                status: 404,
                body: "{\"detail\":\"Not Found\"}".to_string(),
            }),
        }
    }
}

pub fn client(transport: &Arc<ScriptedTransport>) -> ParliamentClient {
    let transport: Arc<dyn HttpTransport> = transport.clone();
    ParliamentClient::new(transport).with_normalizer(Normalizer::with_today(date!(2025 - 01 - 10)))
}
