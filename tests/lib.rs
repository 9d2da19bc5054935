//! Shared test doubles for cointalk behavior tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use cointalk_core::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

/// Scripted transport: answers per (method, path suffix) route and records
/// every request it sees. Unrouted requests get a 404.
pub struct ScriptedHttpClient {
    routes: Vec<(HttpMethod, String, HttpResponse)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn on(mut self, method: HttpMethod, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .push((method, path.to_owned(), HttpResponse::with_status(status, body)));
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("not poisoned").clone()
    }

    /// Number of recorded requests whose URL ends with the given suffix.
    pub fn calls_to(&self, path_suffix: &str) -> usize {
        self.recorded()
            .iter()
            .filter(|request| request.url.ends_with(path_suffix))
            .count()
    }
}

impl Default for ScriptedHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self
            .routes
            .iter()
            .find(|(method, path, _)| *method == request.method && request.url.ends_with(path))
            .map(|(_, _, response)| response.clone())
            .unwrap_or_else(|| HttpResponse::with_status(404, "no scripted route"));
        self.requests.lock().expect("not poisoned").push(request);
        Box::pin(async move { Ok(response) })
    }
}

/// Decode a recorded request body as JSON.
pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request should carry a body"))
        .expect("request body should be JSON")
}
