//! Local HTTP server answering every request with one canned response

use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

/// A request as seen by the stub server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

type RequestLog = Mutex<Vec<RecordedRequest>>;

pub struct StubServer {
    base_url: String,
    requests: web::Data<RequestLog>,
    handle: ServerHandle,
}

impl StubServer {
    /// Bind to an ephemeral port on 127.0.0.1 and start serving
    pub async fn start(status: u16, content_type: &'static str, body: &str) -> Self {
        let requests: web::Data<RequestLog> = web::Data::new(Mutex::new(Vec::new()));
        let canned = web::Data::new(CannedResponse {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body: body.to_string(),
        });

        let log = requests.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(log.clone())
                .app_data(canned.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn respond(
    req: HttpRequest,
    body: web::Bytes,
    log: web::Data<RequestLog>,
    canned: web::Data<CannedResponse>,
) -> HttpResponse {
    log.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    HttpResponse::build(canned.status)
        .content_type(canned.content_type)
        .body(canned.body.clone())
}
