use std::time::Duration;

use serde_json::json;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

use ratemymp::{
    api::{
        ApiErrorKind, HttpRequest, HttpTransport, ReqwestTransport, http_common::Endpoint,
    },
    config::ApiConfig,
};

/// What the stub server saw: request head and body.
struct Captured {
    head: String,
    body: String,
}

/// Accepts a single connection, captures the request and answers with
/// `status` and `body` after `delay`.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
    delay: Duration,
) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        let (head, request_body) = loop {
            let read = socket.read(&mut chunk).await.unwrap_or(0);
            if read == 0 {
                break (String::from_utf8_lossy(&raw).into_owned(), String::new());
            }
            raw.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&raw).into_owned();
            let Some((head, rest)) = text.split_once("\r\n\r\n") else {
                continue;
            };
            let length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if rest.len() >= length {
                break (head.to_string(), rest.to_string());
            }
        };

        let _ = tx.send(Captured {
            head,
            body: request_body,
        });
        tokio::time::sleep(delay).await;

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{}/api", addr), rx)
}

fn transport(base_url: String, request_timeout_ms: Option<u64>) -> ReqwestTransport {
    ReqwestTransport::new(&ApiConfig {
        base_url,
        request_timeout_ms,
    })
    .expect("transport should build")
}

#[tokio::test]
async fn given_post_request_when_sent_then_path_headers_and_json_body_reach_backend() {
    let (base_url, captured) =
        serve_once("201 Created", "{\"ok\":true}", Duration::ZERO).await;

    let response = transport(base_url, None)
        .send(HttpRequest::post(
            Endpoint::motion_vote("3"),
            json!({ "mp_id": 1, "vote": "upvote" }),
        ))
        .await
        .expect("stub answers");

    assert_eq!(response.status, 201);
    assert!(response.is_success());
    assert_eq!(response.body, "{\"ok\":true}");

    let captured = captured.await.expect("request captured");
    let head = captured.head.to_ascii_lowercase();
    assert!(
        head.starts_with("post /api/motions/3/vote http/1.1"),
        "{}",
        captured.head
    );
    assert!(head.contains("x-request-id: "), "{}", captured.head);
    assert!(head.contains("content-type: application/json"), "{}", captured.head);

    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("json body");
    assert_eq!(body, json!({ "mp_id": 1, "vote": "upvote" }));
}

#[tokio::test]
async fn given_query_pairs_when_sent_then_they_are_url_encoded() {
    let (base_url, captured) = serve_once("200 OK", "[]", Duration::ZERO).await;

    transport(base_url, None)
        .send(HttpRequest::get(Endpoint::motions()).with_query("category", "foreign affairs"))
        .await
        .expect("stub answers");

    let captured = captured.await.expect("request captured");
    assert!(
        captured
            .head
            .starts_with("GET /api/motions?category=foreign+affairs HTTP/1.1"),
        "{}",
        captured.head
    );
}

#[tokio::test]
async fn given_error_status_when_sent_then_it_comes_back_as_a_response() {
    let (base_url, _captured) =
        serve_once("404 Not Found", "{\"detail\":\"Not Found\"}", Duration::ZERO).await;

    let response = transport(base_url, None)
        .send(HttpRequest::get(Endpoint::mp("999")))
        .await
        .expect("404 is still a response");

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn given_slow_backend_when_timeout_elapses_then_transport_error_is_returned() {
    let (base_url, _captured) = serve_once("200 OK", "[]", Duration::from_secs(5)).await;

    let err = transport(base_url, Some(100))
        .send(HttpRequest::get(Endpoint::motions()))
        .await
        .expect_err("request should time out");

    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert_eq!(err.endpoint.as_deref(), Some("/motions"));
}

#[tokio::test]
async fn given_nothing_listening_when_sent_then_transport_error_is_returned() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    let err = transport(format!("http://{}/api", addr), Some(2_000))
        .send(HttpRequest::get(Endpoint::mps()))
        .await
        .expect_err("connection should be refused");

    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert!(err.is_user_facing());
}
