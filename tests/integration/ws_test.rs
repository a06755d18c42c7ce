//! Integration tests for the WebSocket channel.

mod helpers;

use std::time::Duration;

use axum::{ServiceExt, extract::Request};
use axum::http::StatusCode;
use futures::{SinkExt, Stream, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// Serve the test app on an ephemeral port and return its address.
async fn serve(app: &helpers::TestApp) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = ServiceExt::<Request>::into_make_service(app.app.clone());
    tokio::spawn(async move {
        axum::serve(listener, service).await.unwrap();
    });
    addr
}

/// Wait for the next text frame.
async fn next_text<S>(stream: &mut S) -> String
where
    S: Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let msg = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("timed out waiting for frame")
        .expect("stream closed")
        .expect("websocket error");
    msg.to_text().unwrap().to_string()
}

#[tokio::test]
async fn test_index_page() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .body
            .as_str()
            .unwrap()
            .contains("WebSocket server is running successfully")
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["connections"], 0);
}

#[tokio::test]
async fn test_echo() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let (mut socket, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap();
    socket.send(Message::Text("hello".into())).await.unwrap();

    assert_eq!(next_text(&mut socket).await, "Message text was: hello");
}

#[tokio::test]
async fn test_mutation_broadcasts_to_every_connection() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let (mut first, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap();
    let (mut second, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap();

    // Both sockets are registered once each has answered an echo.
    first.send(Message::Text("ping".into())).await.unwrap();
    next_text(&mut first).await;
    second.send(Message::Text("ping".into())).await.unwrap();
    next_text(&mut second).await;
    assert_eq!(app.state.hub.connection_count(), 2);

    let batch = serde_json::json!([helpers::movie_json("Heat")]);
    let response = app.request("POST", "/movies/bulk", Some(batch), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let expected = r#"{"message":"New data is available. Please refresh."}"#;
    assert_eq!(next_text(&mut first).await, expected);
    assert_eq!(next_text(&mut second).await, expected);
}

#[tokio::test]
async fn test_closed_connection_is_unregistered() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let (mut socket, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap();
    socket.send(Message::Text("ping".into())).await.unwrap();
    next_text(&mut socket).await;
    assert_eq!(app.state.hub.connection_count(), 1);

    socket.close(None).await.unwrap();

    for _ in 0..50 {
        if app.state.hub.connection_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(app.state.hub.connection_count(), 0);
}
