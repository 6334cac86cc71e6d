//! Integration tests for the full receive path: a real WebSocket server on a
//! loopback port feeds frames to a [`LiveClient`] rendering into a
//! [`MemoryDocument`].

use std::net::SocketAddr;

use futures::SinkExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::handshake::server::{Request, Response};
use tokio_tungstenite::tungstenite::Message;

use devcard_client::{
    ClientConfig, ConnectionState, LiveClient, MemoryDocument, SessionIdentity, ToolingClient,
    CONNECTION_LOST_NOTICE,
};

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        server_addr: addr.to_string(),
        identity: SessionIdentity {
            connection_id: "abc".to_string(),
            connection_kind: "cli".to_string(),
            source_url: "http://localhost:50051/dc/p/c".to_string(),
            project_name: "p".to_string(),
            card_name: "c".to_string(),
        },
    }
}

/// Serve one WebSocket connection: capture the handshake URI, send the given
/// frames in order, then close.
async fn serve_frames(frames: Vec<&'static str>) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (uri_tx, uri_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_hdr_async(stream, move |req: &Request, resp: Response| {
            let _ = uri_tx.send(req.uri().to_string());
            Ok(resp)
        })
        .await
        .unwrap();

        for frame in frames {
            ws.send(Message::Text(frame.to_string())).await.unwrap();
        }
        ws.close(None).await.unwrap();
    });

    (addr, uri_rx)
}

#[tokio::test]
async fn test_handshake_carries_session_identity() {
    let (addr, uri_rx) = serve_frames(vec![]).await;
    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    client.run().await.unwrap();

    let uri = uri_rx.await.unwrap();
    assert_eq!(
        uri,
        "/ws?clientId=abc&clientKind=cli&url=http://localhost:50051/dc/p/c\
         &projectName=p&devcardName=c"
    );
}

#[tokio::test]
async fn test_append_then_overwrite_cell() {
    let (addr, _uri_rx) = serve_frames(vec![
        r#"{"msgType":"appendCell", "cellId":"c1", "html":"<p>hi</p>"}"#,
        r#"{"msgType":"setCellContent", "cellId":"c1", "html":"<p>bye</p>"}"#,
    ])
    .await;
    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    client.run().await.unwrap();

    assert_eq!(client.state(), ConnectionState::Closed);
    let doc = client.into_target();
    assert_eq!(doc.cells().len(), 1);
    assert_eq!(doc.cell_content("c1"), Some("<p>bye</p>"));
}

#[tokio::test]
async fn test_full_card_run_sequence() {
    let (addr, _uri_rx) = serve_frames(vec![
        r#"{"msgType":"saveScrollPosition"}"#,
        r#"{"msgType":"clear"}"#,
        r#"{"msgType":"setTitle", "title":"Report"}"#,
        r#"{"msgType":"appendCell", "cellId":"c1", "html":"<p>build</p>"}"#,
        r#"{"msgType":"appendToCell", "cellId":"c1", "html":"<p>ok</p>"}"#,
        r#"{"msgType":"setStatusBarContent", "html":"<code>run: 0.2s</code>"}"#,
        r#"{"msgType":"restoreScrollPosition"}"#,
        r#"{"msgType":"jump", "id":"c1"}"#,
    ])
    .await;
    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    client.run().await.unwrap();

    let doc = client.into_target();
    assert_eq!(doc.title(), devcard_client::title_markup("Report"));
    assert_eq!(doc.cell_content("c1"), Some("<p>build</p><p>ok</p>"));
    // The close notice lands after the last status bar write.
    assert_eq!(
        doc.status_bar(),
        format!("<code>run: 0.2s</code>{CONNECTION_LOST_NOTICE}")
    );
}

#[tokio::test]
async fn test_unsupported_kind_is_reported_and_stream_continues() {
    let (addr, _uri_rx) = serve_frames(vec![
        r#"{"msgType":"appendCell", "cellId":"c1", "html":"<p>hi</p>"}"#,
        r#"{"msgType":"bogus"}"#,
        r#"{"msgType":"appendToCell", "cellId":"c1", "html":"<p>still here</p>"}"#,
    ])
    .await;
    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    client.run().await.unwrap();

    let doc = client.into_target();
    assert_eq!(doc.notices(), &["unsupported message type: bogus".to_string()]);
    assert_eq!(doc.cell_content("c1"), Some("<p>hi</p><p>still here</p>"));
}

#[tokio::test]
async fn test_close_appends_single_reload_notice() {
    let (addr, _uri_rx) = serve_frames(vec![]).await;
    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    client.run().await.unwrap();

    assert_eq!(client.state(), ConnectionState::Closed);
    assert_eq!(client.target().status_bar(), CONNECTION_LOST_NOTICE);
}

#[tokio::test]
async fn test_connect_failure_posts_notice_and_errors() {
    // Bind and immediately drop to get a port with no listener.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut client = LiveClient::new(config(addr), MemoryDocument::new());
    let result = client.run().await;

    assert!(result.is_err());
    assert_eq!(client.state(), ConnectionState::Closed);
    assert_eq!(client.target().notices().len(), 1);
    assert!(client.target().notices()[0].starts_with("unable to connect"));
}

/// Serve one canned HTTP response on a loopback port.
async fn serve_http_once(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = stream.read(&mut buf).await.unwrap();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_debug_artifact_returns_full_body() {
    let addr = serve_http_once("dc.Debug(\"p\", \"c\")").await;
    let identity = config(addr).identity;
    let tooling = ToolingClient::new(&addr.to_string(), &identity);

    let body = tooling.debug_artifact().await.unwrap();
    assert_eq!(body, "dc.Debug(\"p\", \"c\")");
}

#[tokio::test]
async fn test_open_in_editor_empty_body_is_silent_success() {
    let addr = serve_http_once("").await;
    let identity = config(addr).identity;
    let tooling = ToolingClient::new(&addr.to_string(), &identity);

    assert_eq!(tooling.open_in_editor().await.unwrap(), None);
}

#[tokio::test]
async fn test_open_in_editor_surfaces_error_body() {
    let addr = serve_http_once("Unable to open devcard for editing").await;
    let identity = config(addr).identity;
    let tooling = ToolingClient::new(&addr.to_string(), &identity);

    assert_eq!(
        tooling.open_in_editor().await.unwrap(),
        Some("Unable to open devcard for editing".to_string())
    );
}
