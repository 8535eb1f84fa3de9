/// Implementation of `gzb serve`.
///
/// A deliberately small HTTP/1.1 responder that demonstrates the
/// external-layer contract end to end: it attaches the builder's body
/// and header values to the response verbatim — no recompression, no
/// chunking, no re-encoding — and closes the connection.
///
/// # Routing
///
/// ```text
/// GET /          → bomb for the configured default tier
/// GET /<label>   → bomb for the named tier (e.g. /10M, /1G)
/// GET /<other>   → 404 text response, no bomb
/// HEAD ...       → same status and headers, no body
/// <other method> → 405
/// ```
///
/// The catalog is verified before the listener opens; a process must
/// never start serving over a catalog whose blobs do not decode to
/// their declared sizes.
///
/// One connection handles one request. Scanners this is aimed at do
/// not reuse connections, and `Connection: close` keeps the loop free
/// of keep-alive state.
use anyhow::{Context, Result};
use gzb_catalog::{Catalog, SizeLabel};
use gzb_response::{BombResponse, ResponseBuilder};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::ServeArgs;

/// Upper bound on the request head we are willing to buffer. Anything
/// longer is cut off with a 400.
const MAX_REQUEST_HEAD: usize = 8 * 1024;

/// Run the `gzb serve` command.
///
/// # Errors
///
/// Returns an error if catalog verification fails, the default label
/// is unknown, or the listener cannot bind. Per-connection I/O errors
/// are logged to stderr and do not stop the server.
pub fn run(args: &ServeArgs) -> Result<()> {
    Catalog::global()
        .verify()
        .context("refusing to serve: catalog verification failed")?;

    let default_label: SizeLabel = args.size.parse()?;
    let builder = ResponseBuilder::new().with_default(default_label);

    let runtime = tokio::runtime::Runtime::new().context("cannot start tokio runtime")?;
    runtime.block_on(serve(args, builder))
}

async fn serve(args: &ServeArgs, builder: ResponseBuilder) -> Result<()> {
    let listener = TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("cannot bind {}", args.addr))?;

    println!(
        "listening on http://{} (default tier: {})",
        args.addr,
        builder.default_label()
    );

    loop {
        let (stream, peer) = listener.accept().await.context("accept failed")?;
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, builder).await {
                eprintln!("{peer}: {e:#}");
            }
        });
    }
}

/// Read one request head, route it, write one response, close.
async fn handle_connection(mut stream: TcpStream, builder: ResponseBuilder) -> Result<()> {
    let head = read_request_head(&mut stream).await?;

    if head.len() > MAX_REQUEST_HEAD {
        write_plain(&mut stream, "400 Bad Request", "request head too large\n").await?;
        return Ok(());
    }

    let Some((method, path)) = parse_request_line(&head) else {
        write_plain(&mut stream, "400 Bad Request", "malformed request\n").await?;
        return Ok(());
    };

    let include_body = match method.as_str() {
        "GET" => true,
        "HEAD" => false,
        _ => {
            write_plain(&mut stream, "405 Method Not Allowed", "GET or HEAD only\n").await?;
            return Ok(());
        }
    };

    // "/" → configured default; "/<label>" → that tier.
    let label = match path.as_str() {
        "/" => None,
        other => Some(other.trim_start_matches('/')),
    };

    match builder.build_str(label) {
        Ok(response) => write_bomb(&mut stream, &response, include_body).await,
        Err(e) => write_plain(&mut stream, "404 Not Found", &format!("{e}\n")).await,
    }
}

/// Buffer the request head up to the first blank line.
async fn read_request_head(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(512);
    let mut buf = [0u8; 512];
    loop {
        let n = stream.read(&mut buf).await.context("read failed")?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") || head.len() > MAX_REQUEST_HEAD {
            break;
        }
    }
    Ok(head)
}

/// Extract `(method, path)` from the request line, dropping any query
/// string. Returns `None` for anything that does not look like HTTP.
fn parse_request_line(head: &[u8]) -> Option<(String, String)> {
    let text = std::str::from_utf8(head).ok()?;
    let line = text.lines().next()?;
    let mut parts = line.split(' ');
    let method = parts.next()?.to_string();
    let target = parts.next()?;
    parts.next()?.strip_prefix("HTTP/")?;
    let path = target.split('?').next().unwrap_or(target).to_string();
    Some((method, path))
}

/// Write the bomb response, transmitting body and header values
/// exactly as the builder produced them.
async fn write_bomb(
    stream: &mut TcpStream,
    response: &BombResponse,
    include_body: bool,
) -> Result<()> {
    let mut head = String::with_capacity(160);
    head.push_str("HTTP/1.1 200 OK\r\n");
    head.push_str("Content-Type: text/html; charset=utf-8\r\n");
    for (name, value) in response.headers() {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("Connection: close\r\n\r\n");

    stream.write_all(head.as_bytes()).await?;
    if include_body {
        stream.write_all(response.body()).await?;
    }
    stream.shutdown().await?;
    Ok(())
}

/// Write a small plain-text response (errors and rejections).
async fn write_plain(stream: &mut TcpStream, status: &str, body: &str) -> Result<()> {
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes()).await?;
    stream.write_all(body.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
