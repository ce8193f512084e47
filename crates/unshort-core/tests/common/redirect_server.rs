//! Minimal HTTP/1.1 server that serves redirect chains for integration tests.
//!
//! Routes (one request per connection, `Connection: close`):
//! - `/hop/N`      N > 0: 302 to `/hop/{N-1}`; N = 0: 200
//! - `/loop`       302 to itself
//! - `/status/C`   redirect with status C (301, 303, 307, 308) to `/final`
//! - `/nohead`     HEAD: 405; GET: 302 to `/final`
//! - `/missing`    404
//! - `/stall`      request is read, no response for 10 s
//! - anything else 200

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// How long `/stall` holds the connection open without answering.
const STALL: Duration = Duration::from_secs(10);

/// Starts the server on a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    let is_head = method.eq_ignore_ascii_case("HEAD");

    if path == "/stall" {
        thread::sleep(STALL);
        return;
    }

    let response = route(path, is_head);
    let _ = stream.write_all(response.as_bytes());
}

fn route(path: &str, is_head: bool) -> String {
    if let Some(n) = path.strip_prefix("/hop/") {
        return match n.parse::<u32>() {
            Ok(0) => ok(is_head),
            Ok(n) => redirect(302, &format!("/hop/{}", n - 1)),
            Err(_) => status_only(400, "Bad Request"),
        };
    }
    if path == "/loop" {
        return redirect(302, "/loop");
    }
    if let Some(code) = path.strip_prefix("/status/") {
        return match code.parse::<u16>() {
            Ok(code @ (301 | 303 | 307 | 308)) => redirect(code, "/final"),
            _ => status_only(400, "Bad Request"),
        };
    }
    if path == "/nohead" {
        return if is_head {
            status_only(405, "Method Not Allowed")
        } else {
            redirect(302, "/final")
        };
    }
    if path == "/missing" {
        return status_only(404, "Not Found");
    }
    ok(is_head)
}

fn ok(is_head: bool) -> String {
    let body = if is_head { "" } else { "ok" };
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        body
    )
}

fn redirect(code: u16, location: &str) -> String {
    format!(
        "HTTP/1.1 {} Redirect\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        code, location
    )
}

fn status_only(code: u16, reason: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        code, reason
    )
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
