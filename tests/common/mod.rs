//! Collaborators for integration tests: in-memory doubles, plus a one-shot
//! loopback HTTP server for the size-limit tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pagegrab::fetch::{FetchError, HttpResponse};
use pagegrab::{Error, Grabber, HttpFetcher, ImageProbe, Options};

/// Serves fixed responses keyed by exact URL; unknown URLs fail at the transport.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, HttpResponse>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(self, url: &str, body: &str) -> Self {
        self.response(url, 200, Some("text/html; charset=utf-8"), body.as_bytes())
    }

    pub fn response(
        mut self,
        url: &str,
        status: u16,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Self {
        self.pages.insert(
            url.to_string(),
            HttpResponse {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_vec(),
            },
        );
        self
    }
}

impl HttpFetcher for StaticFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Transport(format!("no route to {url}")))
    }
}

/// Answers image probes from a fixed size table; unknown images are unavailable.
#[derive(Default)]
pub struct SizeProbe {
    sizes: HashMap<String, (u32, u32)>,
}

impl SizeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(mut self, url: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(url.to_string(), (width, height));
        self
    }
}

impl ImageProbe for SizeProbe {
    fn dimensions(&self, url: &str) -> pagegrab::Result<(u32, u32)> {
        self.sizes
            .get(url)
            .copied()
            .ok_or_else(|| Error::ImageUnavailable(url.to_string()))
    }
}

/// Grabber serving a single HTML page at `url`.
pub fn grabber_for(url: &str, html: &str, probe: SizeProbe) -> Grabber {
    Grabber::with_collaborators(StaticFetcher::new().html(url, html), probe, Options::default())
}

/// 1x1 transparent GIF.
pub const GIF_1X1: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3b,
];

/// How [`serve_once`] frames the response body.
#[derive(Debug, Clone, Copy)]
pub enum Framing {
    ContentLength,
    Chunked,
}

/// Serve a single `200 OK` on a loopback port.
///
/// The body is `prefix` padded with spaces to `body_len` bytes. The returned
/// handle yields how many body bytes were written before the client hung up.
pub fn serve_once(
    content_type: &str,
    framing: Framing,
    prefix: &[u8],
    body_len: usize,
) -> (String, JoinHandle<usize>) {
    let listener = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener,
        Err(err) => panic!("cannot bind loopback listener: {err}"),
    };
    let url = match listener.local_addr() {
        Ok(addr) => format!("http://{addr}/resource"),
        Err(err) => panic!("listener has no address: {err}"),
    };

    let mut body = prefix.to_vec();
    body.resize(body_len.max(prefix.len()), b' ');

    let mut head = format!("HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nConnection: close\r\n");
    match framing {
        Framing::ContentLength => head.push_str(&format!("Content-Length: {}\r\n", body.len())),
        Framing::Chunked => head.push_str("Transfer-Encoding: chunked\r\n"),
    }
    head.push_str("\r\n");

    let handle = thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return 0;
        };
        let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
        let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

        read_request_head(&mut stream);
        if stream.write_all(head.as_bytes()).is_err() {
            return 0;
        }

        let mut sent = 0;
        for chunk in body.chunks(64 * 1024) {
            let written = match framing {
                Framing::ContentLength => stream.write_all(chunk),
                Framing::Chunked => write_chunk(&mut stream, chunk),
            };
            if written.is_err() {
                return sent;
            }
            sent += chunk.len();
        }

        if matches!(framing, Framing::Chunked) {
            let _ = stream.write_all(b"0\r\n\r\n");
        }
        let _ = stream.flush();
        sent
    });

    (url, handle)
}

fn write_chunk(stream: &mut TcpStream, chunk: &[u8]) -> std::io::Result<()> {
    write!(stream, "{:x}\r\n", chunk.len())?;
    stream.write_all(chunk)?;
    stream.write_all(b"\r\n")
}

fn read_request_head(stream: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}
