mod common;

use common::{serve_once, Framing, GIF_1X1};
use pagegrab::fetch::{fetch_html, ReqwestFetcher};
use pagegrab::{Error, HttpImageProbe, ImageProbe, Options};
use reqwest::blocking::Client;

const MIB: usize = 1024 * 1024;

fn small_limit() -> Options {
    Options {
        max_content_size: MIB,
        ..Options::default()
    }
}

/// Client that talks to the loopback server directly, whatever the proxy environment.
fn direct_client() -> Client {
    match Client::builder().no_proxy().build() {
        Ok(client) => client,
        Err(err) => panic!("cannot build client: {err}"),
    }
}

fn fetch_from(url: &str, options: &Options) -> pagegrab::Result<String> {
    let fetcher = ReqwestFetcher::with_client(direct_client(), options);
    fetch_html(&fetcher, url)
}

#[test]
fn page_within_limit_is_returned() {
    let (url, server) = serve_once("text/html", Framing::Chunked, b"<p>small page</p>", 4096);

    match fetch_from(&url, &small_limit()) {
        Ok(html) => assert!(html.contains("<p>small page</p>")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
    assert_eq!(server.join().ok(), Some(4096));
}

#[test]
fn declared_oversized_page_is_fetch_failed() {
    let (url, _server) = serve_once("text/html", Framing::ContentLength, b"<p>big</p>", 2 * MIB);

    assert!(matches!(
        fetch_from(&url, &small_limit()),
        Err(Error::FetchFailed { .. })
    ));
}

#[test]
fn chunked_oversized_page_is_fetch_failed_without_full_read() {
    let body_len = 32 * MIB;
    let (url, server) = serve_once("text/html", Framing::Chunked, b"<p>big</p>", body_len);

    assert!(matches!(
        fetch_from(&url, &small_limit()),
        Err(Error::FetchFailed { .. })
    ));

    // Socket buffers absorb some data after the reader stops, but nowhere near the whole body.
    let sent = server.join().unwrap_or(usize::MAX);
    assert!(sent < body_len / 2, "server wrote {sent} bytes");
}

#[test]
fn image_probe_reads_only_the_header() {
    let body_len = 32 * MIB;
    let (url, server) = serve_once("image/gif", Framing::Chunked, GIF_1X1, body_len);

    let probe = HttpImageProbe::with_client(direct_client(), &Options::default());
    assert!(matches!(probe.dimensions(&url), Ok((1, 1))));
    drop(probe);

    let sent = server.join().unwrap_or(usize::MAX);
    assert!(sent < body_len / 2, "server wrote {sent} bytes");
}

#[test]
fn declared_oversized_image_is_unavailable() {
    let (url, _server) = serve_once("image/gif", Framing::ContentLength, GIF_1X1, 2 * MIB);

    let probe = HttpImageProbe::with_client(direct_client(), &small_limit());
    assert!(matches!(probe.dimensions(&url), Err(Error::ImageUnavailable(_))));
}
