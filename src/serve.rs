//! Listing server.
//!
//! A small `tiny_http` server that renders the post listing with the search
//! query taken from the request address, so `/?search=rust` is a shareable,
//! reloadable link to a filtered listing.
//!
//! # Routes
//!
//! | Route (base `/notes/`)          | Response                         |
//! |---------------------------------|----------------------------------|
//! | `GET /notes/`                   | full listing page                |
//! | `GET /notes/?search=rust`       | listing filtered by `rust`       |
//! | `GET /notes/api/search?search=` | visible previews as JSON         |
//! | anything else                   | 404                              |
//!
//! Each request mounts a fresh search view over the shared collection; the
//! view seeds its query from the request address and never navigates.

use crate::{
    config::SiteConfig,
    log,
    post::PostCollection,
    render::{HtmlListing, NoRender},
    search::{RequestBridge, SearchView, ViewOptions, address_path},
};
use anyhow::{Context, Result};
use std::{
    io::Cursor,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the listing server. Blocks until Ctrl+C is received.
pub fn serve_listing(config: &SiteConfig, posts: &PostCollection) -> Result<()> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}{}", addr, config.base_route());

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config, posts) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

/// A rendered response, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Page {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Page {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json; charset=utf-8",
            body,
        }
    }

    fn plain(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

fn handle_request(request: Request, config: &SiteConfig, posts: &PostCollection) -> Result<()> {
    let page = respond(request.method(), request.url(), config, posts)?;

    let content_type = Header::from_bytes("Content-Type", page.content_type)
        .map_err(|()| anyhow::anyhow!("invalid Content-Type header"))?;
    let length = page.body.len();
    let response = Response::new(
        StatusCode(page.status),
        vec![content_type],
        Cursor::new(page.body.into_bytes()),
        Some(length),
        None,
    );
    request.respond(response)?;
    Ok(())
}

/// Only GET and HEAD are routed.
fn respond(method: &Method, url: &str, config: &SiteConfig, posts: &PostCollection) -> Result<Page> {
    match method {
        Method::Get | Method::Head => route(url, config, posts),
        _ => Ok(Page::plain(405, "405 Method Not Allowed")),
    }
}

/// Resolve a request address to a page.
fn route(url: &str, config: &SiteConfig, posts: &PostCollection) -> Result<Page> {
    let base = config.base_route();
    let Ok(path) = urlencoding::decode(address_path(url)) else {
        return Ok(not_found());
    };

    let options = ViewOptions {
        seed_from_address: true,
        ..ViewOptions::from_config(config)
    };
    let bridge = RequestBridge::new(url, &config.search.param);

    let is_listing = path == base || (base != "/" && path == base.trim_end_matches('/'));
    if is_listing {
        let view = SearchView::mount(posts, bridge, HtmlListing::new(config), options);
        log!("serve"; "{url} → {} of {} posts", view.visible().len(), posts.len());
        let (_, listing) = view.into_parts();
        return Ok(Page::html(listing.into_page()));
    }

    if path == format!("{base}api/search") {
        let view = SearchView::mount(posts, bridge, NoRender, options);
        let json = serde_json::to_string_pretty(&view.previews())?;
        return Ok(Page::json(json));
    }

    Ok(not_found())
}

fn not_found() -> Page {
    Page::plain(404, "404 Not Found")
}
