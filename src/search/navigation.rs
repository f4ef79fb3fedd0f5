//! Navigation bridge: the capability to change and read the page address.
//!
//! The search view never touches a global location object. It is handed a
//! [`NavigationBridge`] and issues exactly one `navigate_to` per input.
//!
//! Address shape:
//!
//! | query     | address (base route `/notes/`) |
//! |-----------|--------------------------------|
//! | `""`      | `/notes/`                      |
//! | `"rust"`  | `/notes/?search=rust`          |
//! | `"a b&c"` | `/notes/?search=a%20b%26c`     |

use thiserror::Error;

/// Why an address update was dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No interactive address to update (e.g. a one-shot render).
    #[error("navigation is unavailable in this context")]
    Unavailable,

    #[error("navigation to `{address}` rejected: {reason}")]
    Rejected { address: String, reason: String },
}

/// Change the visible address without a reload, and read its query.
pub trait NavigationBridge {
    /// Replace the current address.
    fn navigate_to(&mut self, address: &str) -> Result<(), NavigationError>;

    /// The search text carried by the current address, if any.
    fn read_current_query(&self) -> Option<String>;
}

impl<B: NavigationBridge + ?Sized> NavigationBridge for &mut B {
    fn navigate_to(&mut self, address: &str) -> Result<(), NavigationError> {
        (**self).navigate_to(address)
    }

    fn read_current_query(&self) -> Option<String> {
        (**self).read_current_query()
    }
}

// ============================================================================
// Address Helpers
// ============================================================================

/// Address mirroring `text`: the bare route when empty, otherwise
/// `{base_route}?{param}={text}` with the text percent-encoded.
pub fn search_address(base_route: &str, param: &str, text: &str) -> String {
    if text.is_empty() {
        base_route.to_string()
    } else {
        format!("{base_route}?{param}={}", urlencoding::encode(text))
    }
}

/// Extract `param` from an address's query string.
///
/// `+` is read as a space (HTML forms submit that way). Returns `None` when
/// the parameter is absent; an empty value is `Some("")`.
pub fn query_from_address(address: &str, param: &str) -> Option<String> {
    let (_, query) = address.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == param).then(|| decode_component(value))
    })
}

/// The address without its query string or fragment.
pub fn address_path(address: &str) -> &str {
    address.split(['?', '#']).next().unwrap_or(address)
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(value)
}

// ============================================================================
// Bridges
// ============================================================================

/// In-memory address history: the terminal front-end's "address bar".
#[derive(Debug, Clone)]
pub struct HistoryBridge {
    param: String,
    history: Vec<String>,
}

impl HistoryBridge {
    pub fn new(initial: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            history: vec![initial.into()],
        }
    }

    /// The address currently shown.
    pub fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    /// Every address visited, oldest first (the initial one included).
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl NavigationBridge for HistoryBridge {
    fn navigate_to(&mut self, address: &str) -> Result<(), NavigationError> {
        if !address.starts_with('/') {
            return Err(NavigationError::Rejected {
                address: address.to_string(),
                reason: "address must start with `/`".into(),
            });
        }
        self.history.push(address.to_string());
        Ok(())
    }

    fn read_current_query(&self) -> Option<String> {
        query_from_address(self.current(), &self.param)
    }
}

/// Bridge for a single server-side render.
///
/// The address comes from the incoming request and can be read, but there is
/// no browser to update, so navigation is refused and the view keeps going.
#[derive(Debug, Clone)]
pub struct RequestBridge {
    address: String,
    param: String,
}

impl RequestBridge {
    pub fn new(address: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            param: param.into(),
        }
    }
}

impl NavigationBridge for RequestBridge {
    fn navigate_to(&mut self, _address: &str) -> Result<(), NavigationError> {
        Err(NavigationError::Unavailable)
    }

    fn read_current_query(&self) -> Option<String> {
        query_from_address(&self.address, &self.param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_address_empty_is_base_route() {
        assert_eq!(search_address("/", "search", ""), "/");
        assert_eq!(search_address("/notes/", "search", ""), "/notes/");
    }

    #[test]
    fn test_search_address_with_text() {
        assert_eq!(search_address("/", "search", "rust"), "/?search=rust");
        assert_eq!(search_address("/notes/", "q", "2022"), "/notes/?q=2022");
    }

    #[test]
    fn test_search_address_encodes_text() {
        assert_eq!(
            search_address("/", "search", "a b&c"),
            "/?search=a%20b%26c"
        );
        assert_eq!(search_address("/", "search", "é"), "/?search=%C3%A9");
    }

    #[test]
    fn test_query_from_address() {
        assert_eq!(
            query_from_address("/?search=rust", "search").as_deref(),
            Some("rust")
        );
        assert_eq!(
            query_from_address("/notes/?page=2&search=go%20basics#top", "search").as_deref(),
            Some("go basics")
        );
        assert_eq!(
            query_from_address("/?search=rust+notes", "search").as_deref(),
            Some("rust notes")
        );
    }

    #[test]
    fn test_query_from_address_absent() {
        assert_eq!(query_from_address("/", "search"), None);
        assert_eq!(query_from_address("/?q=rust", "search"), None);
        assert_eq!(query_from_address("/?search", "search").as_deref(), Some(""));
    }

    #[test]
    fn test_address_round_trip_through_encoding() {
        let text = "50% off & more";
        let address = search_address("/", "search", text);
        assert_eq!(query_from_address(&address, "search").as_deref(), Some(text));
    }

    #[test]
    fn test_address_path() {
        assert_eq!(address_path("/notes/?search=x"), "/notes/");
        assert_eq!(address_path("/notes/#top"), "/notes/");
        assert_eq!(address_path("/"), "/");
    }

    #[test]
    fn test_history_bridge_records_navigation() {
        let mut bridge = HistoryBridge::new("/", "search");
        assert_eq!(bridge.read_current_query(), None);

        bridge.navigate_to("/?search=rust").unwrap();
        assert_eq!(bridge.current(), "/?search=rust");
        assert_eq!(bridge.read_current_query().as_deref(), Some("rust"));

        bridge.navigate_to("/").unwrap();
        assert_eq!(bridge.history(), ["/", "/?search=rust", "/"]);
        assert_eq!(bridge.read_current_query(), None);
    }

    #[test]
    fn test_history_bridge_rejects_relative_address() {
        let mut bridge = HistoryBridge::new("/", "search");
        let err = bridge.navigate_to("?search=rust").unwrap_err();

        assert!(matches!(err, NavigationError::Rejected { .. }));
        assert_eq!(bridge.history(), ["/"]);
    }

    #[test]
    fn test_request_bridge_reads_but_refuses_navigation() {
        let mut bridge = RequestBridge::new("/notes/?search=go", "search");
        assert_eq!(bridge.read_current_query().as_deref(), Some("go"));
        assert_eq!(
            bridge.navigate_to("/notes/"),
            Err(NavigationError::Unavailable)
        );
    }
}
