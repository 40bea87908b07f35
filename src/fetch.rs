//! Search page retrieval

use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::{Error, FetchError};

/// Anything that can hand back the raw HTML of the search page.
pub trait PageSource {
    fn fetch_page(&self) -> Result<String, FetchError>;
}

/// Fetches the page with a single blocking GET using ureq
pub struct HttpFetcher {
    agent: ureq::Agent,
    config: ScraperConfig,
}

impl HttpFetcher {
    /// Build an agent from `config`; fails if the search URL does not parse
    pub fn new(config: &ScraperConfig) -> Result<Self, Error> {
        url::Url::parse(&config.search_url)?;

        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .user_agent(config.user_agent.as_str())
                .http_status_as_error(false)
                .build(),
        );

        Ok(Self {
            agent,
            config: config.clone(),
        })
    }

    /// URL this fetcher requests
    pub fn url(&self) -> &str {
        &self.config.search_url
    }

    fn transport_error(&self, e: ureq::Error) -> FetchError {
        let url = self.url().to_string();
        match e {
            ureq::Error::Timeout(_) => FetchError::Timeout {
                url,
                after: self.config.timeout,
            },
            other => FetchError::Transport {
                url,
                source: Box::new(other),
            },
        }
    }
}

impl PageSource for HttpFetcher {
    fn fetch_page(&self) -> Result<String, FetchError> {
        let url = self.url();
        info!(%url, "fetching search page");

        let resp = self
            .agent
            .get(url)
            .header("Accept", self.config.accept.as_str())
            .header("Accept-Language", self.config.accept_language.as_str())
            .call()
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success response");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.into_body()
            .read_to_string()
            .map_err(|e| FetchError::Body {
                url: url.to_string(),
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    const OK_HELLO: &str =
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello";
    const UNAVAILABLE: &str =
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    /// Accept one connection on a local port, hand back the request head,
    /// then answer with `response` after `delay`.
    fn serve_once(response: &'static str, delay: Duration) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/items/q-car-cover", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
            thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
        });

        (url, rx)
    }

    fn fetcher_for(url: &str) -> HttpFetcher {
        HttpFetcher::new(&ScraperConfig::default().with_search_url(url)).unwrap()
    }

    fn header_value(head: &str, name: &str) -> Option<String> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    #[test]
    fn test_fetch_returns_body() {
        let (url, _head) = serve_once(OK_HELLO, Duration::ZERO);
        let body = fetcher_for(&url).fetch_page().unwrap();
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_fetch_non_success_status() {
        let (url, _head) = serve_once(UNAVAILABLE, Duration::ZERO);
        match fetcher_for(&url).fetch_page() {
            Err(FetchError::Status { status, url: failed }) => {
                assert_eq!(status, 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_times_out() {
        let (url, _head) = serve_once(OK_HELLO, Duration::from_secs(3));
        let config = ScraperConfig::default()
            .with_search_url(url.as_str())
            .with_timeout(Duration::from_secs(1));
        let fetcher = HttpFetcher::new(&config).unwrap();

        match fetcher.fetch_page() {
            Err(FetchError::Timeout { after, .. }) => assert_eq!(after, Duration::from_secs(1)),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_sends_browser_headers() {
        let (url, head) = serve_once(OK_HELLO, Duration::ZERO);
        fetcher_for(&url).fetch_page().unwrap();

        let head = head.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(head.starts_with("GET /items/q-car-cover HTTP/1.1"));

        let defaults = ScraperConfig::default();
        assert_eq!(header_value(&head, "user-agent"), Some(defaults.user_agent));
        assert_eq!(header_value(&head, "accept"), Some(defaults.accept));
        assert_eq!(
            header_value(&head, "accept-language"),
            Some(defaults.accept_language)
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        let config = ScraperConfig::default().with_search_url("not a url");
        let result = HttpFetcher::new(&config);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_accepts_default_url() {
        let fetcher = HttpFetcher::new(&ScraperConfig::default()).unwrap();
        assert_eq!(fetcher.url(), crate::config::SEARCH_URL);
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status {
            status: 403,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 403 for https://example.com/");

        let err = FetchError::Timeout {
            url: "https://example.com/".to_string(),
            after: Duration::from_secs(10),
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com/ timed out after 10s"
        );
    }
}
