//! Base resource contract shared by the option endpoints
//!
//! Purely declarative: which representation a resource produces, who
//! may call it and whether it accepts a request body. The HTTP adapter
//! enforces these declarations.

/// Media type of every option list response
pub const APPLICATION_JSON: &str = "application/json";

/// Access policy of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// No credentials required
    Anonymous,
    /// HTTP Basic credentials required
    AuthcBasic,
}

/// Static description of an HTTP resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    /// Representations the resource can produce
    pub variants: &'static [&'static str],
    pub protection: Protection,
    /// Whether requests may carry a payload
    pub accepts_payload: bool,
}

impl ResourceDescriptor {
    /// Option endpoints: JSON only, Basic auth, no payload
    ///
    /// RunDeck must send credentials; anonymous access is not supported.
    pub const fn option_endpoint(uri: &'static str) -> Self {
        Self {
            uri,
            variants: &[APPLICATION_JSON],
            protection: Protection::AuthcBasic,
            accepts_payload: false,
        }
    }

    /// Whether an `Accept` header value admits one of the declared variants
    ///
    /// A missing header accepts anything. Quality values are ignored
    /// except that `q=0` excludes a range.
    pub fn accepts(&self, accept: Option<&str>) -> bool {
        let Some(accept) = accept else {
            return true;
        };

        accept.split(',').any(|range| {
            let mut parts = range.split(';').map(str::trim);
            let media = parts.next().unwrap_or_default().to_ascii_lowercase();
            let excluded = parts.any(|p| {
                p.strip_prefix("q=")
                    .and_then(|q| q.parse::<f32>().ok())
                    .is_some_and(|q| q == 0.0)
            });
            !excluded && self.variants.iter().any(|v| media_matches(&media, v))
        })
    }
}

fn media_matches(range: &str, media: &str) -> bool {
    if range == "*/*" || range == media {
        return true;
    }
    match (range.split_once('/'), media.split_once('/')) {
        (Some((range_type, "*")), Some((media_type, _))) => range_type == media_type,
        _ => false,
    }
}
