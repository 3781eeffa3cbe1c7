//! Upstream lookup URL construction.

use anyhow::Context;
use url::Url;

use crate::config::LOOKUP_FIELDS;
use crate::lookup::validate_query;

/// Builds the upstream request URL for `query`.
///
/// `None` (or an empty query) produces the self-lookup URL, which asks the
/// service to geolocate the address the request comes from. The `fields`
/// parameter always lists every field `IpInfoRecord` and `ErrorRecord` carry.
///
/// The query always occupies the single path segment after `json`.
///
/// # Errors
///
/// Returns `url::ParseError` if `base` is not an absolute URL that can carry
/// a path.
///
/// # Examples
///
/// ```
/// use ip_lookup::lookup_url;
///
/// let url = lookup_url("http://ip-api.com", Some("8.8.8.8")).unwrap();
/// assert!(url.as_str().starts_with("http://ip-api.com/json/8.8.8.8?fields=status,message,"));
/// ```
pub fn lookup_url(base: &str, query: Option<&str>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    let query = query.map(str::trim).unwrap_or_default();

    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("json")
        .push(query);
    url.set_query(Some(&format!("fields={}", LOOKUP_FIELDS.join(","))));
    Ok(url)
}

/// Validates an optional IP argument and builds its lookup URL against `base`.
///
/// # Errors
///
/// Fails if `ip` is not an IP address literal or `base` is not a usable URL.
pub fn request_url(ip: Option<&str>, base: &str) -> anyhow::Result<Url> {
    let query = ip.map(validate_query).transpose()?.map(|ip| ip.to_string());
    lookup_url(base, query.as_deref()).with_context(|| format!("Invalid base URL: {base}"))
}
