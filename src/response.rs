//! Response header sink used to emit preload hints.

use anyhow::Result;

use crate::models::PreloadAsset;
use crate::resolve::AssetResolver;

/// Receives HTTP headers produced during injection.
pub trait ResponseSink {
  /// Append a header to the outgoing response.
  fn add_header(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Sink collecting headers in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectedHeaders {
  headers: Vec<(String, String)>,
}

impl CollectedHeaders {
  /// All collected headers in the order they were added.
  pub fn headers(&self) -> &[(String, String)] {
    &self.headers
  }

  /// First value collected for the named header, if any.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(header, _)| header.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

impl ResponseSink for CollectedHeaders {
  fn add_header(&mut self, name: &str, value: &str) -> Result<()> {
    self.headers.push((name.to_string(), value.to_string()));
    Ok(())
  }
}

/// Sink discarding every header, for hosts without an HTTP response in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHeaders;

impl ResponseSink for DiscardHeaders {
  fn add_header(&mut self, _name: &str, _value: &str) -> Result<()> {
    Ok(())
  }
}

/// Format the `Link` header value for the queued preload assets.
pub fn preload_header_value(assets: &[PreloadAsset], resolver: &dyn AssetResolver) -> String {
  assets
    .iter()
    .map(|asset| {
      format!(
        "<{}>; rel=preload; as={}",
        resolver.url_for(&asset.file),
        asset.kind.as_attr()
      )
    })
    .collect::<Vec<_>>()
    .join(",")
}
