pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// One-shot JSON delivery to a webhook endpoint.
///
/// Returns the HTTP status code on any completed exchange; the caller decides
/// what counts as success. Transport-level failures are returned as errors.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<u16, Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        (**self).post_json(url, body)
    }
}
