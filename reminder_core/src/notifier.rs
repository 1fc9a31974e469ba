//! Card delivery: build the payload, POST it once, classify the result.

use crate::card::{CardStyle, Urgency, WebhookMessage};
use crate::error::NotifyError;
use reminder_traits::Transport;
use tracing::{debug, error, info, warn};

/// A completed delivery that got a 2xx status.
///
/// Only the HTTP status is inspected. Feishu custom bots report most
/// rejections (bad signature, malformed card, rate limit) as HTTP 200 with a
/// non-zero `code` in the JSON body, so those also land here; the body is
/// logged at debug level by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
}

pub struct Notifier<T> {
    endpoint: Option<String>,
    transport: T,
    style: CardStyle,
}

impl<T: Transport> Notifier<T> {
    /// A blank endpoint is treated as unset.
    pub fn new(endpoint: Option<String>, transport: T, style: CardStyle) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Self {
            endpoint,
            transport,
            style,
        }
    }

    pub fn has_endpoint(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// The payload `notify` would send, without sending it.
    pub fn preview(&self, title: &str, body: &str, urgency: Urgency) -> WebhookMessage {
        WebhookMessage::interactive(&self.style, title, body, urgency)
    }

    pub fn notify(&self, title: &str, body: &str, urgency: Urgency) -> Result<Delivery, NotifyError> {
        let Some(url) = self.endpoint.as_deref() else {
            warn!("no webhook endpoint configured, skipping delivery");
            return Err(NotifyError::MissingEndpoint);
        };

        let payload = self
            .preview(title, body, urgency)
            .to_value()
            .map_err(|e| NotifyError::Transport(format!("encode card: {e}")))?;
        debug!(%payload, "posting card");

        match self.transport.post_json(url, &payload) {
            Ok(status) if (200..300).contains(&status) => {
                info!(status, title, "card delivered");
                Ok(Delivery { status })
            }
            Ok(status) => {
                error!(status, title, "webhook rejected card");
                Err(NotifyError::Rejected { status })
            }
            Err(e) => {
                error!(error = %e, title, "card delivery failed");
                Err(NotifyError::Transport(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::RecordingTransport;

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let t = RecordingTransport::ok();
        let n = Notifier::new(Some("   ".into()), &t, CardStyle::default());
        assert!(!n.has_endpoint());
        assert_eq!(
            n.notify("t", "b", Urgency::Ordinary),
            Err(NotifyError::MissingEndpoint)
        );
        assert_eq!(t.calls(), 0);
    }

    #[test]
    fn endpoint_is_trimmed() {
        let t = RecordingTransport::ok();
        let n = Notifier::new(
            Some(" https://hook.example/abc \n".into()),
            &t,
            CardStyle::default(),
        );
        n.notify("t", "b", Urgency::Ordinary).unwrap();
        assert_eq!(t.last_url().as_deref(), Some("https://hook.example/abc"));
    }
}
