//! Interactive card payload for the group webhook.
//!
//! Wire shape:
//! `{msg_type, card: {config: {wide_screen_mode}, header: {template, title}, elements: [div, hr, note]}}`

use serde::Serialize;

/// Header template color. Serialized as the lowercase platform name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderColor {
    Blue,
    Wathet,
    Turquoise,
    Green,
    Yellow,
    Orange,
    Red,
    Carmine,
    Violet,
    Purple,
    Indigo,
    Grey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Ordinary,
    /// Check-in follow-ups.
    Escalated,
}

/// Fixed presentation settings shared by every card of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub title_prefix: String,
    pub closing_remark: String,
    pub wide_screen: bool,
    pub ordinary_color: HeaderColor,
    pub escalated_color: HeaderColor,
}

impl CardStyle {
    pub fn color_for(&self, urgency: Urgency) -> HeaderColor {
        match urgency {
            Urgency::Ordinary => self.ordinary_color,
            Urgency::Escalated => self.escalated_color,
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        (&reminder_config::CardCfg::default()).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTag {
    PlainText,
    LarkMd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
    pub tag: TextTag,
}

impl Text {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::PlainText,
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::LarkMd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Element {
    Div { text: Text },
    Hr,
    Note { elements: Vec<Text> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardConfig {
    pub wide_screen_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub template: HeaderColor,
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub config: CardConfig,
    pub header: Header,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub msg_type: &'static str,
    pub card: Card,
}

impl WebhookMessage {
    /// Header, markdown body, separator, closing note.
    pub fn interactive(style: &CardStyle, title: &str, body: &str, urgency: Urgency) -> Self {
        Self {
            msg_type: "interactive",
            card: Card {
                config: CardConfig {
                    wide_screen_mode: style.wide_screen,
                },
                header: Header {
                    template: style.color_for(urgency),
                    title: Text::plain(format!("{}{}", style.title_prefix, title)),
                },
                elements: vec![
                    Element::Div {
                        text: Text::markdown(body),
                    },
                    Element::Hr,
                    Element::Note {
                        elements: vec![Text::plain(style.closing_remark.clone())],
                    },
                ],
            },
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
