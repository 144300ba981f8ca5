use std::{ fmt, str::FromStr };

use serde::{ Deserialize, Serialize };

use crate::error::Error;

/// Header 语义分类，固定集合
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Authentication = 0,
    Caching,
    Conditionals,
    ConnectionManagement,
    ContentNegotiation,
    Controls,
    Cookies,
    Cors,
    BodyInformation,
    DoNotTrack,
    Downloads,
    MessageBodyInformation,
    Proxies,
    Redirects,
    RequestContext,
    ResponseContext,
    RangeRequests,
    Security,
    ServerSentEvents,
    TransferCoding,
    Websockets,
    Other,
}

pub const CATEGORY_COUNT: usize = 22;

impl Category {
    /// Enumeration order, also the order of `Registry::list_all`.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Authentication,
        Category::Caching,
        Category::Conditionals,
        Category::ConnectionManagement,
        Category::ContentNegotiation,
        Category::Controls,
        Category::Cookies,
        Category::Cors,
        Category::BodyInformation,
        Category::DoNotTrack,
        Category::Downloads,
        Category::MessageBodyInformation,
        Category::Proxies,
        Category::Redirects,
        Category::RequestContext,
        Category::ResponseContext,
        Category::RangeRequests,
        Category::Security,
        Category::ServerSentEvents,
        Category::TransferCoding,
        Category::Websockets,
        Category::Other,
    ];

    /// 枚举转 &str
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Authentication => "authentication",
            Category::Caching => "caching",
            Category::Conditionals => "conditionals",
            Category::ConnectionManagement => "connection_management",
            Category::ContentNegotiation => "content_negotiation",
            Category::Controls => "controls",
            Category::Cookies => "cookies",
            Category::Cors => "cors",
            Category::BodyInformation => "body_information",
            Category::DoNotTrack => "do_not_track",
            Category::Downloads => "downloads",
            Category::MessageBodyInformation => "message_body_information",
            Category::Proxies => "proxies",
            Category::Redirects => "redirects",
            Category::RequestContext => "request_context",
            Category::ResponseContext => "response_context",
            Category::RangeRequests => "range_requests",
            Category::Security => "security",
            Category::ServerSentEvents => "server_sent_events",
            Category::TransferCoding => "transfer_coding",
            Category::Websockets => "websockets",
            Category::Other => "other",
        }
    }

    /// 大小写不敏感匹配字符串到枚举，`-` 等同于 `_`
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Position in `Category::ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_str(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
