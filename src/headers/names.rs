//! Compiled-in header table.
//!
//! Every row is emitted twice by `header_table!`: once as a `&'static str`
//! constant under its category module (`names::cors::ORIGIN`), and once as a
//! [`SeedEntry`] in [`SEED`], in table order. Header list follows
//! <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers>.

use crate::headers::category::Category;

/// `(wire_name, category, description)`
pub type SeedEntry = (&'static str, Category, &'static str);

macro_rules! header_table {
    ($(
        $module:ident => $category:ident {
            $( $name:ident = $wire:literal, $desc:literal; )*
        }
    )*) => {
        $(
            #[doc = concat!("Header names seeded under `", stringify!($module), "`.")]
            pub mod $module {
                $(
                    #[doc = $desc]
                    pub const $name: &str = $wire;
                )*
            }
        )*

        /// 种子表，保持原始顺序
        pub static SEED: &[SeedEntry] = &[
            $( $( ($wire, Category::$category, $desc), )* )*
        ];
    };
}

header_table! {
    authentication => Authentication {
        WWW_AUTHENTICATE = "www-authenticate", "Defines the authentication method that should be used to access a resource.";
        AUTHORIZATION = "authorization", "Contains the credentials to authenticate a user-agent with a server.";
        PROXY_AUTHENTICATE = "proxy-authenticate", "Defines the authentication method that should be used to access a resource behind a proxy server.";
        PROXY_AUTHORIZATION = "proxy-authorization", "Contains the credentials to authenticate a user agent with a proxy server.";
    }

    caching => Caching {
        AGE = "age", "The time, in seconds, that the object has been in a proxy cache.";
        CACHE_CONTROL = "cache-control", "Directives for caching mechanisms in both requests and responses.";
        CLEAR_SITE_DATA = "clear-site-data", "Clears browsing data (e.g. cookies, storage, cache) associated with the requesting website.";
        EXPIRES = "expires", "The date/time after which the response is considered stale.";
        PRAGMA = "pragma", "Implementation-specific header that may have various effects anywhere along the request-response chain. Used for backwards compatibility with HTTP/1.0 caches where the Cache-Control header is not yet present.";
        WARNING = "warning", "General warning information about possible problems.";
    }

    conditionals => Conditionals {
        LAST_MODIFIED = "last-modified", "The last modification date of the resource, used to compare several versions of the same resource. It is less accurate than ETag, but easier to calculate in some environments. Conditional requests using If-Modified-Since and If-Unmodified-Since use this value to change the behavior of the request.";
        ETAG = "etag", "A unique string identifying the version of the resource. Conditional requests using If-Match and If-None-Match use this value to change the behavior of the request.";
        IF_MATCH = "if-match", "Makes the request conditional, and applies the method only if the stored resource matches one of the given ETags.";
        IF_NONE_MATCH = "if-none-match", "Makes the request conditional, and applies the method only if the stored resource doesn't match any of the given ETags. This is used to update caches (for safe requests), or to prevent to upload a new resource when one already exists.";
        IF_MODIFIED_SINCE = "if-modified-since", "Makes the request conditional, and expects the entity to be transmitted only if it has been modified after the given date. This is used to transmit data only when the cache is out of date.";
        IF_UNMODIFIED_SINCE = "if-unmodified-since", "Makes the request conditional, and expects the entity to be transmitted only if it has not been modified after the given date. This ensures the coherence of a new fragment of a specific range with previous ones, or to implement an optimistic concurrency control system when modifying existing documents.";
        VARY = "vary", "Determines how to match request headers to decide whether a cached response can be used rather than requesting a fresh one from the origin server.";
    }

    connection_management => ConnectionManagement {
        CONNECTION = "connection", "Controls whether the network connection stays open after the current transaction finishes.";
        KEEP_ALIVE = "keep-alive", "Controls how long a persistent connection should stay open.";
    }

    content_negotiation => ContentNegotiation {
        ACCEPT = "accept", "Informs the server about the types of data that can be sent back.";
        ACCEPT_CHARSET = "accept-charset", "Which character encodings the client understands.";
        ACCEPT_ENCODING = "accept-encoding", "The encoding algorithm, usually a compression algorithm, that can be used on the resource sent back.";
        ACCEPT_LANGUAGE = "accept-language", "Informs the server about the human language the server is expected to send back. This is a hint and is not necessarily under the full control of the user: the server should always pay attention not to override an explicit user choice (like selecting a language from a dropdown).";
    }

    controls => Controls {
        EXPECT = "expect", "Indicates expectations that need to be fulfilled by the server to properly handle the request.";
    }

    cookies => Cookies {
        COOKIE = "cookie", "Contains stored HTTP cookies previously sent by the server with the Set-Cookie header.";
        SET_COOKIE = "set-cookie", "Send cookies from the server to the user-agent.";
    }

    cors => Cors {
        ACCESS_CONTROL_ALLOW_ORIGIN = "access-control-allow-origin", "Indicates whether the response can be shared.";
        ACCESS_CONTROL_ALLOW_CREDENTIALS = "access-control-allow-credentials", "Indicates whether the response to the request can be exposed when the credentials flag is true.";
        ACCESS_CONTROL_ALLOW_HEADERS = "access-control-allow-headers", "Used in response to a preflight request to indicate which HTTP headers can be used when making the actual request.";
        ACCESS_CONTROL_ALLOW_METHODS = "access-control-allow-methods", "Specifies the methods allowed when accessing the resource in response to a preflight request.";
        ACCESS_CONTROL_EXPOSE_HEADERS = "access-control-expose-headers", "Indicates which headers can be exposed as part of the response by listing their names.";
        ACCESS_CONTROL_MAX_AGE = "access-control-max-age", "Indicates how long the results of a preflight request can be cached.";
        ACCESS_CONTROL_REQUEST_HEADERS = "access-control-request-headers", "Used when issuing a preflight request to let the server know which HTTP headers will be used when the actual request is made.";
        ACCESS_CONTROL_REQUEST_METHOD = "access-control-request-method", "Used when issuing a preflight request to let the server know which HTTP method will be used when the actual request is made.";
        ORIGIN = "origin", "Indicates where a fetch originates from.";
        TIMING_ALLOW_ORIGIN = "timing-allow-origin", "Specifies origins that are allowed to see values of attributes retrieved via features of the Resource Timing API, which would otherwise be reported as zero due to cross-origin restrictions.";
    }

    body_information => BodyInformation {
        CONTENT_LENGTH = "content-length", "The size of the resource, in decimal number of bytes.";
        CONTENT_TYPE = "content-type", "Indicates the media type of the resource.";
        CONTENT_ENCODING = "content-encoding", "Used to specify the compression algorithm.";
        CONTENT_LANGUAGE = "content-language", "Describes the human language(s) intended for the audience, so that it allows a user to differentiate according to the users' own preferred language.";
        CONTENT_LOCATION = "content-location", "Indicates an alternate location for the returned data.";
    }

    do_not_track => DoNotTrack {
        DNT = "dnt", "Expresses the user's tracking preference.";
        TK = "tk", "Indicates the tracking status of the corresponding response.";
    }

    downloads => Downloads {
        CONTENT_DISPOSITION = "content-disposition", "Indicates if the resource transmitted should be displayed inline (default behavior without the header), or if it should be handled like a download and the browser should present a “Save As” dialog.";
    }

    message_body_information => MessageBodyInformation {
        CONTENT_LENGTH = "Content-Length", "The size of the resource, in decimal number of bytes.";
        CONTENT_TYPE = "Content-Type", "Indicates the media type of the resource.";
        CONTENT_ENCODING = "Content-Encoding", "Used to specify the compression algorithm.";
        CONTENT_LANGUAGE = "Content-Language", "Describes the human language(s) intended for the audience, so that it allows a user to differentiate according to the users' own preferred language.";
        CONTENT_LOCATION = "Content-Location", "Indicates an alternate location for the returned data.";
    }

    proxies => Proxies {
        FORWARDED = "Forwarded", "Contains information from the client-facing side of proxy servers that is altered or lost when a proxy is involved in the path of the request.";
        X_FORWARDED_FOR = "x-forwarded-for", "Identifies the originating IP addresses of a client connecting to a web server through an HTTP proxy or a load balancer.";
        X_FORWARDED_HOST = "x-forwarded-host", "Identifies the original host requested that a client used to connect to your proxy or load balancer.";
        X_FORWARDED_PROTO = "x-forwarded-proto", "Identifies the protocol (HTTP or HTTPS) that a client used to connect to your proxy or load balancer.";
        VIA = "via", "Added by proxies, both forward and reverse proxies, and can appear in the request headers and the response headers.";
    }

    redirects => Redirects {
        LOCATION = "location", "Indicates the URL to redirect a page to.";
    }

    request_context => RequestContext {
        FROM = "from", "Contains an Internet email address for a human user who controls the requesting user agent.";
        HOST = "host", "Specifies the domain name of the server (for virtual hosting), and (optionally) the TCP port number on which the server is listening.";
        REFERER = "referer", "The address of the previous web page from which a link to the currently requested page was followed.";
        REFERRER_POLICY = "referrer-policy", "Governs which referrer information sent in the Referer header should be included with requests made.";
        USER_AGENT = "user-agent", "Contains a characteristic string that allows the network protocol peers to identify the application type, operating system, software vendor or software version of the requesting software user agent. See also the Firefox user agent string reference.";
    }

    response_context => ResponseContext {
        ALLOW = "allow", "Lists the set of HTTP request methods support by a resource.";
        SERVER = "server", "Contains information about the software used by the origin server to handle the request.";
    }

    range_requests => RangeRequests {
        ACCEPT_RANGES = "accept-ranges", "Indicates if the server supports range requests, and if so in which unit the range can be expressed.";
        RANGE = "range", "Indicates the part of a document that the server should return.";
        IF_RANGE = "if-range", "Creates a conditional range request that is only fulfilled if the given etag or date matches the remote resource. Used to prevent downloading two ranges from incompatible version of the resource.";
        CONTENT_RANGE = "content-range", "Indicates where in a full body message a partial message belongs.";
    }

    security => Security {
        CROSS_ORIGIN_EMBEDDER_POLICY = "cross-origin-embedder-policy", "Allows a server to declare an embedder policy for a given document.";
        CROSS_ORIGIN_OPENER_POLICY = "cross-origin-opener-policy", "Prevents other domains from opening/controlling a window.";
        CROSS_ORIGIN_RESOURCE_POLICY = "cross-origin-resource-policy", "Prevents other domains from reading the response of the resources to which this header is applied.";
        CONTENT_SECURITY_POLICY = "content-security-policy", "Controls resources the user agent is allowed to load for a given page.";
        CONTENT_SECURITY_POLICY_REPORT_ONLY = "content-security-policy-report-only", "Allows web developers to experiment with policies by monitoring, but not enforcing, their effects. These violation reports consist of JSON documents sent via an HTTP POST request to the specified URI.";
        EXPECT_CT = "expect-ct", "Allows sites to opt in to reporting and/or enforcement of Certificate Transparency requirements, which prevents the use of misissued certificates for that site from going unnoticed. When a site enables the Expect-CT header, they are requesting that Chrome check that any certificate for that site appears in public CT logs.";
        FEATURE_POLICY = "feature-policy", "Provides a mechanism to allow and deny the use of browser features in its own frame, and in iframes that it embeds.";
        STRICT_TRANSPORT_SECURITY = "strict-transport-security", "Force communication using HTTPS instead of HTTP.";
        UPGRADE_INSECURE_REQUESTS = "upgrade-insecure-requests", "Sends a signal to the server expressing the client’s preference for an encrypted and authenticated response, and that it can successfully handle the upgrade-insecure-requests directive.";
        X_CONTENT_TYPE_OPTIONS = "x-content-type-options", "Disables MIME sniffing and forces browser to use the type given in Content-Type.";
        X_DOWNLOAD_OPTIONS = "x-download-options", "The X-Download-Options HTTP header indicates that the browser (Internet Explorer) should not display the option to \"Open\" a file that has been downloaded from an application, to prevent phishing attacks as the file otherwise would gain access to execute in the context of the application. (Note: related MS Edge bug).";
        X_FRAME_OPTIONS = "x-frame-options", "Indicates whether a browser should be allowed to render a page in a <frame>, <iframe>, <embed> or <object>.";
        X_PERMITTED_CROSS_DOMAIN_POLICIES = "x-permitted-cross-domain-policies", "Specifies if a cross-domain policy file (crossdomain.xml) is allowed. The file may define a policy to grant clients, such as Adobe's Flash Player, Adobe Acrobat, Microsoft Silverlight, or Apache Flex, permission to handle data across domains that would otherwise be restricted due to the Same-Origin Policy. See the Cross-domain Policy File Specification for more information.";
        X_POWERED_BY = "x-powered-by", "May be set by hosting environments or other frameworks and contains information about them while not providing any usefulness to the application or its visitors. Unset this header to avoid exposing potential vulnerabilities.";
        X_XSS_PROTECTION = "x-xss-protection", "Enables cross-site scripting filtering.";
    }

    server_sent_events => ServerSentEvents {
        LAST_EVENT_ID = "Last-Event-ID", "";
        NEL = "nel", "Defines a mechanism that enables developers to declare a network error reporting policy.";
        PING_FROM = "ping-from", "";
        PING_TO = "ping-to", "";
        REPORT_TO = "report-to", "Used to specify a server endpoint for the browser to send warning and error reports to.";
    }

    transfer_coding => TransferCoding {
        TRANSFER_ENCODING = "transfer-encoding", "Specifies the form of encoding used to safely transfer the entity to the user.";
        TE = "te", "Specifies the transfer encodings the user agent is willing to accept.";
        TRAILER = "trailer", "Allows the sender to include additional fields at the end of chunked message.";
    }

    websockets => Websockets {
        SEC_WEBSOCKET_KEY = "sec-websocket-key", "";
        SEC_WEBSOCKET_EXTENSIONS = "sec-websocket-extensions", "";
        SEC_WEBSOCKET_ACCEPT = "sec-websocket-accept", "";
        SEC_WEBSOCKET_PROTOCOL = "sec-websocket-protocol", "";
        SEC_WEBSOCKET_VERSION = "sec-websocket-version", "";
    }

    other => Other {
        ACCEPT_PUSH_POLICY = "accept-push-policy", "A client can express the desired push policy for a request by sending an Accept-Push-Policy header field in the request.";
        ACCEPT_SIGNATURE = "accept-signature", "A client can send the Accept-Signature header field to indicate intention to take advantage of any available signatures and to indicate what kinds of signatures it supports.";
        ALT_SVC = "alt-svc", "Used to list alternate ways to reach this service.";
        DATE = "date", "Contains the date and time at which the message was originated.";
        LARGE_ALLOCATION = "large-allocation", "Tells the browser that the page being loaded is going to want to perform a large allocation.";
        LINK = "link", "The Link entity-header field provides a means for serialising one or more links in HTTP headers. It is semantically equivalent to the HTML <link> element.";
        PUSH_POLICY = "push-policy", "A Push-Policy defines the server behaviour regarding push when processing a request.";
        RETRY_AFTER = "retry-after", "Indicates how long the user agent should wait before making a follow-up request.";
        SIGNATURE = "signature", "The Signature header field conveys a list of signatures for an exchange, each one accompanied by information about how to determine the authority of and refresh that signature.";
        SIGNED_HEADERS = "signed-headers", "The Signed-Headers header field identifies an ordered list of response header fields to include in a signature.";
        SERVER_TIMING = "server-timing", "Communicates one or more metrics and descriptions for the given request-response cycle.";
        SERVICE_WORKER_ALLOWED = "service-worker-allowed", "Used to remove the path restriction by including this header in the response of the Service Worker script.";
        SOURCEMAP = "sourcemap", "Links generated code to a source map.";
        UPGRADE = "upgrade", "The relevant RFC document for the Upgrade header field is RFC 7230, section 6.7. The standard establishes rules for upgrading or changing to a different protocol on the current client, server, transport protocol connection. For example, this header standard allows a client to change from HTTP 1.1 to HTTP 2.0, assuming the server decides to acknowledge and implement the Upgrade header field. Neither party is required to accept the terms specified in the Upgrade header field. It can be used in both client and server headers. If the Upgrade header field is specified, then the sender MUST also send the Connection header field with the upgrade option specified. For details on the Connection header field please see section 6.1 of the aforementioned RFC.";
        X_DNS_PREFETCH_CONTROL = "x-dns-prefetch-control", "Controls DNS prefetching, a feature by which browsers proactively perform domain name resolution on both links that the user may choose to follow as well as URLs for items referenced by the document, including images, CSS, JavaScript, and so forth.";
        X_PINGBACK = "x-pingback", "";
        X_REQUESTED_WITH = "x-requested-with", "";
        X_ROBOTS_TAG = "x-robots-tag", "The X-Robots-Tag HTTP header is used to indicate how a web page is to be indexed within public search engine results. The header is effectively equivalent to <meta name=\"robots\" content=\"...\">.";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_seed_rows() {
        assert_eq!(authentication::AUTHORIZATION, "authorization");
        assert_eq!(cors::ACCESS_CONTROL_REQUEST_HEADERS, "access-control-request-headers");
        assert_eq!(message_body_information::CONTENT_LENGTH, "Content-Length");
        assert_eq!(proxies::FORWARDED, "Forwarded");
        assert_eq!(other::LINK, "link");

        for name in [caching::AGE, websockets::SEC_WEBSOCKET_KEY, transfer_coding::TE] {
            assert!(SEED.iter().any(|(wire, _, _)| *wire == name), "{} 不在种子表中", name);
        }
    }

    #[test]
    fn test_seed_covers_every_category() {
        for c in Category::ALL {
            assert!(SEED.iter().any(|(_, cat, _)| *cat == c), "{} 没有条目", c);
        }
    }

    #[test]
    fn test_seed_order_starts_with_authentication() {
        let (wire, category, description) = SEED[0];
        assert_eq!(wire, authentication::WWW_AUTHENTICATE);
        assert_eq!(category, Category::Authentication);
        assert!(!description.is_empty());
        assert_eq!(SEED.len(), 112);
    }
}
