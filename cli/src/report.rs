use http_head::{
    BodyStatus, CacheControlDirectives, HeadParser, HostField, MessageKind, ParsedRequestHead,
    ParsedResponseHead, Result, split_head_body,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Request {
        head: ParsedRequestHead,
        host_field: Option<HostField>,
        body_len: usize,
    },
    Response {
        head: ParsedResponseHead,
        cache: Option<CacheControlDirectives>,
        body_len: usize,
        body_status: BodyStatus,
    },
}

pub fn build_report(buffer: &[u8], kind: MessageKind, parser: &HeadParser) -> Result<Report> {
    let split = split_head_body(buffer)?;
    let body_len = split.body.len();

    let report = match kind {
        MessageKind::Request => {
            let head = parser.parse_request_head(&split.head)?;
            Report::Request {
                host_field: head.host_field(),
                head,
                body_len,
            }
        }
        MessageKind::Response => {
            let head = parser.parse_response_head(&split.head)?;
            Report::Response {
                cache: head.cache_directives(),
                body_status: head.body_status(&split.body),
                head,
                body_len,
            }
        }
    };

    Ok(report)
}
