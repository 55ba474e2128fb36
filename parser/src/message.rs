use crate::line::HeaderField;

/// Header lookups shared by parsed request and response heads.
///
/// Lookups ignore ASCII case regardless of the parser's name matching mode.
pub trait HttpHead {
    fn headers(&self) -> &[HeaderField];

    fn get_headers(&self, name: &str) -> Vec<&HeaderField> {
        self.headers()
            .iter()
            .filter(|header| header.name.eq_ignore_ascii_case(name))
            .collect()
    }

    fn get_first_header(&self, name: &str) -> Option<&HeaderField> {
        self.headers()
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
    }

    fn get_last_header(&self, name: &str) -> Option<&HeaderField> {
        self.headers()
            .iter()
            .rev()
            .find(|header| header.name.eq_ignore_ascii_case(name))
    }
}
