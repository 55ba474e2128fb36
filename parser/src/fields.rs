use num_traits::{Bounded, Zero};
use serde::Serialize;

const MAX_AGE: &str = "max-age=";

/// `Host` header value split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostField {
    pub hostname: String,
    pub port: Option<u16>,
}

/// The `Cache-Control` directives this crate models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheControlDirectives {
    pub max_age: Option<u64>,
}

/// Splits a `Host` value into hostname and optional port.
///
/// The split happens at the first `:`, except for a bracketed IPv6 literal
/// where it happens after the closing `]`. A literal followed by anything but
/// `:` is kept whole as the hostname. A colon with nothing after it leaves the
/// port unset; a non-numeric port decodes to 0.
#[must_use]
pub fn parse_host_field(host: &str) -> HostField {
    let split = match host.find(']') {
        Some(end) if host.starts_with('[') => {
            let (literal, after) = host.split_at(end + 1);
            after.strip_prefix(':').map(|port| (literal, Some(port)))
        }
        _ => host.split_once(':').map(|(name, port)| (name, Some(port))),
    };

    match split {
        Some((hostname, port)) => HostField {
            hostname: hostname.to_string(),
            port: port
                .filter(|port| !port.is_empty())
                .map(|port| lenient_decimal(port.as_bytes())),
        },
        None => HostField {
            hostname: host.to_string(),
            port: None,
        },
    }
}

/// Extracts `max-age` from a `Cache-Control` value.
#[must_use]
pub fn parse_cache_control(value: &str) -> CacheControlDirectives {
    let max_age = value
        .find(MAX_AGE)
        .map(|position| &value[position + MAX_AGE.len()..])
        .filter(|rest| !rest.is_empty())
        .map(|rest| lenient_decimal(rest.as_bytes()));

    CacheControlDirectives { max_age }
}

/// Decodes the leading decimal run of `input` the way C's `atoi` does.
///
/// Leading ASCII whitespace and a `+` sign are skipped, decoding stops at the
/// first non-digit and yields 0 when no digit was seen. Every target is
/// unsigned, so a negative value also yields 0. Values too large for `T`
/// saturate at `T::max_value()`.
#[must_use]
pub fn lenient_decimal<T>(input: &[u8]) -> T
where
    T: TryFrom<u64> + Bounded + Zero,
{
    let trimmed = input.trim_ascii_start();
    let (negative, digits) = match trimmed.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, trimmed),
    };

    let value = digits
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0u64, |acc, byte| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(byte - b'0'))
        });

    if negative {
        return T::zero();
    }

    T::try_from(value).unwrap_or_else(|_| T::max_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_with_port() {
        assert_eq!(
            parse_host_field("a.com:8080"),
            HostField {
                hostname: "a.com".to_string(),
                port: Some(8080),
            }
        );
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(
            parse_host_field("a.com"),
            HostField {
                hostname: "a.com".to_string(),
                port: None,
            }
        );
    }

    #[test]
    fn test_host_with_trailing_colon_has_no_port() {
        let host = parse_host_field("a.com:");

        assert_eq!(host.hostname, "a.com");
        assert_eq!(host.port, None);
    }

    #[test]
    fn test_host_with_non_numeric_port_decodes_to_zero() {
        let host = parse_host_field("a.com:http");

        assert_eq!(host.hostname, "a.com");
        assert_eq!(host.port, Some(0));
    }

    #[test]
    fn test_host_splits_at_first_colon() {
        let host = parse_host_field("a.com:80:90");

        assert_eq!(host.hostname, "a.com");
        assert_eq!(host.port, Some(80));
    }

    #[test]
    fn test_bracketed_ipv6_host() {
        assert_eq!(
            parse_host_field("[::1]:8443"),
            HostField {
                hostname: "[::1]".to_string(),
                port: Some(8443),
            }
        );
        assert_eq!(parse_host_field("[::1]").port, None);
        assert_eq!(parse_host_field("[::1]").hostname, "[::1]");
    }

    #[test]
    fn test_host_ipv6_with_trailing_text_keeps_whole_value() {
        assert_eq!(
            parse_host_field("[::1]junk:80"),
            HostField {
                hostname: "[::1]junk:80".to_string(),
                port: None,
            }
        );
    }

    #[test]
    fn test_empty_host() {
        let host = parse_host_field("");

        assert_eq!(host.hostname, "");
        assert_eq!(host.port, None);
    }

    #[test]
    fn test_cache_control_max_age() {
        assert_eq!(
            parse_cache_control("public, max-age=3600").max_age,
            Some(3600)
        );
        assert_eq!(parse_cache_control("max-age=60, private").max_age, Some(60));
    }

    #[test]
    fn test_cache_control_without_max_age() {
        assert_eq!(parse_cache_control("public").max_age, None);
        assert_eq!(parse_cache_control("").max_age, None);
    }

    #[test]
    fn test_cache_control_max_age_at_end_of_value() {
        assert_eq!(parse_cache_control("public, max-age=").max_age, None);
    }

    #[test]
    fn test_cache_control_non_numeric_max_age_is_zero() {
        assert_eq!(parse_cache_control("max-age=soon").max_age, Some(0));
    }

    #[test]
    fn test_s_maxage_is_not_max_age() {
        assert_eq!(parse_cache_control("s-maxage=100").max_age, None);
    }

    #[test]
    fn test_lenient_decimal_leading_run() {
        assert_eq!(lenient_decimal::<u64>(b"42abc"), 42);
        assert_eq!(lenient_decimal::<u64>(b"  \t17"), 17);
        assert_eq!(lenient_decimal::<u64>(b"+5"), 5);
        assert_eq!(lenient_decimal::<u64>(b"abc"), 0);
        assert_eq!(lenient_decimal::<u64>(b""), 0);
    }

    #[test]
    fn test_lenient_decimal_negative_is_zero() {
        assert_eq!(lenient_decimal::<u64>(b"-12"), 0);
    }

    #[test]
    fn test_lenient_decimal_saturates() {
        assert_eq!(lenient_decimal::<u16>(b"70000"), u16::MAX);
        assert_eq!(
            lenient_decimal::<u64>(b"99999999999999999999999"),
            u64::MAX
        );
    }
}
