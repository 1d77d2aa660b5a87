//! Email address grammar
//!
//! [`validate_mail`] checks the shape of an address without any network
//! lookups. The local part is either a quoted string, a dot-atom, or a quoted
//! segment joined to dot-atoms with dots. The domain is a hostname or a
//! bracketed IPv4 / `IPv6:` literal. Comments are not supported.
//!
//! # Example
//!
//! ```
//! use plumbline::validate_mail;
//!
//! assert!(validate_mail("\"much.more unusual\"@example.com"));
//! assert!(validate_mail("a@[6.6.8.8]"));
//! assert!(validate_mail("a@[IPv6:::1]"));
//! assert!(!validate_mail("a@127.0.0.1"));
//! ```

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

/// Longest address accepted, in bytes.
pub const MAX_ADDRESS_LEN: usize = 254;

/// Local parts must be shorter than this, in bytes.
pub const LOCAL_PART_LIMIT: usize = 64;

/// Longest dot-separated domain label accepted, in bytes.
pub const MAX_LABEL_LEN: usize = 64;

static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"[\\a-zA-Z0-9.@()<>\[\]:,;"!#$%&\-/=?^_'`{}| ~]+"$"#).expect("valid regex")
});

static DOT_ATOM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~]+(\.[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~]+)*$")
        .expect("valid regex")
});

static HOSTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9][a-z0-9.\-]*[a-z0-9]$").expect("valid regex"));

/// Validate an email address.
///
/// The last `@` separates the domain; everything before it, `@`s included, is
/// the local part. See the module documentation for the grammar.
pub fn validate_mail(address: &str) -> bool {
    if address.len() > MAX_ADDRESS_LEN {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = address.len(), "mail address too long");
        return false;
    }

    let (local, domain) = address.rsplit_once('@').unwrap_or(("", address));

    let valid = validate_local(local) && validate_domain(domain);
    #[cfg(feature = "tracing")]
    if !valid {
        tracing::debug!(address, "mail address rejected");
    }
    valid
}

fn validate_local(local: &str) -> bool {
    if local.len() >= LOCAL_PART_LIMIT {
        return false;
    }

    if QUOTED_RE.is_match(local) {
        return true;
    }

    let opens = local.find(".\"").is_some_and(|at| at > 0);
    let closes = local.find("\".").is_some_and(|at| at > 0);
    if opens || closes {
        return validate_mixed_local(local, opens, closes);
    }

    DOT_ATOM_RE.is_match(local)
}

/// A quoted segment adjoined by dot-atoms: `pre."quoted".post`, where either
/// side may be absent. `pre` ends at the first `."` and `post` starts after the
/// last `".`; whatever lies between must be a single quoted string.
fn validate_mixed_local(local: &str, opens: bool, closes: bool) -> bool {
    let (pre, quoted) = if opens {
        match local.split_once(".\"") {
            Some((pre, rest)) => (Some(pre), format!("\"{}", rest)),
            None => return false,
        }
    } else {
        (None, local.to_string())
    };

    let (quoted, post) = if closes {
        match quoted.rsplit_once("\".") {
            Some((inner, post)) => (format!("{}\"", inner), Some(post.to_string())),
            None => return false,
        }
    } else {
        (quoted, None)
    };

    QUOTED_RE.is_match(&quoted)
        && pre.is_none_or(|pre| DOT_ATOM_RE.is_match(pre))
        && post.is_none_or(|post| DOT_ATOM_RE.is_match(&post))
}

fn validate_domain(domain: &str) -> bool {
    if domain.split('.').any(|label| label.len() > MAX_LABEL_LEN) {
        return false;
    }

    if domain.contains('[') || domain.contains(']') {
        return domain
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .is_some_and(validate_address_literal);
    }

    HOSTNAME_RE.is_match(domain)
        && domain
            .rsplit('.')
            .next()
            .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

fn validate_address_literal(literal: &str) -> bool {
    match literal.strip_prefix("IPv6:") {
        Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
        None => literal.parse::<Ipv4Addr>().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses() {
        assert!(validate_mail("user@example.com"));
        assert!(validate_mail("first.last@sub.example.co.uk"));
        assert!(validate_mail("x+tag@example.org"));
        assert!(validate_mail("o'brien@example.ie"));
        assert!(validate_mail("a@b.c"));
        assert!(validate_mail("USER@EXAMPLE.COM"));
    }

    #[test]
    fn test_quoted_local_parts() {
        assert!(validate_mail("\"much.more unusual\"@example.com"));
        assert!(validate_mail("\"very.(),:;<>[]\\\".VERY.\\\"very@\\\\ \\\"very\\\".unusual\"@strange.example.com"));
        assert!(!validate_mail("\"\"@example.com"));
    }

    #[test]
    fn test_quoted_segment_between_dot_atoms() {
        assert!(validate_mail("abc.\"def\"@example.com"));
        assert!(validate_mail("\"abc\".def@example.com"));
        assert!(validate_mail("abc.\"def\".ghi@example.com"));
        assert!(!validate_mail("a..b.\"def\"@example.com"));
        assert!(!validate_mail("abc.\"def\".g h@example.com"));
    }

    #[test]
    fn test_trailing_text_after_quoted_segment_is_checked() {
        assert!(!validate_mail("a.\"b\".c.\"(((@example.com"));
        assert!(!validate_mail("a.\"b\".c.\"@example.com"));
        assert!(!validate_mail("\"b\".c.\"d@example.com"));
        assert!(validate_mail("a.\"b\".c.d@example.com"));
    }

    #[test]
    fn test_invalid_local_parts() {
        assert!(!validate_mail("a\"b(c)d,e:f;g<h>i[j\\k]l@example.com"));
        assert!(!validate_mail("just\"not\"right@example.com"));
        assert!(!validate_mail(".leading@example.com"));
        assert!(!validate_mail("trailing.@example.com"));
        assert!(!validate_mail("double..dot@example.com"));
        assert!(!validate_mail("@example.com"));
        assert!(!validate_mail("example.com"));
    }

    #[test]
    fn test_at_signs_inside_quotes_stay_in_local_part() {
        assert!(validate_mail("\"a@b\"@example.com"));
    }

    #[test]
    fn test_address_literals() {
        assert!(validate_mail("a@[6.6.8.8]"));
        assert!(validate_mail("a@[IPv6:::1]"));
        assert!(validate_mail("a@[IPv6:2001:db8::ff00:42:8329]"));
        assert!(!validate_mail("a@[300.1.1.1]"));
        assert!(!validate_mail("a@[::1]"));
        assert!(!validate_mail("a@[IPv6:12345::]"));
        assert!(!validate_mail("a@x[1.2.3.4]"));
        assert!(!validate_mail("a@[1.2.3.4"));
    }

    #[test]
    fn test_hostnames() {
        assert!(!validate_mail("a@127.0.0.1"));
        assert!(!validate_mail("a@-example.com"));
        assert!(!validate_mail("a@example.com-"));
        assert!(!validate_mail("a@.example.com"));
        assert!(!validate_mail("a@exa_mple.com"));
        assert!(!validate_mail("a@b"));
        assert!(validate_mail("a@123.example"));
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(63);
        assert!(validate_mail(&format!("{}@example.com", local)));
        let local = "a".repeat(64);
        assert!(!validate_mail(&format!("{}@example.com", local)));

        let label = "b".repeat(64);
        assert!(validate_mail(&format!("a@{}.com", label)));
        let label = "b".repeat(65);
        assert!(!validate_mail(&format!("a@{}.com", label)));

        let domain = format!("{}.com", vec!["c".repeat(60); 5].join("."));
        let address = format!("a@{}", domain);
        assert!(address.len() > MAX_ADDRESS_LEN);
        assert!(!validate_mail(&address));
    }
}
