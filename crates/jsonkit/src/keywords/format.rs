//! Validator for `format` keyword.
use core::str::FromStr;
use std::net::{Ipv4Addr, Ipv6Addr};

use email_address::EmailAddress;
use url::Url;
use uuid_simd::{parse_hyphenated, Out};

use crate::{
    context::ValidationContext,
    error::{ValidationError, ValidationErrorKind},
    keywords::helpers,
    options::ValidationOptions,
    regex::compile,
    value::{JsonValue, Map},
};

const KEYWORD: &str = "format";

type Check = fn(&str, &ValidationOptions) -> bool;

fn checker(name: &str) -> Option<Check> {
    let check: Check = match name {
        "date" => |s, _| is_valid_date(s),
        "time" => |s, _| is_valid_time(s),
        "date-time" => |s, _| is_valid_datetime(s),
        "duration" => |s, _| is_valid_duration(s),
        "email" => |s, _| is_valid_email(s),
        "idn-email" => |s, _| is_valid_idn_email(s),
        "hostname" => |s, _| is_valid_hostname(s),
        "idn-hostname" => |s, _| is_valid_idn_hostname(s),
        "ipv4" => |s, _| Ipv4Addr::from_str(s).is_ok(),
        "ipv6" => |s, _| Ipv6Addr::from_str(s).is_ok(),
        "uri" => |s, _| s.is_ascii() && is_valid_iri(s),
        "uri-reference" => |s, _| s.is_ascii() && is_valid_iri_reference(s),
        "iri" => |s, _| is_valid_iri(s),
        "iri-reference" => |s, _| is_valid_iri_reference(s),
        "uuid" => |s, _| is_valid_uuid(s),
        "mac" => |s, _| is_valid_mac(s),
        "semver" => |s, _| is_valid_semver(s),
        "regex" => |s, options| compile(s, options.pattern_options()).is_ok(),
        _ => return None,
    };
    Some(check)
}

pub(crate) fn validate<'s>(
    ctx: &ValidationContext<'s>,
    _parent: &'s Map,
    value: &'s JsonValue,
    instance: &JsonValue,
) -> Result<(), ValidationError> {
    let name = helpers::string(ctx, KEYWORD, value)?;
    let Some(check) = checker(name) else {
        return Err(ctx.defect(
            KEYWORD,
            ValidationErrorKind::UnknownFormat {
                name: name.to_string(),
            },
        ));
    };
    if !ctx.options().validate_formats() {
        return Ok(());
    }
    match instance {
        JsonValue::String(item) if !check(item, ctx.options()) => Err(ctx.violation(
            KEYWORD,
            ValidationErrorKind::Format {
                instance: helpers::preview(instance),
                format: name.to_string(),
            },
        )),
        _ => Ok(()),
    }
}

fn digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    bytes
        .iter()
        .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `YYYY-MM-DD` with a day that exists in that month.
pub(crate) fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let (Some(year), Some(month), Some(day)) = (
        digits(&bytes[..4]),
        digits(&bytes[5..7]),
        digits(&bytes[8..]),
    ) else {
        return false;
    };
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}

/// `HH:MM:SS[.fraction](Z|+HH:MM|-HH:MM)`. The offset is mandatory.
pub(crate) fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() < 9 || bytes[2] != b':' || bytes[5] != b':' {
        return false;
    }
    let (Some(hour), Some(minute), Some(second)) = (
        digits(&bytes[..2]),
        digits(&bytes[3..5]),
        digits(&bytes[6..8]),
    ) else {
        return false;
    };
    // Leap seconds are accepted.
    if hour > 23 || minute > 59 || second > 60 {
        return false;
    }
    let mut rest = &bytes[8..];
    if let Some(fraction) = rest.strip_prefix(b".") {
        let end = fraction
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(fraction.len());
        if end == 0 {
            return false;
        }
        rest = &fraction[end..];
    }
    match rest {
        [b'Z' | b'z'] => true,
        [b'+' | b'-', offset @ ..] if offset.len() == 5 && offset[2] == b':' => {
            matches!(
                (digits(&offset[..2]), digits(&offset[3..])),
                (Some(h), Some(m)) if h <= 23 && m <= 59
            )
        }
        _ => false,
    }
}

pub(crate) fn is_valid_datetime(datetime: &str) -> bool {
    match datetime.as_bytes().get(10) {
        Some(b'T' | b't') => is_valid_date(&datetime[..10]) && is_valid_time(&datetime[11..]),
        _ => false,
    }
}

/// ISO 8601 duration such as `P3Y6M4DT12H30M5S` or `P2W`.
pub(crate) fn is_valid_duration(duration: &str) -> bool {
    let Some(rest) = duration.strip_prefix('P') else {
        return false;
    };
    if let Some(weeks) = rest.strip_suffix('W') {
        return digits(weeks.as_bytes()).is_some();
    }
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    let Some(date_parts) = duration_components(date, &['Y', 'M', 'D']) else {
        return false;
    };
    match time {
        None => date_parts > 0,
        Some(time) => matches!(duration_components(time, &['H', 'M', 'S']), Some(n) if n > 0),
    }
}

/// Count `<digits><designator>` components appearing in `order`; `None` if malformed.
fn duration_components(mut text: &str, order: &[char]) -> Option<usize> {
    let mut count = 0;
    let mut allowed = order;
    while !text.is_empty() {
        let end = text.find(|c: char| !c.is_ascii_digit())?;
        if end == 0 {
            return None;
        }
        let designator = text[end..].chars().next()?;
        let position = allowed.iter().position(|&d| d == designator)?;
        allowed = &allowed[position + 1..];
        text = &text[end + designator.len_utf8()..];
        count += 1;
    }
    Some(count)
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    email.is_ascii() && is_valid_idn_email(email)
}

pub(crate) fn is_valid_idn_email(email: &str) -> bool {
    EmailAddress::is_valid(email)
}

pub(crate) fn is_valid_hostname(hostname: &str) -> bool {
    let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
    !hostname.is_empty()
        && hostname.len() <= 253
        && hostname.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

pub(crate) fn is_valid_idn_hostname(hostname: &str) -> bool {
    idna::domain_to_ascii(hostname).is_ok_and(|ascii| is_valid_hostname(&ascii))
}

pub(crate) fn is_valid_iri(iri: &str) -> bool {
    Url::parse(iri).is_ok()
}

pub(crate) fn is_valid_iri_reference(iri: &str) -> bool {
    is_valid_iri(iri)
        || Url::parse("json-schema:///")
            .and_then(|base| base.join(iri))
            .is_ok()
}

pub(crate) fn is_valid_uuid(uuid: &str) -> bool {
    let mut out = [0; 16];
    parse_hyphenated(uuid.as_bytes(), Out::from_mut(&mut out)).is_ok()
}

/// Six hexadecimal pairs separated by one consistent `:` or `-`.
pub(crate) fn is_valid_mac(mac: &str) -> bool {
    let bytes = mac.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    let separator = bytes[2];
    if separator != b':' && separator != b'-' {
        return false;
    }
    bytes.chunks(3).all(|chunk| match chunk {
        [a, b, sep] => a.is_ascii_hexdigit() && b.is_ascii_hexdigit() && *sep == separator,
        [a, b] => a.is_ascii_hexdigit() && b.is_ascii_hexdigit(),
        _ => false,
    })
}

/// `MAJOR.MINOR.PATCH[-prerelease][+build]` per Semantic Versioning 2.0.0.
pub(crate) fn is_valid_semver(version: &str) -> bool {
    let (version, build) = match version.split_once('+') {
        Some((version, build)) => (version, Some(build)),
        None => (version, None),
    };
    let (core, prerelease) = match version.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (version, None),
    };
    let numeric = |part: &str| {
        !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_digit())
            && (part == "0" || !part.starts_with('0'))
    };
    let identifier = |part: &str| {
        !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    };
    let mut parts = core.split('.');
    let core_valid = (0..3).all(|_| parts.next().is_some_and(numeric)) && parts.next().is_none();
    core_valid
        && prerelease.map_or(true, |prerelease| {
            prerelease.split('.').all(|part| {
                identifier(part) && (!part.bytes().all(|b| b.is_ascii_digit()) || numeric(part))
            })
        })
        && build.map_or(true, |build| build.split('.').all(identifier))
}
