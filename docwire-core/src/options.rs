//! Connection option dispatch.
//!
//! Options trail the connection string after `?` as `key=value` pairs joined by `&`.
//! Keys are matched case-insensitively against a fixed whitelist; each key routes its
//! parsed value to one setter on an [`OptionsContainer`].

use crate::error::{DocwireError, DocwireResult};

/// A mutable configuration view that connection options can be applied to.
pub trait OptionsContainer {
    /// Enables or disables strict mapping of documents onto entity types.
    fn set_strict_mode(&mut self, strict: bool);
    /// Sets the query timeout, in seconds.
    fn set_query_timeout(&mut self, timeout: u32);
    /// Enables or disables expando properties on mapped entities.
    fn set_enable_expando_properties(&mut self, enabled: bool);
    /// Enables or disables connection pooling.
    fn set_pooled(&mut self, pooled: bool);
    /// Sets the maximum number of pooled connections.
    fn set_pool_size(&mut self, size: u32);
    /// Sets the connect timeout, in seconds.
    fn set_timeout(&mut self, timeout: u32);
    /// Sets the pooled connection lifetime, in minutes.
    fn set_lifetime(&mut self, lifetime: u32);
}

type OptionSetter = fn(&str, &mut dyn OptionsContainer) -> DocwireResult<()>;

/// Recognised option keys and their setters.
const OPTION_HANDLERS: [(&str, OptionSetter); 7] = [
    ("strict", |v, c| {
        c.set_strict_mode(parse_bool("strict", v)?);
        Ok(())
    }),
    ("querytimeout", |v, c| {
        c.set_query_timeout(parse_int("querytimeout", v)?);
        Ok(())
    }),
    ("expando", |v, c| {
        c.set_enable_expando_properties(parse_bool("expando", v)?);
        Ok(())
    }),
    ("pooling", |v, c| {
        c.set_pooled(parse_bool("pooling", v)?);
        Ok(())
    }),
    ("poolsize", |v, c| {
        c.set_pool_size(parse_int("poolsize", v)?);
        Ok(())
    }),
    ("timeout", |v, c| {
        c.set_timeout(parse_int("timeout", v)?);
        Ok(())
    }),
    ("lifetime", |v, c| {
        c.set_lifetime(parse_int("lifetime", v)?);
        Ok(())
    }),
];

/// Applies an `&`-delimited option string to `container`.
///
/// Empty segments are skipped, so `a=1&&b=2` and a trailing `&` are accepted. Every
/// other segment must split into exactly two non-empty `=`-delimited parts whose key is
/// a recognised option.
///
/// # Errors
///
/// Returns [`DocwireError::MalformedConnectionString`] for a malformed pair, an unknown
/// key, or a value that does not parse as the option's type.
pub fn apply_options(container: &mut dyn OptionsContainer, options: &str) -> DocwireResult<()> {
    for part in options.split('&').filter(|part| !part.is_empty()) {
        let pair = part
            .split('=')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        let [key, value] = pair.as_slice() else {
            return Err(DocwireError::malformed(format!("invalid connection option: {part}")));
        };

        let setter = lookup(*key)
            .ok_or_else(|| DocwireError::malformed(format!("unknown connection option: {key}")))?;

        setter(*value, container)?;
    }

    Ok(())
}

/// Returns `true` if `key` names a recognised connection option.
pub fn is_known_option(key: &str) -> bool {
    lookup(key).is_some()
}

fn lookup(key: &str) -> Option<OptionSetter> {
    OPTION_HANDLERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, setter)| *setter)
}

fn parse_bool(key: &str, value: &str) -> DocwireResult<bool> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(DocwireError::malformed(format!(
            "option {key} expects a boolean, got {value}"
        ))),
    }
}

fn parse_int(key: &str, value: &str) -> DocwireResult<u32> {
    value.trim().parse::<u32>().map_err(|_| {
        DocwireError::malformed(format!("option {key} expects an unsigned integer, got {value}"))
    })
}
