//! `${NAME}` substitution from environment variables.

use std::collections::HashMap;

use crate::resolver::ValueResolver;

/// Name under which [`EnvResolver`] registers.
pub const ENV_RESOLVER_NAME: &str = "env";

#[derive(Clone, Debug, Default)]
enum Source {
    #[default]
    Process,
    Fixed(HashMap<String, String>),
}

/// Replaces `${NAME}` tokens with the value of variable `NAME`.
///
/// `NAME` is one or more ASCII letters, digits or underscores. Substituted
/// values are trimmed and are not scanned again. Tokens naming an unset
/// variable are left untouched.
#[derive(Clone, Debug, Default)]
pub struct EnvResolver {
    source: Source,
}

impl EnvResolver {
    /// Resolve against the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against a fixed set of variables instead of the process
    /// environment.
    pub fn from_map<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source: Source::Fixed(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let value = match &self.source {
            Source::Process => std::env::var(name).ok(),
            Source::Fixed(vars) => vars.get(name).cloned(),
        };
        value.map(|v| v.trim().to_string())
    }

    /// Substitute every well-formed token in `input`.
    pub fn substitute(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let name_len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
            let name = &after[..name_len];

            if name.is_empty() || !after[name_len..].starts_with('}') {
                // Not a token; keep the `$` and rescan from the next char.
                out.push('$');
                rest = &rest[start + 1..];
                continue;
            }

            let end = start + 2 + name_len + 1;
            match self.lookup(name) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[start..end]),
            }
            rest = &rest[end..];
        }

        out.push_str(rest);
        out
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl ValueResolver for EnvResolver {
    fn name(&self) -> &str {
        ENV_RESOLVER_NAME
    }

    fn resolve(&self, value: &str) -> String {
        self.substitute(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> EnvResolver {
        EnvResolver::from_map([("FOO", "bar"), ("HOME_DIR", " /home/me "), ("N1", "one")])
    }

    #[test]
    fn substitutes_known_variable() {
        assert_eq!(fixed().substitute("${FOO}"), "bar");
        assert_eq!(fixed().substitute("pre-${FOO}-post"), "pre-bar-post");
    }

    #[test]
    fn trims_substituted_value() {
        assert_eq!(fixed().substitute("${HOME_DIR}/cfg"), "/home/me/cfg");
    }

    #[test]
    fn unknown_variable_is_left_unchanged() {
        assert_eq!(fixed().substitute("${BAZ}"), "${BAZ}");
        assert_eq!(fixed().substitute("${BAZ}:${FOO}"), "${BAZ}:bar");
    }

    #[test]
    fn multiple_tokens() {
        assert_eq!(fixed().substitute("${FOO}${N1}${FOO}"), "baronebar");
    }

    #[test]
    fn malformed_tokens_pass_through() {
        let r = fixed();
        assert_eq!(r.substitute("${}"), "${}");
        assert_eq!(r.substitute("${FOO"), "${FOO");
        assert_eq!(r.substitute("$FOO"), "$FOO");
        assert_eq!(r.substitute("${FO-O}"), "${FO-O}");
        assert_eq!(r.substitute("trailing $"), "trailing $");
    }

    #[test]
    fn nested_opening_finds_inner_token() {
        assert_eq!(fixed().substitute("${A${FOO}}"), "${Abar}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let r = EnvResolver::from_map([("LOOP", "${LOOP}")]);
        assert_eq!(r.substitute("${LOOP}"), "${LOOP}");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(fixed().substitute("héllo ${FOO} wörld"), "héllo bar wörld");
    }

    #[test]
    fn process_environment() {
        std::env::set_var("PROPLINE_ENV_TEST_FOO", "bar");
        let r = EnvResolver::new();
        assert_eq!(r.resolve("${PROPLINE_ENV_TEST_FOO}"), "bar");
        assert_eq!(r.resolve("${PROPLINE_ENV_TEST_UNSET_BAZ}"), "${PROPLINE_ENV_TEST_UNSET_BAZ}");
        assert_eq!(r.name(), ENV_RESOLVER_NAME);
    }
}
