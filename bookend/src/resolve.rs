//! The [`Resolver`] trait and adapters.
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::Value;

/// Resolve a key into its substitution.
///
/// Resolvers are called once per key, in template order, and only borrow the key for the
/// duration of the call. Leaving `out` empty means the key produce no output.
///
/// Closures of the shape `FnMut(&str, &mut String)` are resolvers. For closures returning the
/// value instead, use [`Map`].
pub trait Resolver {
    fn resolve(&mut self, key: &str, out: &mut String);
}

impl<F> Resolver for F where F: FnMut(&str, &mut String) {
    fn resolve(&mut self, key: &str, out: &mut String) {
        self(key, out)
    }
}

/// Adapt a closure returning a [`Value`] into [`Resolver`].
///
/// ```
/// use bookend::{render, resolve::Map};
///
/// let output = render("%POWER%", Map(|key: &str| key.to_lowercase())).unwrap();
/// assert_eq!(output, "power");
/// ```
pub struct Map<F>(pub F);

impl<F, V> Resolver for Map<F>
where
    F: FnMut(&str) -> V,
    V: Value,
{
    fn resolve(&mut self, key: &str, out: &mut String) {
        (self.0)(key).render_into(out)
    }
}

macro_rules! map_resolver {
    ($($ty:ty, [$($gen:tt)*]);* $(;)?) => {
        $(
            impl<$($gen)*> Resolver for $ty {
                fn resolve(&mut self, key: &str, out: &mut String) {
                    if let Some(value) = self.get(key) {
                        value.render_into(out)
                    }
                }
            }
        )*
    };
}

map_resolver! {
    HashMap<String, V, S>, [V: Value, S: BuildHasher];
    &HashMap<String, V, S>, [V: Value, S: BuildHasher];
    BTreeMap<String, V>, [V: Value];
    &BTreeMap<String, V>, [V: Value];
}

/// Wrap [`Resolver`] to escape its output.
///
/// escape based on [OWASP recommendation][1]
///
/// [1]: <https://cheatsheetseries.owasp.org/cheatsheets/Cross_Site_Scripting_Prevention_Cheat_Sheet.html>
pub struct Escape<R> {
    inner: R,
    scratch: String,
}

impl<R> Escape<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, scratch: String::new() }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Resolver for Escape<R> where R: Resolver {
    fn resolve(&mut self, key: &str, out: &mut String) {
        self.scratch.clear();
        self.inner.resolve(key, &mut self.scratch);
        escape_into(&self.scratch, out);
    }
}

fn escape_into(value: &str, out: &mut String) {
    let mut latest = 0;

    for (i, ch) in value.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => continue,
        };

        out.push_str(&value[latest..i]);
        out.push_str(escaped);

        latest = i + 1;
    }

    out.push_str(&value[latest..]);
}

#[cfg(test)]
mod test {
    use super::*;

    fn resolve(mut resolver: impl Resolver, key: &str) -> String {
        let mut out = String::new();
        resolver.resolve(key, &mut out);
        out
    }

    #[test]
    fn closure() {
        let upper = |key: &str, out: &mut String| out.push_str(&key.to_uppercase());
        assert_eq!(resolve(upper, "on"), "ON");
    }

    #[test]
    fn map_closure() {
        assert_eq!(resolve(Map(|key: &str| key.len()), "four"), "4");
        assert_eq!(resolve(Map(|_: &str| None::<String>), "x"), "");
    }

    #[test]
    fn maps() {
        let mut map = HashMap::new();
        map.insert("POWER".to_owned(), "ON");
        assert_eq!(resolve(&map, "POWER"), "ON");
        assert_eq!(resolve(&map, "MISSING"), "");

        let tree = BTreeMap::from([("n".to_owned(), 3u32)]);
        assert_eq!(resolve(tree, "n"), "3");
    }

    #[test]
    fn escape() {
        let html = Map(|_: &str| "<a href='x'>Tom & \"Jerry\"</a>");
        assert_eq!(
            resolve(Escape::new(html), "k"),
            "&lt;a href=&#x27;x&#x27;&gt;Tom &amp; &quot;Jerry&quot;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_multibyte() {
        assert_eq!(resolve(Escape::new(Map(|_: &str| "é<ü")), "k"), "é&lt;ü");
    }
}
