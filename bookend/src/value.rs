//! The [`Value`] trait.
use std::borrow::Cow;

/// A substitution value returned by a [`Map`][crate::resolve::Map] resolver.
///
/// Rendering nothing means the key produce no output.
pub trait Value {
    fn render_into(&self, out: &mut String);
}

impl<R> Value for &R where R: Value + ?Sized {
    fn render_into(&self, out: &mut String) {
        R::render_into(*self, out)
    }
}

impl<T> Value for Option<T> where T: Value {
    fn render_into(&self, out: &mut String) {
        if let Some(me) = self {
            T::render_into(me, out);
        }
    }
}

impl<T> Value for Box<T> where T: Value + ?Sized {
    fn render_into(&self, out: &mut String) {
        T::render_into(self, out)
    }
}

impl Value for char {
    fn render_into(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Value for bool {
    fn render_into(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl Value for str {
    fn render_into(&self, out: &mut String) {
        out.push_str(self)
    }
}

impl Value for String {
    fn render_into(&self, out: &mut String) {
        out.push_str(self)
    }
}

impl Value for Cow<'_, str> {
    fn render_into(&self, out: &mut String) {
        out.push_str(self)
    }
}

macro_rules! render_int {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn render_into(&self, out: &mut String) {
                    out.push_str(itoa::Buffer::new().format(*self))
                }
            }
        )*
    };
}

render_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! render_float {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn render_into(&self, out: &mut String) {
                    use std::fmt::Write;
                    // writing into String is infallible
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

render_float!(f32, f64);
