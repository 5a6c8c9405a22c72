//! Value stringizer: renders captured check arguments for reports.
//!
//! Types opt in by implementing [`Stringize`]. Primitive categories are
//! covered here:
//!
//! | category            | rendering                              |
//! |---------------------|----------------------------------------|
//! | integers and floats | locale-independent decimal text        |
//! | raw pointers        | hexadecimal address, `0x` prefixed      |
//! | text                | verbatim                               |
//! | arrays, slices, vec | `{ e0; e1; ...; en }`                  |
//!
//! Enums render their integer representation through
//! [`stringize_repr!`](crate::stringize_repr), and types with a `Display`
//! impl can reuse it through [`stringize_display!`](crate::stringize_display).
//! An empty `impl Stringize for T {}` marks a type as undisplayable: the
//! default method yields an empty string, which reports show as a
//! placeholder rather than as an empty value.

use std::borrow::Cow;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Conversion of a value into report text.
pub trait Stringize {
    /// Render the value. An empty string means "no rendering available".
    fn stringize(&self) -> String {
        String::new()
    }
}

/// Free-function form of [`Stringize::stringize`].
pub fn stringize<T: Stringize + ?Sized>(value: &T) -> String {
    value.stringize()
}

macro_rules! stringize_decimal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Stringize for $ty {
                fn stringize(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

stringize_decimal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

impl Stringize for char {
    fn stringize(&self) -> String {
        self.to_string()
    }
}

impl Stringize for str {
    fn stringize(&self) -> String {
        self.to_owned()
    }
}

impl Stringize for String {
    fn stringize(&self) -> String {
        self.clone()
    }
}

impl Stringize for Cow<'_, str> {
    fn stringize(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl<T: ?Sized> Stringize for *const T {
    fn stringize(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Stringize for *mut T {
    fn stringize(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Stringize for NonNull<T> {
    fn stringize(&self) -> String {
        format!("{:p}", self.as_ptr())
    }
}

impl<T: Stringize> Stringize for [T] {
    fn stringize(&self) -> String {
        if self.is_empty() {
            return "{ }".to_string();
        }
        let items: Vec<String> = self.iter().map(Stringize::stringize).collect();
        format!("{{ {} }}", items.join("; "))
    }
}

impl<T: Stringize, const N: usize> Stringize for [T; N] {
    fn stringize(&self) -> String {
        self.as_slice().stringize()
    }
}

impl<T: Stringize> Stringize for Vec<T> {
    fn stringize(&self) -> String {
        self.as_slice().stringize()
    }
}

impl<T: Stringize + ?Sized> Stringize for &T {
    fn stringize(&self) -> String {
        (**self).stringize()
    }
}

impl<T: Stringize + ?Sized> Stringize for &mut T {
    fn stringize(&self) -> String {
        (**self).stringize()
    }
}

impl<T: Stringize + ?Sized> Stringize for Box<T> {
    fn stringize(&self) -> String {
        (**self).stringize()
    }
}

impl<T: Stringize + ?Sized> Stringize for Rc<T> {
    fn stringize(&self) -> String {
        (**self).stringize()
    }
}

impl<T: Stringize + ?Sized> Stringize for Arc<T> {
    fn stringize(&self) -> String {
        (**self).stringize()
    }
}

/// Implement [`Stringize`] for field-less enums by rendering their
/// integer representation.
///
/// ```
/// use unit_test_helper::stringize_repr;
/// use unit_test_helper::check::stringize::Stringize;
///
/// #[derive(Clone, Copy)]
/// enum Mode { Idle = 0, Busy = 4 }
/// stringize_repr!(Mode as u32);
///
/// assert_eq!(Mode::Busy.stringize(), "4");
/// ```
#[macro_export]
macro_rules! stringize_repr {
    ($($ty:ty as $repr:ty),+ $(,)?) => {
        $(
            impl $crate::check::stringize::Stringize for $ty {
                fn stringize(&self) -> ::std::string::String {
                    (*self as $repr).to_string()
                }
            }
        )+
    };
}

/// Implement [`Stringize`] for types by delegating to their `Display` impl.
#[macro_export]
macro_rules! stringize_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::check::stringize::Stringize for $ty {
                fn stringize(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}
