//! Call-site macros: capture the checked expression and its arguments as
//! source text, then report through a session.
//!
//! Every macro takes the session first, as a `Session` or `&mut Session`
//! place. Each operand and argument is evaluated exactly once; the value
//! compared is the value reported. Function and method arguments are
//! rendered as they are passed in. A method's receiver is shown after the
//! call, read back from its place.
//!
//! ```
//! use unit_test_helper::session::Session;
//! use unit_test_helper::{uth_check, uth_eq, uth_fn, uth_group, uth_op};
//!
//! fn is_even(n: u32) -> bool {
//!     n % 2 == 0
//! }
//!
//! let mut s = Session::builder().seed(0).build();
//! let suite = uth_group!(s, "arith", {
//!     uth_check!(s, 2 + 2 == 4);
//!     uth_eq!(s, 0.1 + 0.2, 0.3, 1e-9);
//!     uth_fn!(s, is_even(6));
//!     uth_op!(s, 3, <, 7);
//! });
//! assert!(!suite.local_failed);
//! ```

/// Plain predicate; the description is the expression text.
#[macro_export]
macro_rules! uth_check {
    ($s:expr, $pred:expr $(,)?) => {
        $s.report(
            $crate::session::Check::new(::std::stringify!($pred), $pred)
                .at($crate::check::title::Location::new(::std::file!(), ::std::line!())),
        )
    };
}

/// `equals(lhs, rhs)`, or `equals(lhs, rhs, eps)` with a tolerance.
#[macro_export]
macro_rules! uth_eq {
    ($s:expr, $lhs:expr, $rhs:expr $(,)?) => {{
        let (lhs, rhs) = (&$lhs, &$rhs);
        let pred = $crate::check::equals::equals(lhs, rhs);
        $s.report(
            $crate::session::Check::new(
                ::std::concat!("equals(", ::std::stringify!($lhs), ", ", ::std::stringify!($rhs), ")"),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[::std::stringify!($lhs), ::std::stringify!($rhs)]),
                &[lhs, rhs],
            ),
        )
    }};
    ($s:expr, $lhs:expr, $rhs:expr, $eps:expr $(,)?) => {{
        let (lhs, rhs, eps) = (&$lhs, &$rhs, &$eps);
        let pred = $crate::check::equals::equals_eps(lhs, rhs, eps);
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(
                    "equals(",
                    ::std::stringify!($lhs),
                    ", ",
                    ::std::stringify!($rhs),
                    ", ",
                    ::std::stringify!($eps),
                    ")"
                ),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[
                    ::std::stringify!($lhs),
                    ::std::stringify!($rhs),
                    ::std::stringify!($eps),
                ]),
                &[lhs, rhs, eps],
            ),
        )
    }};
}

/// Evaluates one call argument, records its rendering, and yields it.
#[doc(hidden)]
#[macro_export]
macro_rules! __uth_arg {
    ($shown:ident, $arg:expr) => {{
        let arg = $arg;
        $shown.push($crate::check::stringize::Stringize::stringize(&arg));
        arg
    }};
}

/// Function returning the predicate: `uth_fn!(s, path::f(a, b))`.
#[macro_export]
macro_rules! uth_fn {
    ($s:expr, $($f:ident)::+ ( $($arg:expr),* $(,)? ) $(,)?) => {{
        #[allow(unused_mut)]
        let mut shown: ::std::vec::Vec<::std::string::String> = ::std::vec::Vec::new();
        let pred: bool = $($f)::+($($crate::__uth_arg!(shown, $arg)),*);
        let values: ::std::vec::Vec<&dyn $crate::check::stringize::Stringize> = shown
            .iter()
            .map(|v| v as &dyn $crate::check::stringize::Stringize)
            .collect();
        $s.report(
            $crate::session::Check::new(::std::stringify!($($f)::+($($arg),*)), pred)
                .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
                .args(
                    $crate::session::Labels::List(&[$(::std::stringify!($arg)),*]),
                    &values,
                ),
        )
    }};
}

/// Function whose return must equal `expected`:
/// `uth_ret_fn!(s, expected, f(a, b))`. Params: the arguments, the
/// return value, then `expected`.
#[macro_export]
macro_rules! uth_ret_fn {
    ($s:expr, $expected:expr, $($f:ident)::+ ( $($arg:expr),* $(,)? ) $(,)?) => {{
        #[allow(unused_mut)]
        let mut shown: ::std::vec::Vec<::std::string::String> = ::std::vec::Vec::new();
        let ret = $($f)::+($($crate::__uth_arg!(shown, $arg)),*);
        let expected = $expected;
        let pred = ret == expected;
        let mut values: ::std::vec::Vec<&dyn $crate::check::stringize::Stringize> = shown
            .iter()
            .map(|v| v as &dyn $crate::check::stringize::Stringize)
            .collect();
        values.push(&ret);
        values.push(&expected);
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(
                    ::std::stringify!($($f)::+($($arg),*)),
                    " == ",
                    ::std::stringify!($expected)
                ),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[
                    $(::std::stringify!($arg),)*
                    ::std::concat!(::std::stringify!($($f)::+), "()"),
                    ::std::stringify!($expected),
                ]),
                &values,
            ),
        )
    }};
}

/// Method returning the predicate: `uth_method!(s, caller, m(a, b))`.
/// Params: the receiver, then the arguments.
#[macro_export]
macro_rules! uth_method {
    ($s:expr, $caller:expr, $method:ident ( $($arg:expr),* $(,)? ) $(,)?) => {{
        #[allow(unused_mut)]
        let mut shown: ::std::vec::Vec<::std::string::String> = ::std::vec::Vec::new();
        let pred: bool = $caller.$method($($crate::__uth_arg!(shown, $arg)),*);
        let mut values: ::std::vec::Vec<&dyn $crate::check::stringize::Stringize> =
            ::std::vec::Vec::with_capacity(shown.len() + 1);
        values.push(&$caller);
        values.extend(shown.iter().map(|v| v as &dyn $crate::check::stringize::Stringize));
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(
                    ::std::stringify!($caller),
                    ".",
                    ::std::stringify!($method($($arg),*))
                ),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[
                    ::std::stringify!($caller),
                    $(::std::stringify!($arg)),*
                ]),
                &values,
            ),
        )
    }};
}

/// Method whose return must equal `expected`:
/// `uth_ret_method!(s, expected, caller, m(a, b))`. Params: the receiver,
/// the arguments, the return value, then `expected`.
#[macro_export]
macro_rules! uth_ret_method {
    ($s:expr, $expected:expr, $caller:expr, $method:ident ( $($arg:expr),* $(,)? ) $(,)?) => {{
        #[allow(unused_mut)]
        let mut shown: ::std::vec::Vec<::std::string::String> = ::std::vec::Vec::new();
        let ret = $caller.$method($($crate::__uth_arg!(shown, $arg)),*);
        let expected = $expected;
        let pred = ret == expected;
        let mut values: ::std::vec::Vec<&dyn $crate::check::stringize::Stringize> =
            ::std::vec::Vec::with_capacity(shown.len() + 3);
        values.push(&$caller);
        values.extend(shown.iter().map(|v| v as &dyn $crate::check::stringize::Stringize));
        values.push(&ret);
        values.push(&expected);
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(
                    ::std::stringify!($caller),
                    ".",
                    ::std::stringify!($method($($arg),*)),
                    " == ",
                    ::std::stringify!($expected)
                ),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[
                    ::std::stringify!($caller),
                    $(::std::stringify!($arg),)*
                    ::std::concat!(::std::stringify!($caller), ".", ::std::stringify!($method), "()"),
                    ::std::stringify!($expected),
                ]),
                &values,
            ),
        )
    }};
}

/// Binary operator yielding the predicate: `uth_op!(s, a, <, b)`.
#[macro_export]
macro_rules! uth_op {
    ($s:expr, $lhs:expr, $op:tt, $rhs:expr $(,)?) => {{
        let (lhs, rhs) = (&$lhs, &$rhs);
        let pred: bool = (*lhs) $op (*rhs);
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(::std::stringify!($lhs), " ", ::std::stringify!($op), " ", ::std::stringify!($rhs)),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[::std::stringify!($lhs), ::std::stringify!($rhs)]),
                &[lhs, rhs],
            ),
        )
    }};
}

/// Binary operator whose result must equal `expected`:
/// `uth_ret_op!(s, 5, 2, +, 3)`. Params: both operands, the result, then
/// `expected`.
#[macro_export]
macro_rules! uth_ret_op {
    ($s:expr, $expected:expr, $lhs:expr, $op:tt, $rhs:expr $(,)?) => {{
        let (lhs, rhs) = (&$lhs, &$rhs);
        let ret = (*lhs) $op (*rhs);
        let expected = $expected;
        let pred = ret == expected;
        $s.report(
            $crate::session::Check::new(
                ::std::concat!(
                    ::std::stringify!($lhs),
                    " ",
                    ::std::stringify!($op),
                    " ",
                    ::std::stringify!($rhs),
                    " == ",
                    ::std::stringify!($expected)
                ),
                pred,
            )
            .at($crate::check::title::Location::new(::std::file!(), ::std::line!()))
            .args(
                $crate::session::Labels::List(&[
                    ::std::stringify!($lhs),
                    ::std::stringify!($rhs),
                    ::std::concat!(
                        ::std::stringify!($lhs),
                        " ",
                        ::std::stringify!($op),
                        " ",
                        ::std::stringify!($rhs)
                    ),
                    ::std::stringify!($expected),
                ]),
                &[lhs, rhs, &ret, &expected],
            ),
        )
    }};
}

/// Run a block inside a named group and evaluate to the closed
/// [`Group`](crate::check::group::Group).
#[macro_export]
macro_rules! uth_group {
    ($s:expr, $name:expr, $body:block $(,)?) => {{
        $s.begin_group($name);
        $body;
        $s.end_group()
    }};
}
