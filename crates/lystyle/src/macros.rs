/// Builds a [`StyleObject`](crate::StyleObject) from `key => value` pairs.
///
/// Values are any expression convertible into a
/// [`StyleValue`](crate::StyleValue); a brace-delimited value is a nested
/// block written with the same syntax. Keys are any expression convertible
/// into `String`, so computed selectors work too.
///
/// # Example
///
/// ```rust
/// use lystyle::style;
///
/// let label = "label";
/// let field = style! {
///     "position" => "relative",
///     "flex" => 1,
///     format!("& .{label}") => {
///         "whiteSpace" => "nowrap",
///     },
/// };
/// assert_eq!(field.len(), 3);
/// ```
#[macro_export]
macro_rules! style {
    // === The Muncher ===
    (@munch $object:ident ;) => {};

    // 1. Nested block
    (@munch $object:ident ; $key:expr => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $object.set($key, $crate::StyleValue::Object($crate::style!($($inner)*)));
        $crate::style!(@munch $object ; $($($rest)*)?);
    };

    // 2. Plain value
    (@munch $object:ident ; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $object.set($key, $crate::StyleValue::from($value));
        $crate::style!(@munch $object ; $($($rest)*)?);
    };

    // === Entry Point ===
    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut object = $crate::StyleObject::new();
        $crate::style!(@munch object ; $($body)*);
        object
    }};
}
