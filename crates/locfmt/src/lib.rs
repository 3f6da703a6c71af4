pub mod formatter;
pub mod resolver;
pub mod terms;
pub mod text;
pub mod types;

pub use formatter::Formatter;
pub use resolver::{Context, FormatError, FunctionRegistry, MessageFn, Resolver, compute_suggestions};
pub use terms::{MemoryTermStore, Term, TermStore};
pub use text::capitalize;
pub use types::{Expression, Message, Selector, Value, Variant, VariantKey};

/// Creates a `HashMap<String, Value>` of argument bindings from key-value
/// pairs.
///
/// Values are converted via `Into<Value>`, so strings, integers, floats, and
/// booleans can be passed directly.
///
/// # Example
///
/// ```
/// use locfmt::bindings;
///
/// let args = bindings! { "item" => "t-shirt", "count" => 3 };
/// assert_eq!(args.len(), 2);
/// assert_eq!(args["item"].as_string(), Some("t-shirt"));
/// assert_eq!(args["count"].as_number(), Some(3));
/// ```
#[macro_export]
macro_rules! bindings {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
