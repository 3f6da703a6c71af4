//! CLDR plural categorization: the `PLURAL` function.
//!
//! Plural rules differ per language — English distinguishes "one" and
//! "other", Polish adds "few" and "many". Rules are cached per thread per
//! locale so repeated calls avoid rebuilding `PluralRules`.

use std::cell::RefCell;
use std::collections::HashMap;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use locfmt::{Context, Expression, FormatError, MessageFn, Resolver, Value};

use crate::support::number_arg;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale tag.
    static RULES_CACHE: RefCell<Vec<(String, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// `PLURAL(n)` — the CLDR cardinal plural category of a number, as a string.
///
/// Intended for selector expressions: a message keyed `one` / `few` / `many`
/// / `other` branches on the category of a numeric argument under the active
/// locale.
pub struct Plural;

impl MessageFn for Plural {
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        _opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError> {
        let n = number_arg(resolver, ctx, args, 0)?;
        Ok(Value::String(
            plural_category(ctx.locale(), n).to_string(),
        ))
    }
}

/// CLDR cardinal plural category for `n` under `locale`.
///
/// Returns one of `"zero"`, `"one"`, `"two"`, `"few"`, `"many"`, `"other"`.
/// Unparseable locale tags categorize with English rules.
///
/// # Examples
///
/// ```
/// use locfmt_grammar::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 5), "other");
///
/// assert_eq!(plural_category("pl", 2), "few");
/// assert_eq!(plural_category("pl", 5), "many");
/// ```
pub fn plural_category(locale: &str, n: i64) -> &'static str {
    RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(tag, _)| tag == locale) {
            return category_str(rules.category_for(n));
        }
        let rules = build_rules(locale);
        let category = category_str(rules.category_for(n));
        cache.push((locale.to_string(), rules));
        category
    })
}

/// Build cardinal `PluralRules` for a locale tag, falling back to English.
fn build_rules(locale: &str) -> PluralRules {
    let parsed: Locale = locale.parse().unwrap_or_else(|_| locale!("en"));
    PluralRules::try_new(parsed.into(), PluralRuleType::Cardinal.into()).unwrap_or_else(|_| {
        PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
            .expect("English plural rules are compiled in")
    })
}

/// Translate a `PluralCategory` to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
