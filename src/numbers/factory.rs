//! Filter factory for building filters from names and arguments.
//!
//! The factory is an open registry: new filter kinds are added with
//! [`FilterFactory::register`] without touching the built-in ones.

use std::fmt;

use indexmap::IndexMap;

use super::Number;
use super::error::FilterError;
use super::filter::{EvenFilter, GreaterThanFilter, NumberFilter, OddFilter};
use super::reader::{SkipReason, parse_leading_number};

/// Constructor stored for each registered filter name.
pub type FilterCreator = Box<dyn Fn(FilterArgs<'_>) -> Result<Box<dyn NumberFilter>, FilterError>>;

/// Inputs handed to a [`FilterCreator`].
#[derive(Debug, Clone, Copy)]
pub struct FilterArgs<'a> {
    /// Name the filter was requested under
    pub name: &'a str,
    /// Argument text, `None` when absent or empty
    pub argument: Option<&'a str>,
}

impl FilterArgs<'_> {
    /// Parse the argument's leading digits as a base-10 `Number`, failing
    /// when it is absent. Trailing text is ignored, so `10x` gives 10.
    pub fn required_number(&self) -> Result<Number, FilterError> {
        let argument = self.argument.ok_or_else(|| FilterError::MissingArgument {
            filter: self.name.to_string(),
        })?;

        parse_leading_number(argument.as_bytes()).map_err(|reason| match reason {
            SkipReason::OutOfRange => FilterError::OutOfRange {
                filter: self.name.to_string(),
                argument: argument.to_string(),
            },
            SkipReason::Invalid => FilterError::InvalidArgument {
                filter: self.name.to_string(),
                argument: argument.to_string(),
            },
        })
    }
}

struct FilterEntry {
    takes_argument: bool,
    creator: FilterCreator,
}

/// A filter name plus its optional argument, as parsed from a CLI token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: String,
    pub argument: Option<String>,
}

impl FilterSpec {
    pub fn new(name: impl Into<String>, argument: Option<String>) -> Self {
        Self {
            name: name.into(),
            argument: argument.filter(|a| !a.is_empty()),
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.argument.as_deref().unwrap_or(""))
    }
}

/// Registry mapping filter names to constructors.
pub struct FilterFactory {
    creators: IndexMap<String, FilterEntry>,
}

impl FilterFactory {
    /// Create a factory with the built-in EVEN, ODD and GT filters.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("EVEN", false, |_| Ok(Box::new(EvenFilter)));
        factory.register("ODD", false, |_| Ok(Box::new(OddFilter)));
        factory.register("GT", true, |args| {
            Ok(Box::new(GreaterThanFilter::new(args.required_number()?)))
        });
        factory
    }

    /// Create a factory with no registered filters.
    pub fn empty() -> Self {
        Self {
            creators: IndexMap::new(),
        }
    }

    /// Register (or replace) a filter kind.
    ///
    /// `takes_argument` lets [`parse_spec`](Self::parse_spec) split a token
    /// like `GT10` into the name and its argument.
    pub fn register<F>(&mut self, name: impl Into<String>, takes_argument: bool, creator: F)
    where
        F: Fn(FilterArgs<'_>) -> Result<Box<dyn NumberFilter>, FilterError> + 'static,
    {
        self.creators.insert(
            name.into(),
            FilterEntry {
                takes_argument,
                creator: Box::new(creator),
            },
        );
    }

    /// Usage hint such as `EVEN, ODD, GT<n>`.
    pub fn usage(&self) -> String {
        self.creators
            .iter()
            .map(|(name, entry)| {
                if entry.takes_argument {
                    format!("{name}<n>")
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build a filter. An empty `argument` counts as absent.
    pub fn create(&self, name: &str, argument: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
        let entry = self
            .creators
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter {
                name: name.to_string(),
            })?;

        let args = FilterArgs {
            name,
            argument: Some(argument).filter(|a| !a.is_empty()),
        };
        (entry.creator)(args)
    }

    pub fn create_spec(&self, spec: &FilterSpec) -> Result<Box<dyn NumberFilter>, FilterError> {
        self.create(&spec.name, spec.argument.as_deref().unwrap_or(""))
    }

    /// Split a CLI token into a [`FilterSpec`].
    ///
    /// An exact registered name wins. Otherwise the longest registered name
    /// that takes an argument and prefixes the token is used, with the rest
    /// of the token as its argument. Anything else is returned whole so that
    /// creation reports it as unknown.
    pub fn parse_spec(&self, token: &str) -> FilterSpec {
        if self.creators.contains_key(token) {
            return FilterSpec::new(token, None);
        }

        self.creators
            .iter()
            .filter(|(name, entry)| entry.takes_argument && token.starts_with(name.as_str()))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, _)| FilterSpec::new(name.clone(), Some(token[name.len()..].to_string())))
            .unwrap_or_else(|| FilterSpec::new(token, None))
    }

    pub fn create_from_token(&self, token: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
        self.create_spec(&self.parse_spec(token))
    }
}

impl Default for FilterFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept(filter: &dyn NumberFilter, inputs: &[Number]) -> Vec<Number> {
        inputs.iter().copied().filter(|&n| filter.keep(n)).collect()
    }

    #[test]
    fn test_create_gt_matches_direct_filter() {
        let factory = FilterFactory::new();
        let created = factory.create("GT", "5").unwrap();
        let direct = GreaterThanFilter::new(5);

        for n in -10..=10 {
            assert_eq!(created.keep(n), direct.keep(n));
        }
        assert_eq!(created.describe(), "GT(5)");
    }

    #[test]
    fn test_gt_non_numeric_argument() {
        let err = FilterFactory::new().create("GT", "abc").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err,
            FilterError::InvalidArgument {
                filter: "GT".into(),
                argument: "abc".into()
            }
        );
    }

    #[test]
    fn test_unknown_filter() {
        let err = FilterFactory::new().create("XYZ", "").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Unknown filter type: XYZ");
    }

    #[test]
    fn test_gt_missing_and_out_of_range() {
        let factory = FilterFactory::new();

        let missing = factory.create("GT", "").unwrap_err();
        assert!(matches!(missing, FilterError::MissingArgument { .. }));
        assert!(missing.is_invalid_argument());

        let overflow = factory.create("GT", "99999999999").unwrap_err();
        assert!(overflow.is_out_of_range());
        assert!(!overflow.is_invalid_argument());
    }

    #[test]
    fn test_even_odd_ignore_argument() {
        let factory = FilterFactory::new();
        let even = factory.create("EVEN", "junk").unwrap();
        let odd = factory.create("ODD", "").unwrap();

        assert_eq!(kept(even.as_ref(), &[1, 2, 3, 4]), vec![2, 4]);
        assert_eq!(kept(odd.as_ref(), &[1, 2, 3, 4]), vec![1, 3]);
    }

    #[test]
    fn test_usage_in_registration_order() {
        assert_eq!(FilterFactory::new().usage(), "EVEN, ODD, GT<n>");
    }

    #[test]
    fn test_gt_argument_uses_leading_digits() {
        let factory = FilterFactory::new();

        let gt = factory.create_from_token("GT10x").unwrap();
        assert_eq!(gt.describe(), "GT(10)");
        assert_eq!(factory.create("GT", "-3.7").unwrap().describe(), "GT(-3)");

        assert!(factory.create("GT", "x10").unwrap_err().is_invalid_argument());
        assert!(
            factory
                .create("GT", "99999999999x")
                .unwrap_err()
                .is_out_of_range()
        );
    }

    #[test]
    fn test_parse_spec_tokens() {
        let factory = FilterFactory::new();

        assert_eq!(factory.parse_spec("EVEN"), FilterSpec::new("EVEN", None));
        assert_eq!(
            factory.parse_spec("GT10"),
            FilterSpec::new("GT", Some("10".into()))
        );
        assert_eq!(
            factory.parse_spec("GT-3"),
            FilterSpec::new("GT", Some("-3".into()))
        );
        assert_eq!(factory.parse_spec("GT"), FilterSpec::new("GT", None));
        assert_eq!(factory.parse_spec("EVEN5"), FilterSpec::new("EVEN5", None));
        assert_eq!(factory.parse_spec("XYZ"), FilterSpec::new("XYZ", None));
        assert_eq!(factory.parse_spec("GT10").to_string(), "GT10");
    }

    #[test]
    fn test_create_from_token() {
        let factory = FilterFactory::new();

        let gt = factory.create_from_token("GT-3").unwrap();
        assert!(gt.keep(-2));
        assert!(!gt.keep(-3));

        assert!(factory.create_from_token("GTabc").unwrap_err().is_invalid_argument());
        assert!(matches!(
            factory.create_from_token("gt10").unwrap_err(),
            FilterError::UnknownFilter { .. }
        ));
    }

    #[test]
    fn test_register_custom_filter() {
        struct DivisibleBy(Number);

        impl NumberFilter for DivisibleBy {
            fn keep(&self, number: Number) -> bool {
                number % self.0 == 0
            }
            fn describe(&self) -> String {
                format!("DIV({})", self.0)
            }
        }

        let mut factory = FilterFactory::new();
        factory.register("DIV", true, |args| {
            let divisor = args.required_number()?;
            if divisor == 0 {
                return Err(FilterError::InvalidArgument {
                    filter: args.name.to_string(),
                    argument: "0".into(),
                });
            }
            Ok(Box::new(DivisibleBy(divisor)))
        });

        let div = factory.create_from_token("DIV3").unwrap();
        assert_eq!(kept(div.as_ref(), &[1, 3, 4, 6, 9]), vec![3, 6, 9]);
        assert!(factory.create("DIV", "0").is_err());
        assert_eq!(factory.usage(), "EVEN, ODD, GT<n>, DIV<n>");

        // Built-ins are unaffected by the new registration.
        assert!(factory.create("GT", "1").unwrap().keep(2));
    }

    #[test]
    fn test_empty_factory_knows_nothing() {
        let factory = FilterFactory::empty();
        assert_eq!(factory.usage(), "");
        assert!(factory.create("EVEN", "").is_err());
    }
}
