//! Artifact version ordering
//!
//! Implements the ordering repository managers use for artifact
//! versions: numeric segments compare numerically, well-known
//! qualifiers follow a fixed precedence and anything after a `-`
//! forms a nested sub-version.
//!
//! ```text
//! 1.0-alpha < 1.0-beta < 1.0-rc1 < 1.0-SNAPSHOT < 1.0 < 1.0-sp < 1.0.1 < 1.9 < 1.10 < 2.0
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Qualifiers with a known rank, lowest first. The empty string is a release.
const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Rank of the empty (release) qualifier, as a comparable string
const RELEASE_RANK: &str = "5";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Decimal digits without leading zeros, "0" for zero
    Number(String),
    /// Qualifier after alias resolution
    Qualifier(String),
    List(Vec<Item>),
}

impl Item {
    fn number(digits: &str) -> Self {
        let stripped = digits.trim_start_matches('0');
        if stripped.is_empty() {
            Item::Number("0".to_string())
        } else {
            Item::Number(stripped.to_string())
        }
    }

    fn qualifier(raw: &str, followed_by_digit: bool) -> Self {
        let expanded = if followed_by_digit {
            match raw {
                "a" => "alpha",
                "b" => "beta",
                "m" => "milestone",
                other => other,
            }
        } else {
            raw
        };

        let value = match expanded {
            "ga" | "final" | "release" => "",
            "cr" => "rc",
            other => other,
        };
        Item::Qualifier(value.to_string())
    }

    fn segment(is_digit: bool, text: &str) -> Self {
        if is_digit {
            Item::number(text)
        } else {
            Item::qualifier(text, false)
        }
    }

    /// `0`, the release qualifier and the empty list carry no ordering weight
    fn is_null(&self) -> bool {
        match self {
            Item::Number(n) => n == "0",
            Item::Qualifier(q) => q.is_empty(),
            Item::List(items) => items.is_empty(),
        }
    }

    fn compare(&self, other: Option<&Item>) -> Ordering {
        let Some(other) = other else {
            return self.compare_to_null();
        };

        match (self, other) {
            (Item::Number(a), Item::Number(b)) => compare_digits(a, b),
            (Item::Number(_), _) => Ordering::Greater,

            (Item::Qualifier(_), Item::Number(_)) => Ordering::Less,
            (Item::Qualifier(a), Item::Qualifier(b)) => {
                comparable_qualifier(a).cmp(&comparable_qualifier(b))
            }
            (Item::Qualifier(_), Item::List(_)) => Ordering::Less,

            (Item::List(_), Item::Number(_)) => Ordering::Less,
            (Item::List(_), Item::Qualifier(_)) => Ordering::Greater,
            (Item::List(a), Item::List(b)) => compare_lists(a, b),
        }
    }

    fn compare_to_null(&self) -> Ordering {
        match self {
            Item::Number(n) if n == "0" => Ordering::Equal,
            Item::Number(_) => Ordering::Greater,
            Item::Qualifier(q) => comparable_qualifier(q).as_str().cmp(RELEASE_RANK),
            Item::List(items) => match items.first() {
                Some(first) => first.compare(None),
                None => Ordering::Equal,
            },
        }
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
    let len = left.len().max(right.len());
    for i in 0..len {
        let result = match (left.get(i), right.get(i)) {
            (Some(l), r) => l.compare(r),
            (None, Some(r)) => r.compare(None).reverse(),
            (None, None) => Ordering::Equal,
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Known qualifiers map to their rank; unknown ones sort after every
/// known qualifier, `sp` included, and lexically among themselves
fn comparable_qualifier(qualifier: &str) -> String {
    match QUALIFIERS.iter().position(|q| *q == qualifier) {
        Some(rank) => rank.to_string(),
        None => format!("{}-{qualifier}", QUALIFIERS.len()),
    }
}

/// Drop trailing null items; stops at the first non-null, non-list item
fn normalize(items: &mut Vec<Item>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if items[i].is_null() {
            items.remove(i);
        } else if !matches!(items[i], Item::List(_)) {
            break;
        }
    }
}

fn parse_items(version: &str) -> Vec<Item> {
    let version = version.to_lowercase();

    // Each `-` or digit/letter transition opens a sub-list that receives
    // every later item, so the open lists always form a single chain.
    let mut stack: Vec<Vec<Item>> = vec![Vec::new()];
    let mut is_digit = false;
    let mut start = 0;

    for (i, c) in version.char_indices() {
        if c == '.' || c == '-' {
            let segment = if i == start {
                Item::Number("0".to_string())
            } else {
                Item::segment(is_digit, &version[start..i])
            };
            push_item(&mut stack, segment);
            start = i + 1;
            if c == '-' {
                stack.push(Vec::new());
            }
        } else if c.is_ascii_digit() {
            if !is_digit && i > start {
                push_item(&mut stack, Item::qualifier(&version[start..i], true));
                start = i;
                stack.push(Vec::new());
            }
            is_digit = true;
        } else {
            if is_digit && i > start {
                push_item(&mut stack, Item::number(&version[start..i]));
                start = i;
                stack.push(Vec::new());
            }
            is_digit = false;
        }
    }

    if version.len() > start {
        push_item(&mut stack, Item::segment(is_digit, &version[start..]));
    }

    // Close the chain innermost first so parents see normalized children
    let mut child: Option<Vec<Item>> = None;
    while let Some(mut list) = stack.pop() {
        if let Some(items) = child.take() {
            list.push(Item::List(items));
        }
        normalize(&mut list);
        child = Some(list);
    }
    child.unwrap_or_default()
}

fn push_item(stack: &mut [Vec<Item>], item: Item) {
    if let Some(list) = stack.last_mut() {
        list.push(item);
    }
}

/// A parsed artifact version with total ordering
///
/// Equality follows the ordering, so `1.0` equals `1` and `1.0-ga`.
/// The original text is kept for display.
#[derive(Debug, Clone)]
pub struct ComparableVersion {
    raw: String,
    items: Vec<Item>,
}

impl ComparableVersion {
    pub fn parse(version: &str) -> Self {
        Self {
            raw: version.to_string(),
            items: parse_items(version),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ComparableVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for ComparableVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_lists(&self.items, &other.items)
    }
}

impl PartialOrd for ComparableVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ComparableVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComparableVersion {}
