//! Locale-aware string comparison for Portuguese and other Latin-script text.
//!
//! Strings are compared in three levels, like a UCA collator with default
//! strength:
//!
//! 1. base characters, ignoring accents and case (`"ação"` and `"acao"` tie here)
//! 2. accents, unaccented before accented
//! 3. case, lowercase before uppercase
//!
//! On the first level every character belongs to a group, and groups sort as
//! whitespace, punctuation, symbols, digits, then letters. Characters of the
//! same group compare by code point.
//!
//! A final code-point comparison keeps the order total, so the comparator is
//! safe to hand to `slice::sort_by`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Symbol and mark general categories (`~`, `€`, `©`, `→`, ...).
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{S}\p{M}]$").expect("Invalid symbol regex"));

/// Primary group of a character, in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

impl Group {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Group::Letter
        } else if c.is_numeric() {
            Group::Digit
        } else if c.is_whitespace() || c.is_control() {
            Group::Space
        } else if SYMBOL.is_match(c.encode_utf8(&mut [0; 4])) {
            Group::Symbol
        } else {
            Group::Punctuation
        }
    }
}

/// One collation element: a base character with its case folded away, plus the
/// accents and case that only matter on later levels.
#[derive(Debug, PartialEq, Eq)]
struct Element {
    group: Group,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

impl Element {
    fn primary(&self) -> (Group, char) {
        (self.group, self.base)
    }
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            // a leading mark with no base is kept as its own element
            match out.last_mut() {
                Some(last) => last.marks.push(c),
                None => out.push(Element {
                    group: Group::Symbol,
                    base: c,
                    marks: Vec::new(),
                    upper: false,
                }),
            }
            continue;
        }
        let mut lower = c.to_lowercase();
        let base = match (lower.next(), lower.next()) {
            (Some(single), None) => single,
            _ => c,
        };
        out.push(Element {
            group: Group::of(c),
            base,
            marks: Vec::new(),
            upper: c.is_uppercase(),
        });
    }
    out
}

/// Compare two strings under locale collation rules.
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ea = elements(a);
    let eb = elements(b);

    let primary = ea.iter().map(Element::primary).cmp(eb.iter().map(Element::primary));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = ea.iter().map(|e| &e.marks).cmp(eb.iter().map(|e| &e.marks));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}
