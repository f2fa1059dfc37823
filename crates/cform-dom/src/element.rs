//! Element Query
//!
//! Compound selectors for querySelectorAll, closest and matches.
//! Combinators are not supported; `a, b` lists are.

use crate::{DomError, DomResult, ElementData};

/// `[name]` or `[name="value"]`
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrSelector {
    name: String,
    value: Option<String>,
}

/// One compound selector such as `input[type="radio"].choice`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrSelector>,
}

impl CompoundSelector {
    /// Parse a single compound selector
    pub fn parse(s: &str) -> DomResult<Self> {
        let invalid = || DomError::InvalidSelector(s.to_string());
        let src = s.trim();
        if src.is_empty() {
            return Err(invalid());
        }

        let mut sel = Self::default();
        let mut rest = src;

        if let Some(after) = rest.strip_prefix('*') {
            rest = after;
        } else if rest.starts_with(is_ident_char) {
            let (tag, after) = take_ident(rest);
            sel.tag = Some(tag.to_ascii_lowercase());
            rest = after;
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '#' | '.' => {
                    let (ident, after) = take_ident(&rest[1..]);
                    if ident.is_empty() {
                        return Err(invalid());
                    }
                    if c == '#' {
                        sel.id = Some(ident.to_string());
                    } else {
                        sel.classes.push(ident.to_string());
                    }
                    rest = after;
                }
                '[' => {
                    let close = rest.find(']').ok_or_else(invalid)?;
                    sel.attrs.push(parse_attr(&rest[1..close]).ok_or_else(invalid)?);
                    rest = &rest[close + 1..];
                }
                _ => return Err(invalid()),
            }
        }

        Ok(sel)
    }

    /// Check if an element matches
    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if &elem.tag_name != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| elem.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.value, elem.get_attribute(&a.name)) {
            (None, found) => found.is_some(),
            (Some(want), Some(got)) => want == got,
            (Some(_), None) => false,
        })
    }
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<CompoundSelector>);

impl SelectorList {
    pub fn parse(s: &str) -> DomResult<Self> {
        s.split(',')
            .map(CompoundSelector::parse)
            .collect::<DomResult<Vec<_>>>()
            .map(Self)
    }

    /// True if any selector in the list matches
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.0.iter().any(|sel| sel.matches(elem))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_attr(body: &str) -> Option<AttrSelector> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name.trim(), Some(unquote(value.trim())?)),
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(AttrSelector {
        name: name.to_ascii_lowercase(),
        value,
    })
}

fn unquote(v: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if let Some(inner) = v.strip_prefix(quote) {
            return inner.strip_suffix(quote).map(str::to_string);
        }
    }
    (!v.is_empty() && v.chars().all(is_ident_char)).then(|| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio(name: &str) -> ElementData {
        let mut elem = ElementData::new("input");
        elem.set_attribute("type", "radio");
        elem.set_attribute("name", name);
        elem.set_attribute("class", "radio-input");
        elem
    }

    #[test]
    fn test_compound_selector_matches() {
        let elem = radio("queryType");

        assert!(SelectorList::parse("input").unwrap().matches(&elem));
        assert!(SelectorList::parse(r#"input[name="queryType"]"#).unwrap().matches(&elem));
        assert!(SelectorList::parse("input[type=radio].radio-input").unwrap().matches(&elem));
        assert!(SelectorList::parse("[name]").unwrap().matches(&elem));
        assert!(!SelectorList::parse("textarea").unwrap().matches(&elem));
        assert!(!SelectorList::parse("input[name='consent']").unwrap().matches(&elem));
    }

    #[test]
    fn test_selector_list_any() {
        let list = SelectorList::parse(".form-group, fieldset").unwrap();
        assert!(list.matches(&ElementData::new("fieldset")));
        assert!(!list.matches(&ElementData::new("div")));
    }

    #[test]
    fn test_invalid_selectors() {
        for bad in ["", "div p", "input[", "#", "[=x]", "a,,b"] {
            assert!(
                matches!(SelectorList::parse(bad), Err(DomError::InvalidSelector(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
