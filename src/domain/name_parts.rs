use serde::Serialize;

use super::{trim::trim_decorations, InvalidArgument};

const SEPARATORS: [char; 2] = [',', ';'];

/// First and last name split out of a single-string name.
///
/// Names without a separator take their trailing token as last name and
/// all prior tokens as first name, `"Tim Anton Schulz-Müller"` gives
/// `"Tim Anton"` / `"Schulz-Müller"`. A comma or semicolon puts the last
/// name first, `"Schulz-Müller, Tim Anton"` gives the same parts.
/// Surrounding whitespace, separators and quotes are ignored and interior
/// whitespace runs collapse to a single space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameParts {
    first_name: String,
    last_name: String,
}

impl NameParts {
    pub fn parse(s: &str) -> Result<NameParts, InvalidArgument> {
        let name = trim_decorations(s);
        if name.is_empty() {
            return Err(InvalidArgument::EmptyName);
        }

        if let Some((last, first)) = name.split_once(&SEPARATORS[..]) {
            return Ok(NameParts {
                first_name: collapse_whitespace(trim_decorations(first)),
                last_name: collapse_whitespace(trim_decorations(last)),
            });
        }

        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        let last_name = tokens.pop().unwrap_or_default().to_string();

        Ok(NameParts {
            first_name: tokens.join(" "),
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Consumes the parts as `(first_name, last_name)`.
    pub fn into_parts(self) -> (String, String) {
        (self.first_name, self.last_name)
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
