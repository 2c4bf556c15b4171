//! Substitution engine for locale format templates

use super::attributes::AttributeStore;
use super::field::Field;

/// How `%n` markers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Bare newline
    #[default]
    Plain,
    /// Newline followed by `<br>`
    Html,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Plain => "\n",
            LineBreak::Html => "\n<br>",
        }
    }
}

impl From<bool> for LineBreak {
    fn from(html: bool) -> Self {
        if html {
            LineBreak::Html
        } else {
            LineBreak::Plain
        }
    }
}

/// Expand `%<token>` and `%n` markers in a format template.
///
/// The template is scanned once from left to right, so substituted values
/// are emitted as-is and never expanded again. A `%` that does not start a
/// known marker is copied literally. Values are not HTML-escaped in
/// [`LineBreak::Html`] mode.
pub fn render_template(template: &str, attributes: &AttributeStore, line_break: LineBreak) -> String {
    let mut result = String::with_capacity(template.len() + 64);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                chars.next();
                result.push_str(line_break.as_str());
            }
            Some(token) => match Field::from_token(token) {
                Some(field) => {
                    chars.next();
                    result.push_str(attributes.get(field));
                }
                None => result.push('%'),
            },
            None => result.push('%'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_attributes() -> AttributeStore {
        let mut attributes = AttributeStore::new();
        attributes.set(Field::Recipient, "Jane Doe");
        attributes.set(Field::AddressLine1, "123 Main St");
        attributes.set(Field::Locality, "Springfield");
        attributes.set(Field::AdminArea, "IL");
        attributes.set(Field::PostalCode, "62704");
        attributes.set(Field::Country, "USA");
        attributes
    }

    #[test]
    fn test_render_plain() {
        let result = render_template("%N%n%1%n%C, %S %Z%n%R", &us_attributes(), LineBreak::Plain);
        assert_eq!(result, "Jane Doe\n123 Main St\nSpringfield, IL 62704\nUSA");
    }

    #[test]
    fn test_render_html() {
        let result = render_template("%N%n%1%n%C, %S %Z%n%R", &us_attributes(), LineBreak::Html);
        assert_eq!(
            result,
            "Jane Doe\n<br>123 Main St\n<br>Springfield, IL 62704\n<br>USA"
        );
    }

    #[test]
    fn test_render_repeated_token() {
        let mut attributes = AttributeStore::new();
        attributes.set(Field::PostalCode, "1000");
        assert_eq!(
            render_template("%Z / %Z", &attributes, LineBreak::Plain),
            "1000 / 1000"
        );
    }

    #[test]
    fn test_unset_fields_render_empty() {
        let result = render_template("%N%n%O%n%A", &AttributeStore::new(), LineBreak::Plain);
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let mut attributes = AttributeStore::new();
        attributes.set(Field::AddressLine1, "%Z");
        attributes.set(Field::AddressLine2, "line%nbreak");
        attributes.set(Field::PostalCode, "62704");

        let result = render_template("%1|%2|%Z", &attributes, LineBreak::Plain);
        assert_eq!(result, "%Z|line%nbreak|62704");
    }

    #[test]
    fn test_unknown_markers_kept_literally() {
        let attributes = us_attributes();
        assert_eq!(
            render_template("100%% %q %s end%", &attributes, LineBreak::Plain),
            "100%% %q %s end%"
        );
    }

    #[test]
    fn test_html_values_not_escaped() {
        let mut attributes = AttributeStore::new();
        attributes.set(Field::Organization, "<b>Smith & Co</b>");
        assert_eq!(
            render_template("%O%n", &attributes, LineBreak::Html),
            "<b>Smith & Co</b>\n<br>"
        );
    }

    #[test]
    fn test_non_ascii_template() {
        let mut attributes = AttributeStore::new();
        attributes.set(Field::PostalCode, "100-0001");
        attributes.set(Field::AdminArea, "東京都");
        assert_eq!(
            render_template("〒%Z%n%S", &attributes, LineBreak::Plain),
            "〒100-0001\n東京都"
        );
    }

    #[test]
    fn test_line_break_from_bool() {
        assert_eq!(LineBreak::from(true), LineBreak::Html);
        assert_eq!(LineBreak::from(false), LineBreak::Plain);
        assert_eq!(LineBreak::default(), LineBreak::Plain);
    }
}
