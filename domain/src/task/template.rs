//! Instruction templates
//!
//! Task instructions are parameter-specific: the static template text
//! interpolates the actual runtime parameters before it reaches the
//! runtime. Interpolation is explicit `{name}` substitution, validated
//! so that every referenced placeholder has a value.

use crate::core::error::DomainError;
use crate::util::log_preview;
use std::collections::HashMap;

/// A text template with named `{placeholder}` slots.
#[derive(Debug, Clone)]
pub struct InstructionTemplate {
    template: String,
}

impl InstructionTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the template, substituting every `{name}` with its value.
    ///
    /// Fails with [`DomainError::UnresolvedPlaceholder`] if the template
    /// references a name absent from `params`, and with
    /// [`DomainError::UnterminatedPlaceholder`] on a `{` that is never
    /// closed. Literal braces are not supported; every `{...}` span is a
    /// placeholder.
    pub fn render(&self, params: &HashMap<&str, &str>) -> Result<String, DomainError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                DomainError::UnterminatedPlaceholder(log_preview(after.trim(), 32).into_owned())
            })?;
            let name = &after[..close];
            let value = params
                .get(name)
                .ok_or_else(|| DomainError::UnresolvedPlaceholder(name.to_string()))?;
            out.push_str(value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Names of all placeholders referenced by the template, in order.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    names.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_parameters() {
        let template =
            InstructionTemplate::new("Extract all readable text from the image at '{locator}'.");
        let params = HashMap::from([("locator", "https://example.com/image.png")]);

        let rendered = template.render(&params).unwrap();
        assert_eq!(
            rendered,
            "Extract all readable text from the image at 'https://example.com/image.png'."
        );
    }

    #[test]
    fn test_render_multiple_placeholders() {
        let template =
            InstructionTemplate::new("Extract content from {locator} using CSS selector '{selector}'.");
        let params = HashMap::from([("locator", "https://example.com"), ("selector", "div.title")]);

        let rendered = template.render(&params).unwrap();
        assert!(rendered.contains("https://example.com"));
        assert!(rendered.contains("'div.title'"));
    }

    #[test]
    fn test_render_missing_parameter_fails() {
        let template = InstructionTemplate::new("Read {locator} with {selector}");
        let params = HashMap::from([("locator", "x")]);

        let err = template.render(&params).unwrap_err();
        assert!(matches!(err, DomainError::UnresolvedPlaceholder(name) if name == "selector"));
    }

    #[test]
    fn test_render_unterminated_placeholder_fails() {
        let template = InstructionTemplate::new("Read {locator");
        let params = HashMap::from([("locator", "x")]);

        let err = template.render(&params).unwrap_err();
        assert!(matches!(err, DomainError::UnterminatedPlaceholder(tail) if tail == "locator"));
    }

    #[test]
    fn test_unterminated_placeholder_message_is_bounded() {
        let tail = "x".repeat(500);
        let template = InstructionTemplate::new(format!("Read {{{}", tail));

        let err = template.render(&HashMap::new()).unwrap_err();
        match err {
            DomainError::UnterminatedPlaceholder(near) => {
                assert!(near.len() <= 40);
                assert!(near.ends_with('…'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_placeholders_listed_in_order() {
        let template = InstructionTemplate::new("{a} then {b} then {a}");
        assert_eq!(template.placeholders(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_no_placeholders() {
        let template = InstructionTemplate::new("static text");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "static text");
        assert!(template.placeholders().is_empty());
    }
}
