//! YAML Parser
//!
//! Provides utilities for reading YAML text and rendering diagnostics.

use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue, serde_yaml::Error> {
        serde_yaml::from_str(yaml_str)
    }

    /// True when the text holds no YAML content (only whitespace or comments)
    pub fn is_blank(yaml_str: &str) -> bool {
        yaml_str.lines().all(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || trimmed.starts_with('#')
        })
    }

    /// Render the lines around `line` with a caret under `column`.
    ///
    /// ```text
    ///    2 | key:
    /// >  3 |  - value:
    ///         ^
    ///    4 |      another: map
    /// ```
    ///
    /// Returns an empty string when `line` is outside the source.
    pub fn excerpt(source: &str, line: usize, column: usize) -> String {
        let lines: Vec<&str> = source.lines().collect();
        if line == 0 || line > lines.len() {
            return String::new();
        }

        let first = line.saturating_sub(1).max(1);
        let last = (line + 1).min(lines.len());
        let width = last.to_string().len();

        let mut rendered = Vec::with_capacity(last - first + 2);
        for number in first..=last {
            let marker = if number == line { '>' } else { ' ' };
            rendered.push(format!(
                "{}  {:>width$} | {}",
                marker,
                number,
                lines[number - 1],
                width = width
            ));
            if number == line {
                // marker, two spaces, number, " | "
                let indent = width + 6 + column.saturating_sub(1);
                rendered.push(format!("{}^", " ".repeat(indent)));
            }
        }
        rendered.join("\n")
    }

    /// Join keys the way diagnostics list them: `k1,k2,k3`
    pub fn join_keys<'a>(keys: impl IntoIterator<Item = &'a String>) -> String {
        keys.into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = YamlParser::parse("init:\n  extra_args: [a]").unwrap();
        assert!(yaml.is_mapping());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = YamlParser::parse("invalid: yaml: content: [");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(YamlParser::is_blank(""));
        assert!(YamlParser::is_blank("  \n\t\n"));
        assert!(YamlParser::is_blank("# just a comment\n"));
        assert!(!YamlParser::is_blank("plan"));
    }

    #[test]
    fn test_excerpt_middle_line() {
        let source = "\nkey:\n - value:\n     another: map";
        let excerpt = YamlParser::excerpt(source, 3, 2);
        assert_eq!(
            excerpt,
            "   2 | key:\n>  3 |  - value:\n        ^\n   4 |      another: map"
        );
    }

    #[test]
    fn test_excerpt_first_line() {
        let excerpt = YamlParser::excerpt("[a, b\nc", 1, 1);
        assert_eq!(excerpt, ">  1 | [a, b\n       ^\n   2 | c");
    }

    #[test]
    fn test_excerpt_last_line() {
        let excerpt = YamlParser::excerpt("a\nb", 2, 1);
        assert_eq!(excerpt, "   1 | a\n>  2 | b\n       ^");
    }

    #[test]
    fn test_excerpt_out_of_range() {
        assert_eq!(YamlParser::excerpt("a", 5, 1), "");
        assert_eq!(YamlParser::excerpt("a", 0, 1), "");
    }

    #[test]
    fn test_excerpt_pads_line_numbers() {
        let source = (1..=10).map(|n| format!("l{}", n)).collect::<Vec<_>>().join("\n");
        let excerpt = YamlParser::excerpt(&source, 9, 1);
        assert_eq!(
            excerpt,
            "    8 | l8\n>   9 | l9\n        ^\n   10 | l10"
        );
    }

    #[test]
    fn test_join_keys() {
        let keys = vec!["key1".to_string(), "key2".to_string()];
        assert_eq!(YamlParser::join_keys(&keys), "key1,key2");
    }
}
