//! Lenient numeric scanning for the tier text and user input.
//!
//! Values are read as the longest numeric prefix, the way a browser's
//! `parseFloat`/`parseInt` read them: `"1.5秒"` is `1.5`, `"80%"` is `80`,
//! `"abc"` is nothing.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FLOAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Separators allowed between a label and its value.
fn strip_separators(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '：')
}

/// Parse the leading decimal number of `input`, ignoring leading whitespace
/// and label separators. Returns `None` when no digits lead the text.
pub fn leading_float(input: &str) -> Option<f64> {
    let trimmed = strip_separators(input);
    let found = LEADING_FLOAT_REGEX.find(trimmed)?;
    found.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of `input`. Fractions truncate: `"2.5"` is `2`.
/// Digits beyond the `i64` range saturate.
pub fn leading_int(input: &str) -> Option<i64> {
    let trimmed = strip_separators(input);
    let digits = LEADING_INT_REGEX.find(trimmed)?.as_str();
    match digits.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Integer '{}' out of range, saturating", digits);
            Some(if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })
        }
    }
}

/// Find `label` in `line` and parse the value directly after it, allowing
/// only separators in between. A trailing percent sign is ignored; text that
/// does not start with a number yields `None`.
pub fn number_after(line: &str, label: &str) -> Option<f64> {
    let start = line.find(label)? + label.len();
    let value = line[start..].trim_end().trim_end_matches('%');
    leading_float(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float_ignores_suffix() {
        assert_eq!(leading_float("1.5秒"), Some(1.5));
        assert_eq!(leading_float("：12"), Some(12.0));
        assert_eq!(leading_float("  -3.25e1x"), Some(-32.5));
        assert_eq!(leading_float(".5"), Some(0.5));
    }

    #[test]
    fn test_leading_float_rejects_non_numeric() {
        assert_eq!(leading_float("abc"), None);
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("：abc"), None);
        assert_eq!(leading_float("x12"), None);
    }

    #[test]
    fn test_leading_int_truncates() {
        assert_eq!(leading_int(" 3"), Some(3));
        assert_eq!(leading_int("：2.5"), Some(2));
        assert_eq!(leading_int("七"), None);
    }

    #[test]
    fn test_leading_int_saturates() {
        assert_eq!(leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_int("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_number_after_label_anywhere_on_line() {
        let line = "冷却：无宠物冷却回复：80.5%";
        assert_eq!(number_after(line, "无宠物冷却回复"), Some(80.5));
        assert_eq!(number_after(line, "6阶宠物冷却回复"), None);
        assert_eq!(number_after("无宠物冷却回复：--", "无宠物冷却回复"), None);
    }

    #[test]
    fn test_number_after_is_anchored_to_label() {
        assert_eq!(number_after("无宠物冷却回复：abc 50%", "无宠物冷却回复"), None);
        assert_eq!(
            number_after("无宠物冷却回复：暂无（参考6阶宠物 40%）", "无宠物冷却回复"),
            None
        );
        assert_eq!(number_after("无宠物冷却回复 80% / 1阶", "无宠物冷却回复"), Some(80.0));
    }

    #[test]
    fn test_number_after_multiple_labels() {
        let line = "无宠物冷却回复 80% / 1阶宠物冷却回复 65%";
        assert_eq!(number_after(line, "无宠物冷却回复"), Some(80.0));
        assert_eq!(number_after(line, "1阶宠物冷却回复"), Some(65.0));
    }
}
