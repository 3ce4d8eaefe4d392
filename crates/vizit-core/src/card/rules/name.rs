//! Full name and job title extraction.

use super::collapse_whitespace;
use super::patterns::{FULL_NAME, ROLE_LINE};

/// Check whether a line looks like a job title.
///
/// Single shared predicate for both the pairing rule and the standalone
/// role fallback. `extra` carries configured keywords on top of the
/// built-in set, already lowercased.
pub fn is_role_line(line: &str, extra: &[String]) -> bool {
    if ROLE_LINE.is_match(line) {
        return true;
    }
    if extra.is_empty() {
        return false;
    }
    let lower = line.to_lowercase();
    extra.iter().any(|keyword| lower.contains(keyword.as_str()))
}

/// Check whether a line, after whitespace collapsing, contains a full
/// personal name: at least three capitalized words.
pub fn looks_like_full_name(line: &str) -> bool {
    FULL_NAME.is_match(&collapse_whitespace(line))
}

/// Primary rule: a job-title line immediately followed by a full-name
/// line. Earlier pairs take priority. Returns `(position, full_name)`,
/// the name whitespace-normalized, the title verbatim.
pub fn extract_role_name_pair(
    lines: &[&str],
    extra_roles: &[String],
) -> Option<(String, String)> {
    lines.windows(2).find_map(|pair| {
        let (role, name) = (pair[0], pair[1]);
        if is_role_line(role, extra_roles) && looks_like_full_name(name) {
            Some((role.to_string(), collapse_whitespace(name)))
        } else {
            None
        }
    })
}

/// Fallback: first line anywhere that looks like a full name.
pub fn extract_name_anywhere(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| looks_like_full_name(line))
        .map(|line| collapse_whitespace(line))
}

/// Fallback: first job-title line anywhere, verbatim.
pub fn extract_role_anywhere(lines: &[&str], extra_roles: &[String]) -> Option<String> {
    lines
        .iter()
        .find(|line| is_role_line(line, extra_roles))
        .map(|line| (*line).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pairing_takes_earliest_pair() {
        let lines = vec![
            "Менеджер отдела закупок",
            "Петров Илья Иванович",
            "Директор",
            "Сидоров Антон Павлович",
        ];
        let (position, name) = extract_role_name_pair(&lines, &[]).unwrap();
        assert_eq!(position, "Менеджер отдела закупок");
        assert_eq!(name, "Петров Илья Иванович");
    }

    #[test]
    fn test_pairing_requires_name_right_after_role() {
        let lines = vec!["Директор", "ООО «Ромашка»", "Петров Илья Иванович"];
        assert_eq!(extract_role_name_pair(&lines, &[]), None);
    }

    #[test]
    fn test_pairing_collapses_name_whitespace() {
        let lines = vec!["Менеджер", "Петров  Илья\tИванович"];
        let (_, name) = extract_role_name_pair(&lines, &[]).unwrap();
        assert_eq!(name, "Петров Илья Иванович");
    }

    #[test]
    fn test_name_anywhere_takes_first_match() {
        let lines = vec!["ООО «Ромашка»", "Петров Илья Иванович", "Сидоров Антон Павлович"];
        assert_eq!(
            extract_name_anywhere(&lines),
            Some("Петров Илья Иванович".to_string())
        );
    }

    #[test]
    fn test_extra_role_keywords_extend_the_shared_predicate() {
        let extra = vec!["kierownik".to_string()];
        assert!(is_role_line("Kierownik działu", &extra));
        assert!(!is_role_line("Kierownik działu", &[]));
        assert_eq!(
            extract_role_anywhere(&["Kierownik działu"], &extra),
            Some("Kierownik działu".to_string())
        );
    }
}
