//! Company line extraction.

use super::patterns::COMPANY_LINE;

/// First line carrying a legal-entity marker, a quote or a domain prefix.
///
/// A candidate is skipped when it contains the first token of an already
/// resolved full name — without this the rule re-captures the name line on
/// cards where the name is wrapped in quotes. Extraction order therefore
/// matters: the name must be resolved before the company is attempted.
pub fn extract_company(lines: &[&str], full_name: Option<&str>) -> Option<String> {
    let name_token = full_name
        .and_then(|name| name.split(' ').next())
        .filter(|token| !token.is_empty());

    lines
        .iter()
        .filter(|line| COMPANY_LINE.is_match(line))
        .find(|line| name_token.is_none_or(|token| !line.contains(token)))
        .map(|line| (*line).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_takes_first_marker_line() {
        let lines = vec!["Петров Илья Иванович", "ООО «Ромашка»", "ЗАО Лютик"];
        assert_eq!(
            extract_company(&lines, None),
            Some("ООО «Ромашка»".to_string())
        );
    }

    #[test]
    fn test_skips_line_containing_name_token() {
        let lines = vec!["ООО Иван Трейд", "ЗАО Лютик"];
        let company = extract_company(&lines, Some("Иван Петров Сидоров"));
        assert_eq!(company, Some("ЗАО Лютик".to_string()));
    }

    #[test]
    fn test_name_guard_can_reject_all_candidates() {
        let lines = vec!["ООО Иван Трейд"];
        assert_eq!(extract_company(&lines, Some("Иван Петров Сидоров")), None);
    }

    #[test]
    fn test_no_guard_without_resolved_name() {
        let lines = vec!["ООО Иван Трейд"];
        assert_eq!(
            extract_company(&lines, None),
            Some("ООО Иван Трейд".to_string())
        );
    }
}
