use lingo_core::{Detection, Language, ScoreDistribution};

/// Plain-text report: one percentage line per language and method.
pub fn format_text(detection: &Detection, decimals: usize) -> String {
    let mut out = String::new();
    out.push_str("Dictionary method, this text looks:\n");
    write_lines(&mut out, &detection.dictionary, decimals, true);
    out.push('\n');
    out.push_str("Matrix method, this text looks:\n");
    write_lines(&mut out, &detection.matrix, decimals, false);
    out
}

pub fn format_json(detection: &Detection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(detection)
}

fn write_lines(out: &mut String, scores: &ScoreDistribution, decimals: usize, with_unknown: bool) {
    for language in Language::KNOWN {
        push_line(out, scores.get(language), language, decimals);
    }
    if with_unknown {
        push_line(out, scores.get(Language::Unknown), Language::Unknown, decimals);
    }
}

fn push_line(out: &mut String, score: f64, language: Language, decimals: usize) {
    out.push_str(&format!(
        "   - {:.*}% {}\n",
        decimals,
        score * 100.0,
        language.label()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Detection {
        Detection {
            dictionary: [
                (Language::Unknown, 0.0),
                (Language::French, 0.5),
                (Language::English, 0.5),
                (Language::Spanish, 0.0),
            ]
            .into_iter()
            .collect(),
            matrix: [
                (Language::French, 0.6),
                (Language::English, 0.3),
                (Language::Spanish, 0.1),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn text_report_layout() {
        let text = format_text(&sample(), 2);
        let expected = "\
Dictionary method, this text looks:
   - 50.00% French
   - 50.00% English
   - 0.00% Spanish
   - 0.00% unrecognized

Matrix method, this text looks:
   - 60.00% French
   - 30.00% English
   - 10.00% Spanish
";
        assert_eq!(text, expected);
    }

    #[test]
    fn matrix_section_has_no_unrecognized_line() {
        let text = format_text(&sample(), 0);
        let matrix = text.split("Matrix method").nth(1).unwrap();
        assert!(!matrix.contains("unrecognized"));
        assert!(matrix.contains("   - 60% French"));
    }

    #[test]
    fn json_report_uses_language_names() {
        let json = format_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dictionary"]["french"], 0.5);
        assert_eq!(value["dictionary"]["unknown"], 0.0);
        assert!(value["matrix"].get("unknown").is_none());
    }
}
