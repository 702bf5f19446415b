//! Trend table rendering and report splicing
//!
//! Produces the HTML fragment appended to rendered reports in compare mode,
//! matching the presentation of the JSON `deltas` data: category label,
//! current and previous score as percentages, signed delta, with the usual
//! green / amber / red banding.

use crate::models::CategoryDelta;
use anyhow::Result;
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::BTreeMap;

const GREEN: &str = "#28a745";
const AMBER: &str = "#ffc107";
const RED: &str = "#dc3545";

/// Render the trend comparison table for the given delta map.
pub fn render_trend_table(deltas: &BTreeMap<String, CategoryDelta>) -> Result<String> {
    let mut rows = String::new();
    for (id, d) in deltas {
        rows.push_str(&format!(
            r#"
      <tr style="border-bottom: 1px solid #dee2e6;">
        <td style="padding: 12px; font-weight: 500;">{label}</td>
        <td style="padding: 12px; text-align: center; font-weight: bold; color: {current_color};">{current:.0}%</td>
        <td style="padding: 12px; text-align: center;">{previous:.0}%</td>
        <td style="padding: 12px; text-align: center; font-weight: bold; color: {delta_color};">{delta:.1}%</td>
      </tr>"#,
            label = humanize_category(id)?,
            current_color = score_color(d.current),
            current = d.current * 100.0,
            previous = d.previous * 100.0,
            delta_color = delta_color(d.delta),
            delta = d.delta * 100.0,
        ));
    }

    Ok(format!(
        r#"
<div style="margin-top: 20px; padding: 20px; border: 1px solid #ddd; border-radius: 8px; background: #f9f9f9;">
  <h2 style="color: #333;">📈 Trends Comparison</h2>
  <table style="width:100%; border-collapse: collapse; font-size: 14px;">
    <thead style="background: #e9ecef;">
      <tr>
        <th style="padding: 12px; text-align: left; border-bottom: 2px solid #dee2e6;">Category</th>
        <th style="padding: 12px; text-align: center; border-bottom: 2px solid #dee2e6;">Current</th>
        <th style="padding: 12px; text-align: center; border-bottom: 2px solid #dee2e6;">Previous</th>
        <th style="padding: 12px; text-align: center; border-bottom: 2px solid #dee2e6;">Δ</th>
      </tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
</div>"#
    ))
}

/// Splice a fragment immediately before the closing body tag.
///
/// The tag is matched case-insensitively; when a document has no body tag
/// the fragment is appended at the end instead.
pub fn splice_before_body(report_html: &str, fragment: &str) -> Result<String> {
    let re = RegexBuilder::new(r"</body>")
        .case_insensitive(true)
        .build()?;
    if re.is_match(report_html) {
        let replacement = format!("{}</body>", fragment);
        Ok(re.replace(report_html, NoExpand(&replacement)).into_owned())
    } else {
        Ok(format!("{}{}", report_html, fragment))
    }
}

/// Human-readable category label: a space before each capitalized segment.
fn humanize_category(id: &str) -> Result<String> {
    let re = Regex::new("([A-Z])")?;
    Ok(re.replace_all(id, " $1").trim().to_string())
}

fn score_color(score: f64) -> &'static str {
    if score >= 0.9 {
        GREEN
    } else if score >= 0.5 {
        AMBER
    } else {
        RED
    }
}

fn delta_color(delta: f64) -> &'static str {
    if delta >= 0.0 {
        GREEN
    } else {
        RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(entries: &[(&str, f64, f64)]) -> BTreeMap<String, CategoryDelta> {
        entries
            .iter()
            .map(|(id, current, previous)| {
                (
                    id.to_string(),
                    CategoryDelta {
                        current: *current,
                        previous: *previous,
                        delta: current - previous,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn one_row_per_category_with_percentages() {
        let table =
            render_trend_table(&deltas(&[("performance", 0.93, 0.88), ("seo", 0.5, 0.7)]))
                .unwrap();
        assert_eq!(table.matches("<tr style=\"border-bottom").count(), 2);
        assert!(table.contains("93%"));
        assert!(table.contains("88%"));
        assert!(table.contains("5.0%"));
        assert!(table.contains("-20.0%"));
    }

    #[test]
    fn current_score_band_colors() {
        let high = render_trend_table(&deltas(&[("a", 0.9, 0.9)])).unwrap();
        assert!(high.contains(&format!("color: {};\">90%", GREEN)));

        let mid = render_trend_table(&deltas(&[("a", 0.5, 0.5)])).unwrap();
        assert!(mid.contains(&format!("color: {};\">50%", AMBER)));

        let low = render_trend_table(&deltas(&[("a", 0.49, 0.49)])).unwrap();
        assert!(low.contains(&format!("color: {};\">49%", RED)));
    }

    #[test]
    fn delta_sign_colors() {
        let up = render_trend_table(&deltas(&[("a", 0.8, 0.7)])).unwrap();
        assert!(up.contains(&format!("color: {};\">10.0%", GREEN)));

        let down = render_trend_table(&deltas(&[("a", 0.6, 0.7)])).unwrap();
        assert!(down.contains(&format!("color: {};\">-10.0%", RED)));
    }

    #[test]
    fn labels_get_spaces_before_capitals() {
        assert_eq!(humanize_category("bestPractices").unwrap(), "best Practices");
        assert_eq!(humanize_category("performance").unwrap(), "performance");
        assert_eq!(humanize_category("PWA").unwrap(), "P W A");
    }

    #[test]
    fn fragment_lands_before_the_closing_body_tag() {
        let doc = "<html><body><p>report</p></body></html>";
        let out = splice_before_body(doc, "<div>trends</div>").unwrap();
        assert_eq!(out, "<html><body><p>report</p><div>trends</div></body></html>");
    }

    #[test]
    fn body_tag_matches_case_insensitively() {
        let doc = "<HTML><BODY>x</BODY></HTML>";
        let out = splice_before_body(doc, "<div>t</div>").unwrap();
        assert_eq!(out, "<HTML><BODY>x<div>t</div></BODY></HTML>");
    }

    #[test]
    fn documents_without_a_body_get_the_fragment_appended() {
        let out = splice_before_body("<p>bare</p>", "<div>t</div>").unwrap();
        assert_eq!(out, "<p>bare</p><div>t</div>");
    }

    #[test]
    fn empty_delta_map_renders_an_empty_table() {
        let table = render_trend_table(&BTreeMap::new()).unwrap();
        assert!(table.contains("Trends Comparison"));
        assert!(!table.contains("<tr style=\"border-bottom"));
    }
}
