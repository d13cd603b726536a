//! Key skills and the IT-skills table.

use dom_query::{Matcher, Selection};
use tracing::debug;

use super::{ExtractContext, Fragment};
use crate::dom;
use crate::result::ItSkillRow;
use crate::selector::CompiledSelectors;

/// Trimmed text of every skill chip, in page order.
pub fn extract_skills(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let skills = dom::find_all(root, &ctx.selectors.skill_item)
        .iter()
        .map(dom::text)
        .collect();
    Fragment::Skills(skills)
}

/// Rows missing any of the four cells are dropped whole.
pub fn extract_it_skills(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let s = ctx.selectors;
    let Some(section) = dom::find_first(root, &s.it_skills_section) else {
        return Fragment::ItSkills(Vec::new());
    };

    let rows = dom::find_all(&section, &s.it_skills_row)
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let parsed = it_skill_row(row, s);
            if parsed.is_none() {
                debug!(index, "dropping incomplete IT skill row");
            }
            parsed
        })
        .collect();
    Fragment::ItSkills(rows)
}

fn it_skill_row(row: &Selection, s: &CompiledSelectors) -> Option<ItSkillRow> {
    let cell = |matcher: &Matcher| dom::find_first(row, matcher).map(|c| dom::text(&c));

    Some(ItSkillRow {
        skill: cell(&s.it_skill_name)?,
        version: cell(&s.it_skill_version)?,
        last_used: cell(&s.it_skill_last_used)?,
        experience: cell(&s.it_skill_experience)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::run_single;

    fn row(cells: &[(&str, &str)]) -> String {
        let inner: String = cells
            .iter()
            .map(|(class, text)| format!(r#"<div class="data-cell {class}">{text}</div>"#))
            .collect();
        format!(r#"<div class="table-tuple">{inner}</div>"#)
    }

    fn table(rows: &[String]) -> String {
        format!(r#"<div class="cv-prev-it-skills">{}</div>"#, rows.concat())
    }

    fn it_skills(html: &str) -> Vec<ItSkillRow> {
        match run_single(extract_it_skills, html, None) {
            Fragment::ItSkills(rows) => rows,
            other => panic!("expected it skills fragment, got {other:?}"),
        }
    }

    #[test]
    fn test_skills_in_order() {
        let html = r#"
            <div class="skills"> Rust </div>
            <div class="skills">Kubernetes</div>
            <div class="skills">SQL</div>
        "#;
        assert_eq!(
            run_single(extract_skills, html, None),
            Fragment::Skills(vec!["Rust".to_string(), "Kubernetes".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn test_skills_include_it_table_cells() {
        let it_row = row(&[
            ("skills", "Java"),
            ("version", "17"),
            ("lastUsed", "2024"),
            ("exp", "5y"),
        ]);
        let html = format!(r#"<div class="skills">Go</div>{}"#, table(&[it_row]));
        assert_eq!(
            run_single(extract_skills, &html, None),
            Fragment::Skills(vec!["Go".to_string(), "Java".to_string()])
        );
    }

    #[test]
    fn test_complete_row() {
        let html = table(&[row(&[
            ("skills", " Rust "),
            ("version", "1.85"),
            ("lastUsed", "2025"),
            ("exp", "3 Years"),
        ])]);
        assert_eq!(
            it_skills(&html),
            vec![ItSkillRow {
                skill: "Rust".to_string(),
                version: "1.85".to_string(),
                last_used: "2025".to_string(),
                experience: "3 Years".to_string(),
            }]
        );
    }

    #[test]
    fn test_row_missing_any_cell_is_dropped() {
        let full = [("skills", "A"), ("version", "1"), ("lastUsed", "2020"), ("exp", "1y")];
        for missing in 0..full.len() {
            let partial: Vec<(&str, &str)> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != missing)
                .map(|(_, cell)| *cell)
                .collect();
            let html = table(&[row(&partial), row(&full)]);
            let rows = it_skills(&html);
            assert_eq!(rows.len(), 1, "row without cell {missing} should be dropped");
            assert_eq!(rows[0].skill, "A");
        }
    }

    #[test]
    fn test_empty_cell_still_counts_as_present() {
        let html = table(&[row(&[
            ("skills", "C"),
            ("version", ""),
            ("lastUsed", "2019"),
            ("exp", "2y"),
        ])]);
        let rows = it_skills(&html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].version, "");
    }

    #[test]
    fn test_rows_outside_section_are_ignored() {
        let html = row(&[("skills", "A"), ("version", "1"), ("lastUsed", "2020"), ("exp", "1y")]);
        assert!(it_skills(&html).is_empty());
    }
}
