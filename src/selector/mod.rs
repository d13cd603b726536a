//! Selector Infrastructure
//!
//! Every structural marker the extractors look for is a CSS selector held in
//! [`Selectors`]. Selectors are compiled once per run into
//! [`CompiledSelectors`], so an invalid override is reported before any
//! extractor touches the document.

use dom_query::Matcher;

use crate::error::{Error, Result};

pub mod profile_page;

/// CSS selectors for every region of a profile page.
///
/// Defaults come from [`profile_page`]. Item and cell selectors are matched
/// relative to their enclosing container, not the whole document.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::selector::Selectors;
///
/// let selectors = Selectors {
///     industry: "div.industry-name".to_string(),
///     ..Selectors::default()
/// };
/// assert!(selectors.compile().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub full_name: String,
    pub industry: String,
    pub annual_salary: String,
    pub summary_section: String,
    pub summary_text: String,

    pub education_item: String,
    pub education_label: String,
    pub education_institute: String,

    pub work_section: String,
    pub work_card: String,
    pub work_head: String,
    pub work_icon: String,
    pub work_icon_image: String,
    pub work_label: String,
    pub work_designation: String,
    pub work_dates: String,
    pub work_description: String,
    /// Attribute name (not a selector) carrying the company logo URL.
    pub logo_attribute: String,

    pub skill_item: String,
    pub it_skills_section: String,
    pub it_skills_row: String,
    pub it_skill_name: String,
    pub it_skill_version: String,
    pub it_skill_last_used: String,
    pub it_skill_experience: String,

    pub other_details_section: String,
    pub languages_section: String,
    pub language_item: String,
    pub language_proficiency: String,
    pub personal_section: String,
    pub desired_job_section: String,
    /// Row selector shared by the personal and desired-job tables.
    pub detail_row: String,
    pub detail_cell: String,
}

impl Default for Selectors {
    fn default() -> Self {
        use profile_page as p;

        Self {
            full_name: p::FULL_NAME.to_string(),
            industry: p::INDUSTRY.to_string(),
            annual_salary: p::ANNUAL_SALARY.to_string(),
            summary_section: p::SUMMARY_SECTION.to_string(),
            summary_text: p::SUMMARY_TEXT.to_string(),
            education_item: p::EDUCATION_ITEM.to_string(),
            education_label: p::EDUCATION_LABEL.to_string(),
            education_institute: p::EDUCATION_INSTITUTE.to_string(),
            work_section: p::WORK_SECTION.to_string(),
            work_card: p::WORK_CARD.to_string(),
            work_head: p::WORK_HEAD.to_string(),
            work_icon: p::WORK_ICON.to_string(),
            work_icon_image: p::WORK_ICON_IMAGE.to_string(),
            work_label: p::WORK_LABEL.to_string(),
            work_designation: p::WORK_DESIGNATION.to_string(),
            work_dates: p::WORK_DATES.to_string(),
            work_description: p::WORK_DESCRIPTION.to_string(),
            logo_attribute: p::LOGO_ATTRIBUTE.to_string(),
            skill_item: p::SKILL_ITEM.to_string(),
            it_skills_section: p::IT_SKILLS_SECTION.to_string(),
            it_skills_row: p::IT_SKILLS_ROW.to_string(),
            it_skill_name: p::IT_SKILL_NAME.to_string(),
            it_skill_version: p::IT_SKILL_VERSION.to_string(),
            it_skill_last_used: p::IT_SKILL_LAST_USED.to_string(),
            it_skill_experience: p::IT_SKILL_EXPERIENCE.to_string(),
            other_details_section: p::OTHER_DETAILS_SECTION.to_string(),
            languages_section: p::LANGUAGES_SECTION.to_string(),
            language_item: p::LANGUAGE_ITEM.to_string(),
            language_proficiency: p::LANGUAGE_PROFICIENCY.to_string(),
            personal_section: p::PERSONAL_SECTION.to_string(),
            desired_job_section: p::DESIRED_JOB_SECTION.to_string(),
            detail_row: p::DETAIL_ROW.to_string(),
            detail_cell: p::DETAIL_CELL.to_string(),
        }
    }
}

/// [`Selectors`] compiled into matchers, ready to run against a document.
///
/// Field meanings mirror [`Selectors`].
pub struct CompiledSelectors {
    pub full_name: Matcher,
    pub industry: Matcher,
    pub annual_salary: Matcher,
    pub summary_section: Matcher,
    pub summary_text: Matcher,

    pub education_item: Matcher,
    pub education_label: Matcher,
    pub education_institute: Matcher,

    pub work_section: Matcher,
    pub work_card: Matcher,
    pub work_head: Matcher,
    pub work_icon: Matcher,
    pub work_icon_image: Matcher,
    pub work_label: Matcher,
    pub work_designation: Matcher,
    pub work_dates: Matcher,
    pub work_description: Matcher,
    pub logo_attribute: String,

    pub skill_item: Matcher,
    pub it_skills_section: Matcher,
    pub it_skills_row: Matcher,
    pub it_skill_name: Matcher,
    pub it_skill_version: Matcher,
    pub it_skill_last_used: Matcher,
    pub it_skill_experience: Matcher,

    pub other_details_section: Matcher,
    pub languages_section: Matcher,
    pub language_item: Matcher,
    pub language_proficiency: Matcher,
    pub personal_section: Matcher,
    pub desired_job_section: Matcher,
    pub detail_row: Matcher,
    pub detail_cell: Matcher,
}

impl Selectors {
    /// Compile every selector, failing on the first invalid one.
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            full_name: compile_one("full_name", &self.full_name)?,
            industry: compile_one("industry", &self.industry)?,
            annual_salary: compile_one("annual_salary", &self.annual_salary)?,
            summary_section: compile_one("summary_section", &self.summary_section)?,
            summary_text: compile_one("summary_text", &self.summary_text)?,
            education_item: compile_one("education_item", &self.education_item)?,
            education_label: compile_one("education_label", &self.education_label)?,
            education_institute: compile_one("education_institute", &self.education_institute)?,
            work_section: compile_one("work_section", &self.work_section)?,
            work_card: compile_one("work_card", &self.work_card)?,
            work_head: compile_one("work_head", &self.work_head)?,
            work_icon: compile_one("work_icon", &self.work_icon)?,
            work_icon_image: compile_one("work_icon_image", &self.work_icon_image)?,
            work_label: compile_one("work_label", &self.work_label)?,
            work_designation: compile_one("work_designation", &self.work_designation)?,
            work_dates: compile_one("work_dates", &self.work_dates)?,
            work_description: compile_one("work_description", &self.work_description)?,
            logo_attribute: self.logo_attribute.clone(),
            skill_item: compile_one("skill_item", &self.skill_item)?,
            it_skills_section: compile_one("it_skills_section", &self.it_skills_section)?,
            it_skills_row: compile_one("it_skills_row", &self.it_skills_row)?,
            it_skill_name: compile_one("it_skill_name", &self.it_skill_name)?,
            it_skill_version: compile_one("it_skill_version", &self.it_skill_version)?,
            it_skill_last_used: compile_one("it_skill_last_used", &self.it_skill_last_used)?,
            it_skill_experience: compile_one("it_skill_experience", &self.it_skill_experience)?,
            other_details_section: compile_one(
                "other_details_section",
                &self.other_details_section,
            )?,
            languages_section: compile_one("languages_section", &self.languages_section)?,
            language_item: compile_one("language_item", &self.language_item)?,
            language_proficiency: compile_one("language_proficiency", &self.language_proficiency)?,
            personal_section: compile_one("personal_section", &self.personal_section)?,
            desired_job_section: compile_one("desired_job_section", &self.desired_job_section)?,
            detail_row: compile_one("detail_row", &self.detail_row)?,
            detail_cell: compile_one("detail_cell", &self.detail_cell)?,
        })
    }
}

fn compile_one(field: &'static str, css: &str) -> Result<Matcher> {
    if css.trim().is_empty() {
        return Err(Error::InvalidSelector {
            field,
            selector: css.to_string(),
        });
    }
    Matcher::new(css).map_err(|_| Error::InvalidSelector {
        field,
        selector: css.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_compile() {
        assert!(Selectors::default().compile().is_ok());
    }

    #[test]
    fn test_invalid_selector_reports_field() {
        let selectors = Selectors {
            work_card: "div..card[".to_string(),
            ..Selectors::default()
        };
        match selectors.compile() {
            Err(Error::InvalidSelector { field, selector }) => {
                assert_eq!(field, "work_card");
                assert_eq!(selector, "div..card[");
            }
            Err(other) => panic!("expected InvalidSelector, got {other:?}"),
            Ok(_) => panic!("expected InvalidSelector, got Ok"),
        }
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        let selectors = Selectors {
            industry: "   ".to_string(),
            ..Selectors::default()
        };
        assert!(matches!(
            selectors.compile(),
            Err(Error::InvalidSelector { field: "industry", .. })
        ));
    }

    #[test]
    fn test_logo_attribute_is_carried_verbatim() {
        let selectors = Selectors {
            logo_attribute: "src".to_string(),
            ..Selectors::default()
        };
        let compiled = selectors.compile().unwrap();
        assert_eq!(compiled.logo_attribute, "src");
    }
}
