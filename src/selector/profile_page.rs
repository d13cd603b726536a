//! Profile Page Markers
//!
//! CSS selectors for the bundled resume/profile page layout. Several class
//! names are build-generated hashes (`OesXg`, `_2NDnc`, ...) and change when
//! the site redeploys; override them through `Selectors` rather than editing
//! these constants.

// ============================================================
// SCALAR FIELDS
// ============================================================

pub const FULL_NAME: &str = "div.name";
pub const INDUSTRY: &str = "div.OesXg";
pub const ANNUAL_SALARY: &str = "div.vOrcj";
pub const SUMMARY_SECTION: &str = "div._2NDnc";
pub const SUMMARY_TEXT: &str = "div.Ju-0N";

// ============================================================
// EDUCATION
// ============================================================

pub const EDUCATION_ITEM: &str = "div.edu-label";
/// Holds "Degree, Major, Year".
pub const EDUCATION_LABEL: &str = "div.desig";
pub const EDUCATION_INSTITUTE: &str = "span.hlite-inherit";

// ============================================================
// WORK EXPERIENCE
// ============================================================

pub const WORK_SECTION: &str = "div.work-exp";
pub const WORK_CARD: &str = "div.work-exp-card";
pub const WORK_HEAD: &str = "div.exp-head";
pub const WORK_ICON: &str = "div.exp-icon";
pub const WORK_ICON_IMAGE: &str = "img";
pub const WORK_LABEL: &str = "div.exp-label";
pub const WORK_DESIGNATION: &str = "div.desig";
pub const WORK_DATES: &str = "div.dates";
pub const WORK_DESCRIPTION: &str = "div.desc";
/// Lazy-loaded images keep the real URL here.
pub const LOGO_ATTRIBUTE: &str = "data-src";

// ============================================================
// SKILLS
// ============================================================

/// Matches IT-skills table cells too, since they also carry the `skills` class.
pub const SKILL_ITEM: &str = "div.skills";

pub const IT_SKILLS_SECTION: &str = "div.cv-prev-it-skills";
pub const IT_SKILLS_ROW: &str = "div.table-tuple";
pub const IT_SKILL_NAME: &str = "div.data-cell.skills";
pub const IT_SKILL_VERSION: &str = "div.data-cell.version";
pub const IT_SKILL_LAST_USED: &str = "div.data-cell.lastUsed";
pub const IT_SKILL_EXPERIENCE: &str = "div.data-cell.exp";

// ============================================================
// OTHER DETAILS
// ============================================================

pub const OTHER_DETAILS_SECTION: &str = "div.YQo1I";
pub const LANGUAGES_SECTION: &str = "div._88wuB";
pub const LANGUAGE_ITEM: &str = "div._9FKxR";
pub const LANGUAGE_PROFICIENCY: &str = "span._5F2Uo";
pub const PERSONAL_SECTION: &str = "div.nqhGZ";
pub const DESIRED_JOB_SECTION: &str = "div.hmFnB";
pub const DETAIL_ROW: &str = "div.tr";
pub const DETAIL_CELL: &str = "div.table-cell";
