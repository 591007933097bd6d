//! Content records: the aggregate every view reads from.
//!
//! The JSON layout (camelCase keys, optional fields omitted when unset) is
//! the persisted and exported document format. Records are lenient on input:
//! a missing field takes its default rather than failing the whole document.
//! Keys a record does not know are kept in its `extra` map and written back
//! unchanged.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{id::new_id, theme::AppTheme};

/// Unrecognised keys of a record, preserved across load and persist.
pub type Extra = Map<String, Value>;

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// The single root document holding all site content and settings.
///
/// Only `profile` and `skills` are required when deserializing; every other
/// field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
  /// Compatibility tag compared by equality against the built-in snapshot.
  /// It is not an ordered counter.
  #[serde(default)]
  pub version:     String,
  pub profile:     Profile,
  pub skills:      Vec<Skill>,
  #[serde(default)]
  pub projects:    Vec<Project>,
  #[serde(default)]
  pub experiences: Vec<Experience>,
  #[serde(default)]
  pub posts:       Vec<Post>,
  #[serde(default)]
  pub theme:       AppTheme,
  #[serde(flatten)]
  pub extra:       Extra,
}

impl AppData {
  /// Skills grouped by category, in order of each category's first
  /// appearance. Entries keep their relative order within a group.
  pub fn skills_by_category(&self) -> Vec<(&SkillCategory, Vec<&Skill>)> {
    let mut groups: Vec<(&SkillCategory, Vec<&Skill>)> = Vec::new();
    for skill in &self.skills {
      match groups.iter_mut().find(|(c, _)| *c == &skill.category) {
        Some((_, members)) => members.push(skill),
        None => groups.push((&skill.category, vec![skill])),
      }
    }
    groups
  }

  pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
    self.projects.iter().filter(|p| p.featured)
  }

  pub fn experiences_of(
    &self,
    kind: ExperienceKind,
  ) -> impl Iterator<Item = &Experience> {
    self.experiences.iter().filter(move |e| e.kind == kind)
  }
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// The site owner's profile. Image fields hold either a URL or an embedded
/// `data:` payload; both are opaque strings here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
  pub name:           String,
  pub title:          String,
  pub tagline:        String,
  pub bio:            String,
  pub email:          String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone:          Option<String>,
  pub location:       String,
  pub avatar_url:     String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hero_image_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resume_url:     Option<String>,
  pub socials:        Socials,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hobbies:        Option<Vec<String>>,
  #[serde(flatten)]
  pub extra:          Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub linkedin:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub github:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub instagram: Option<String>,
  #[serde(flatten)]
  pub extra:     Extra,
}

// ─── Skills ──────────────────────────────────────────────────────────────────

/// Skill grouping. Known categories have dedicated variants; any other string
/// is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
  #[default]
  Technical,
  Tools,
  Soft,
  Languages,
  Strategy,
  Management,
  Custom(String),
}

impl SkillCategory {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Technical => "Technical",
      Self::Tools => "Tools",
      Self::Soft => "Soft Skills",
      Self::Languages => "Languages",
      Self::Strategy => "Strategy",
      Self::Management => "Management",
      Self::Custom(s) => s,
    }
  }
}

impl From<String> for SkillCategory {
  fn from(s: String) -> Self {
    match s.as_str() {
      "Technical" => Self::Technical,
      "Tools" => Self::Tools,
      "Soft Skills" => Self::Soft,
      "Languages" => Self::Languages,
      "Strategy" => Self::Strategy,
      "Management" => Self::Management,
      _ => Self::Custom(s),
    }
  }
}

impl From<SkillCategory> for String {
  fn from(c: SkillCategory) -> Self {
    match c {
      SkillCategory::Custom(s) => s,
      known => known.as_str().to_owned(),
    }
  }
}

impl std::fmt::Display for SkillCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
  pub id:          String,
  pub name:        String,
  pub category:    SkillCategory,
  /// Expected in `0..=100`; neither clamped nor rounded.
  #[serde(serialize_with = "serialize_number")]
  pub proficiency: f64,
  #[serde(flatten)]
  pub extra:       Extra,
}

impl Skill {
  /// The placeholder entry appended by "add skill".
  pub fn placeholder() -> Self {
    Self {
      id:          new_id(),
      name:        "New Skill".to_owned(),
      category:    SkillCategory::Technical,
      proficiency: 50.0,
      extra:       Extra::new(),
    }
  }
}

/// Whole numbers are written without a fractional part, so `85` stays `85`
/// rather than becoming `85.0`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
  const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
  if value.fract() == 0.0 && value.abs() < MAX_EXACT {
    serializer.serialize_i64(*value as i64)
  } else {
    serializer.serialize_f64(*value)
  }
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
  pub id:               String,
  pub title:            String,
  pub description:      String,
  pub full_description: String,
  pub technologies:     Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub skills_gained:    Option<Vec<String>>,
  pub image_url:        String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_url:         Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code_url:         Option<String>,
  pub featured:         bool,
  #[serde(flatten)]
  pub extra:            Extra,
}

impl Project {
  /// The placeholder entry appended by "add project".
  pub fn placeholder() -> Self {
    Self {
      id:               new_id(),
      title:            "New Project".to_owned(),
      description:      "Short description".to_owned(),
      full_description: "Full description".to_owned(),
      technologies:     vec!["Tech 1".to_owned()],
      skills_gained:    None,
      image_url:        String::new(),
      live_url:         None,
      code_url:         None,
      featured:         false,
      extra:            Extra::new(),
    }
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceKind {
  #[default]
  Work,
  Education,
}

/// Prefix marking a description line as a section header.
pub const SECTION_HEADER_PREFIX: &str = "### ";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
  pub id:           String,
  pub role:         String,
  pub organization: String,
  pub location:     String,
  pub start_date:   String,
  pub end_date:     String,
  pub current:      bool,
  /// Bullet points; lines starting with `### ` are section headers.
  pub description:  Vec<String>,
  #[serde(rename = "type")]
  pub kind:         ExperienceKind,
  #[serde(flatten)]
  pub extra:        Extra,
}

/// A run of bullets under an optional `### ` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
  pub header:  Option<&'a str>,
  pub bullets: Vec<&'a str>,
}

impl Experience {
  /// A blank work entry with a fresh id, ready to be filled in and saved.
  pub fn draft() -> Self {
    Self {
      id: new_id(),
      description: vec![String::new()],
      ..Self::default()
    }
  }

  /// Group the description into sections. Bullets before the first header
  /// form a headerless leading section; a header with no bullets yields an
  /// empty section.
  pub fn sections(&self) -> Vec<Section<'_>> {
    let mut sections: Vec<Section<'_>> = Vec::new();
    for line in &self.description {
      if let Some(header) = line.strip_prefix(SECTION_HEADER_PREFIX) {
        sections.push(Section { header: Some(header), bullets: Vec::new() });
        continue;
      }
      match sections.last_mut() {
        Some(section) => section.bullets.push(line),
        None => sections.push(Section { header: None, bullets: vec![line] }),
      }
    }
    sections
  }
}

// ─── Posts ───────────────────────────────────────────────────────────────────

/// Blog post record. Part of the document schema but not rendered anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
  pub id:      String,
  pub title:   String,
  pub date:    String,
  pub summary: String,
  pub content: String,
  pub tags:    Vec<String>,
  #[serde(flatten)]
  pub extra:   Extra,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn experience(lines: &[&str]) -> Experience {
    Experience {
      description: lines.iter().map(|s| (*s).to_owned()).collect(),
      ..Experience::default()
    }
  }

  #[test]
  fn category_known_and_custom_round_trip() {
    let json = serde_json::json!(["Soft Skills", "Underwater Basketry"]);
    let cats: Vec<SkillCategory> = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(cats[0], SkillCategory::Soft);
    assert_eq!(cats[1], SkillCategory::Custom("Underwater Basketry".into()));
    assert_eq!(serde_json::to_value(&cats).unwrap(), json);
  }

  #[test]
  fn experience_kind_serialises_as_type() {
    let exp = Experience { kind: ExperienceKind::Education, ..Experience::default() };
    let value = serde_json::to_value(&exp).unwrap();
    assert_eq!(value["type"], "Education");
    assert!(value.get("kind").is_none());
  }

  #[test]
  fn optional_profile_fields_are_omitted() {
    let value = serde_json::to_value(Profile::default()).unwrap();
    assert!(value.get("phone").is_none());
    assert!(value.get("heroImageUrl").is_none());
    assert!(value["socials"].as_object().unwrap().is_empty());
    assert_eq!(value["avatarUrl"], "");
  }

  #[test]
  fn sections_split_on_headers() {
    let exp = experience(&[
      "Full-time contract",
      "### About",
      "A company.",
      "### Skills",
      "Excel",
      "Reporting",
      "### Empty",
    ]);
    let sections = exp.sections();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0], Section { header: None, bullets: vec!["Full-time contract"] });
    assert_eq!(sections[1].header, Some("About"));
    assert_eq!(sections[2].bullets, vec!["Excel", "Reporting"]);
    assert_eq!(sections[3], Section { header: Some("Empty"), bullets: vec![] });
  }

  #[test]
  fn header_prefix_needs_the_space() {
    let exp = experience(&["###NoSpace"]);
    assert_eq!(exp.sections()[0].header, None);
  }

  #[test]
  fn skills_grouped_in_first_seen_order() {
    let skill = |name: &str, category: SkillCategory| Skill {
      id: new_id(),
      name: name.into(),
      category,
      proficiency: 50.0,
      extra: Extra::new(),
    };
    let data = AppData {
      version:     String::new(),
      profile:     Profile::default(),
      skills:      vec![
        skill("Excel", SkillCategory::Tools),
        skill("Rust", SkillCategory::Technical),
        skill("Canva", SkillCategory::Tools),
      ],
      projects:    vec![],
      experiences: vec![],
      posts:       vec![],
      theme:       AppTheme::default(),
      extra:       Extra::new(),
    };
    let groups = data.skills_by_category();
    assert_eq!(groups.len(), 2);
    assert_eq!(*groups[0].0, SkillCategory::Tools);
    let names: Vec<_> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Excel", "Canva"]);
  }

  #[test]
  fn fractional_proficiency_is_kept() {
    let skill: Skill = serde_json::from_value(serde_json::json!({
      "id": "a", "name": "Rust", "category": "Technical", "proficiency": 85.5
    }))
    .unwrap();
    assert_eq!(skill.proficiency, 85.5);
    assert_eq!(serde_json::to_value(&skill).unwrap()["proficiency"], 85.5);
  }

  #[test]
  fn whole_proficiency_is_written_as_integer() {
    let skill = Skill { proficiency: 85.0, ..Skill::placeholder() };
    let json = serde_json::to_string(&skill).unwrap();
    assert!(json.contains(r#""proficiency":85"#));
    assert!(!json.contains("85.0"));
  }

  #[test]
  fn unknown_keys_survive_a_round_trip() {
    let json = serde_json::json!({
      "name": "Alex",
      "extraKey": { "nested": [1, 2] },
      "socials": { "mastodon": "@alex" }
    });
    let profile: Profile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.extra["extraKey"], serde_json::json!({ "nested": [1, 2] }));

    let back = serde_json::to_value(&profile).unwrap();
    assert_eq!(back["extraKey"]["nested"][1], 2);
    assert_eq!(back["socials"]["mastodon"], "@alex");
    assert!(back.get("extra").is_none());
  }
}
