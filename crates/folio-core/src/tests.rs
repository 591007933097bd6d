//! Behavioural tests for `ContentStore` against `MemoryStorage`.

use std::cell::Cell;

use chrono::NaiveDate;

use crate::{
  ContentStore, Error, ImportError, STORAGE_KEY, default_data,
  model::{AppData, Experience, ExperienceKind, Profile, SkillCategory},
  patch::{DataPatch, ThemePatch},
  storage::{DurableStorage, MemoryStorage},
  store::PERSIST_ERROR_MESSAGE,
  theme::{FontFamily, HeroLayout},
};

fn store() -> ContentStore<MemoryStorage> {
  ContentStore::open(MemoryStorage::new()).expect("built-in snapshot")
}

fn stored(store: &ContentStore<MemoryStorage>) -> AppData {
  let raw = store.storage().get(STORAGE_KEY).unwrap().expect("persisted");
  serde_json::from_str(&raw).unwrap()
}

fn storage_with(data: &AppData) -> MemoryStorage {
  let mut storage = MemoryStorage::new();
  storage
    .set(STORAGE_KEY, &serde_json::to_string(data).unwrap())
    .unwrap();
  storage
}

// ─── Initialisation ──────────────────────────────────────────────────────────

#[test]
fn snapshot_parses() {
  let data = default_data().unwrap();
  assert_eq!(data.version, "1.0.2");
  assert!(!data.skills.is_empty());
  assert_eq!(data.theme.hero_layout, HeroLayout::Split);
}

#[test]
fn empty_storage_loads_defaults_and_persists_them() {
  let s = store();
  assert_eq!(s.data(), s.defaults());
  assert_eq!(stored(&s), *s.defaults());
  assert!(s.storage_error().is_none());
}

#[test]
fn default_load_is_idempotent() {
  let a = store();
  let b = store();
  assert_eq!(a.data(), b.data());
}

#[test]
fn matching_version_keeps_stored_document() {
  let mut edited = default_data().unwrap();
  edited.profile.name = "Edited".into();

  let s = ContentStore::open(storage_with(&edited)).unwrap();
  assert_eq!(s.data().profile.name, "Edited");
  assert_eq!(*s.data(), edited);
}

#[test]
fn matching_version_keeps_unknown_keys_in_storage() {
  let mut doc = serde_json::to_value(default_data().unwrap()).unwrap();
  doc["profile"]["extraKey"] = serde_json::json!("kept");
  doc["analytics"] = serde_json::json!({ "enabled": false });
  let mut storage = MemoryStorage::new();
  storage.set(STORAGE_KEY, &doc.to_string()).unwrap();

  let s = ContentStore::open(storage).unwrap();
  let raw: serde_json::Value =
    serde_json::from_str(&s.storage().get(STORAGE_KEY).unwrap().unwrap()).unwrap();
  assert_eq!(raw["profile"]["extraKey"], "kept");
  assert_eq!(raw["analytics"]["enabled"], false);
  assert_eq!(s.data().profile.extra["extraKey"], "kept");
}

#[test]
fn version_mismatch_discards_stored_document() {
  let mut old = default_data().unwrap();
  old.version = "0.9".into();
  old.profile.name = "Lost edit".into();

  let s = ContentStore::open(storage_with(&old)).unwrap();
  assert_eq!(s.data(), s.defaults());
  assert_eq!(stored(&s), *s.defaults());
}

#[test]
fn version_is_compared_by_equality_not_order() {
  let mut newer = default_data().unwrap();
  newer.version = "99.0.0".into();

  let s = ContentStore::open(storage_with(&newer)).unwrap();
  assert_eq!(s.data().version, "1.0.2");
}

#[test]
fn corrupt_stored_document_falls_back_to_defaults() {
  let mut storage = MemoryStorage::new();
  storage.set(STORAGE_KEY, "{ definitely not json").unwrap();

  let s = ContentStore::open(storage).unwrap();
  assert_eq!(s.data(), s.defaults());
  assert!(s.storage_error().is_none());
}

#[test]
fn custom_defaults_are_used() {
  let mut defaults = default_data().unwrap();
  defaults.version = "test".into();
  defaults.skills.clear();

  let s = ContentStore::with_defaults(MemoryStorage::new(), defaults.clone());
  assert_eq!(*s.data(), defaults);
}

// ─── Updates ─────────────────────────────────────────────────────────────────

#[test]
fn profile_update_leaves_other_fields_untouched() {
  let mut s = store();
  let before = s.data().clone();

  let profile = Profile { name: "X".into(), ..Profile::default() };
  s.update_data(DataPatch::profile(profile));

  assert_eq!(s.data().profile.name, "X");
  assert_eq!(s.data().skills, before.skills);
  assert_eq!(s.data().projects, before.projects);
  assert_eq!(s.data().experiences, before.experiences);
  assert_eq!(s.data().posts, before.posts);
  assert_eq!(s.data().theme, before.theme);
  assert_eq!(s.data().version, before.version);
}

#[test]
fn update_replaces_nested_values_whole() {
  let mut s = store();
  let profile = Profile { name: "Only name".into(), ..Profile::default() };
  s.update_profile(profile);

  // Nothing from the old profile survives a profile replacement.
  assert_eq!(s.data().profile.email, "");
  assert_eq!(s.data().profile.hobbies, None);
  assert_eq!(stored(&s).profile.name, "Only name");
}

#[test]
fn empty_patch_changes_nothing() {
  let mut s = store();
  let before = s.data().clone();
  assert!(DataPatch::default().is_empty());
  s.update_data(DataPatch::default());
  assert_eq!(*s.data(), before);
}

#[test]
fn theme_update_merges_into_theme_only() {
  let mut s = store();
  let before = s.data().clone();

  s.update_theme(ThemePatch {
    font_family: Some(FontFamily::Mono),
    dark_mode: Some(false),
    ..ThemePatch::default()
  });

  let theme = &s.data().theme;
  assert_eq!(theme.font_family, FontFamily::Mono);
  assert!(!theme.dark_mode);
  assert_eq!(theme.primary_color, before.theme.primary_color);
  assert_eq!(theme.hero_layout, before.theme.hero_layout);
  assert_eq!(s.data().profile, before.profile);
  assert_eq!(stored(&s).theme, *theme);
}

// ─── Persistence failures ────────────────────────────────────────────────────

#[test]
fn persist_failure_is_sticky_until_next_success() {
  let mut s = store();
  let used = s.storage().used();

  // Shrink the quota so the next, larger document cannot be written.
  let mut storage = s.into_storage();
  storage.set_quota(Some(used + 16));
  let mut s = ContentStore::open(storage).unwrap();
  assert!(s.storage_error().is_none());

  let mut profile = s.data().profile.clone();
  profile.bio = "x".repeat(1_000);
  s.update_profile(profile.clone());

  // In-memory state is still updated.
  assert_eq!(s.data().profile.bio.len(), 1_000);
  assert_eq!(s.storage_error(), Some(PERSIST_ERROR_MESSAGE));
  assert_ne!(stored(&s).profile.bio, profile.bio);

  // A theme change still does not fit; the flag stays.
  s.update_theme(ThemePatch { dark_mode: Some(false), ..ThemePatch::default() });
  assert!(s.storage_error().is_some());

  // Shrinking the document again clears it.
  profile.bio = String::new();
  s.update_profile(profile);
  assert!(s.storage_error().is_none());
  assert_eq!(stored(&s).profile.bio, "");
}

#[test]
fn open_with_no_room_reports_error_but_loads() {
  let s = ContentStore::open(MemoryStorage::with_quota(8)).unwrap();
  assert_eq!(s.data(), s.defaults());
  assert_eq!(s.storage_error(), Some(PERSIST_ERROR_MESSAGE));
}

// ─── Reset ───────────────────────────────────────────────────────────────────

#[test]
fn reset_requires_confirmation() {
  let mut s = store();
  s.update_theme(ThemePatch { dark_mode: Some(false), ..ThemePatch::default() });

  assert!(!s.reset_data(&false));
  assert!(!s.data().theme.dark_mode);

  let asked = Cell::new(false);
  let confirmed = s.reset_data(&|prompt: &str| {
    asked.set(true);
    assert!(prompt.contains("reset all data"));
    true
  });
  assert!(confirmed);
  assert!(asked.get());
  assert_eq!(s.data(), s.defaults());
  assert_eq!(stored(&s), *s.defaults());
}

// ─── Export / import ─────────────────────────────────────────────────────────

#[test]
fn export_then_import_round_trips() {
  let mut s = store();
  s.add_skill();
  s.update_theme(ThemePatch {
    hero_layout: Some(HeroLayout::Centered),
    ..ThemePatch::default()
  });
  let snapshot = s.data().clone();

  let file = s
    .export_data_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    .unwrap();

  let mut other = store();
  other.import_str(&file.contents).unwrap();
  assert_eq!(*other.data(), snapshot);
  assert_eq!(stored(&other), snapshot);
}

#[test]
fn export_is_two_space_pretty_json() {
  let s = store();
  let file = s.export_data().unwrap();
  assert!(file.file_name.starts_with("portfolio-data-"));
  assert!(file.file_name.ends_with(".json"));
  assert!(file.contents.contains("\n  \"profile\": {\n    \"name\": "));
}

#[test]
fn import_without_profile_is_rejected_and_state_kept() {
  let mut s = store();
  let before = s.data().clone();

  let doc = serde_json::json!({ "skills": [] }).to_string();
  let err = s.import_str(&doc).unwrap_err();
  assert!(matches!(err, ImportError::MissingFields));
  assert_eq!(*s.data(), before);
  assert_eq!(stored(&s), before);
}

#[test]
fn import_bad_json_is_rejected() {
  let mut s = store();
  let before = s.data().clone();
  assert!(matches!(s.import_str("nope"), Err(ImportError::Parse(_))));
  assert_eq!(*s.data(), before);
}

#[test]
fn import_minimal_document_replaces_everything() {
  let mut s = store();
  let doc = serde_json::json!({
    "profile": { "name": "Imported" },
    "skills": [{ "id": "a", "name": "Rust", "category": "Technical", "proficiency": 70 }],
  })
  .to_string();

  s.import_str(&doc).unwrap();
  assert_eq!(s.data().profile.name, "Imported");
  assert_eq!(s.data().skills.len(), 1);
  assert!(s.data().projects.is_empty());
  assert!(s.data().experiences.is_empty());
  assert_eq!(s.data().version, "");
}

#[test]
fn import_accepts_fractional_proficiency() {
  let mut s = store();
  let doc = serde_json::json!({
    "profile": { "name": "Imported" },
    "skills": [{ "id": "a", "name": "Rust", "category": "Technical", "proficiency": 85.5 }],
  })
  .to_string();

  s.import_str(&doc).unwrap();
  assert_eq!(s.data().skills[0].proficiency, 85.5);
  assert_eq!(stored(&s).skills[0].proficiency, 85.5);
}

#[test]
fn imported_document_without_version_is_replaced_on_next_start() {
  let mut s = store();
  let doc = serde_json::json!({ "profile": {}, "skills": [] }).to_string();
  s.import_str(&doc).unwrap();

  let reopened = ContentStore::open(s.into_storage()).unwrap();
  assert_eq!(reopened.data(), reopened.defaults());
}

#[tokio::test]
async fn import_file_reads_from_disk() {
  let path = std::env::temp_dir().join(format!("folio-import-{}.json", crate::id::new_id()));
  let mut data = default_data().unwrap();
  data.profile.name = "From disk".into();
  tokio::fs::write(&path, serde_json::to_string_pretty(&data).unwrap())
    .await
    .unwrap();

  let mut s = store();
  s.import_file(&path).await.unwrap();
  assert_eq!(*s.data(), data);

  tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn import_missing_file_is_a_read_error() {
  let mut s = store();
  let path = std::env::temp_dir().join(format!("folio-missing-{}.json", crate::id::new_id()));
  let err = s.import_file(&path).await.unwrap_err();
  assert!(matches!(err, ImportError::Read(_)));
}

// ─── Collection editing ──────────────────────────────────────────────────────

#[test]
fn delete_skill_removes_exactly_that_entry_in_order() {
  let mut s = store();
  let ids: Vec<String> = s.data().skills.iter().map(|k| k.id.clone()).collect();
  let victim = ids[2].clone();

  assert!(s.delete_skill(&victim, &true));

  let remaining: Vec<String> = s.data().skills.iter().map(|k| k.id.clone()).collect();
  let expected: Vec<String> = ids.into_iter().filter(|id| *id != victim).collect();
  assert_eq!(remaining, expected);
}

#[test]
fn declined_delete_keeps_entry() {
  let mut s = store();
  let id = s.data().skills[0].id.clone();
  assert!(!s.delete_skill(&id, &false));
  assert_eq!(s.data().skills[0].id, id);
}

#[test]
fn delete_unknown_id_is_noop() {
  let mut s = store();
  let before = s.data().clone();
  assert!(!s.delete_project("no-such-id", &true));
  assert!(!s.delete_experience("no-such-id", &true));
  assert_eq!(*s.data(), before);
}

#[test]
fn add_and_update_skill() {
  let mut s = store();
  let count = s.data().skills.len();
  let id = s.add_skill();

  assert_eq!(s.data().skills.len(), count + 1);
  let added = s.data().skills.last().unwrap();
  assert_eq!(added.id, id);
  assert_eq!(added.name, "New Skill");
  assert_eq!(added.category, SkillCategory::Technical);
  assert_eq!(added.proficiency, 50.0);

  assert!(s.update_skill(&id, |k| k.proficiency = 120.0));
  // Out-of-range proficiency is stored as given.
  assert_eq!(s.data().skills.last().unwrap().proficiency, 120.0);
  assert!(!s.update_skill("missing", |k| k.proficiency = 0.0));
}

#[test]
fn added_ids_are_distinct() {
  let mut s = store();
  let a = s.add_project();
  let b = s.add_project();
  assert_ne!(a, b);
  assert!(s.update_project(&b, |p| p.featured = true));
  assert!(s.data().featured_projects().any(|p| p.id == b));
  assert!(s.delete_project(&a, &true));
  assert!(s.data().projects.iter().all(|p| p.id != a));
}

#[test]
fn save_experience_requires_role_and_organization() {
  let mut s = store();
  let before = s.data().experiences.clone();

  let err = s.save_experience(Experience::draft()).unwrap_err();
  assert!(matches!(err, Error::Validation(ref m) if m == "Role and Organization are required."));
  assert_eq!(s.data().experiences, before);
}

#[test]
fn save_experience_appends_then_replaces_in_place() {
  let mut s = store();
  let mut exp = Experience::draft();
  exp.role = "Analyst".into();
  exp.organization = "Acme".into();
  exp.kind = ExperienceKind::Work;
  s.save_experience(exp.clone()).unwrap();
  let position = s.data().experiences.len() - 1;
  assert_eq!(s.data().experiences[position], exp);

  let first_id = s.data().experiences[0].id.clone();
  let mut first = s.data().experiences[0].clone();
  first.role = "Renamed".into();
  s.save_experience(first).unwrap();
  assert_eq!(s.data().experiences[0].id, first_id);
  assert_eq!(s.data().experiences[0].role, "Renamed");
  assert_eq!(s.data().experiences.len(), position + 1);
}
