//! Collection editing on top of [`ContentStore::update_data`].
//!
//! Every helper builds a replacement collection and submits it whole, so the
//! stored document only ever changes through the shallow-merge path.

use crate::{
  Confirm, ContentStore, Error, Result,
  model::{Experience, Profile, Project, Skill},
  patch::DataPatch,
  storage::DurableStorage,
};

const DELETE_SKILL_PROMPT: &str = "Delete this skill?";
const DELETE_PROJECT_PROMPT: &str = "Delete this project?";
const DELETE_EXPERIENCE_PROMPT: &str =
  "Are you sure you want to delete this experience?";

impl<S: DurableStorage> ContentStore<S> {
  pub fn update_profile(&mut self, profile: Profile) {
    self.update_data(DataPatch::profile(profile));
  }

  // ── Skills ────────────────────────────────────────────────────────────

  /// Append a placeholder skill and return its id.
  pub fn add_skill(&mut self) -> String {
    let skill = Skill::placeholder();
    let id = skill.id.clone();
    let mut skills = self.data().skills.clone();
    skills.push(skill);
    self.update_data(DataPatch::skills(skills));
    id
  }

  /// Apply `edit` to the skill with `id`. Returns `false` if there is none.
  pub fn update_skill(&mut self, id: &str, edit: impl FnOnce(&mut Skill)) -> bool {
    let mut skills = self.data().skills.clone();
    let Some(skill) = skills.iter_mut().find(|s| s.id == id) else {
      return false;
    };
    edit(skill);
    self.update_data(DataPatch::skills(skills));
    true
  }

  pub fn delete_skill(&mut self, id: &str, confirm: &impl Confirm) -> bool {
    let Some(skills) = without(&self.data().skills, id, |s| &s.id) else {
      return false;
    };
    if !confirm.confirm(DELETE_SKILL_PROMPT) {
      return false;
    }
    self.update_data(DataPatch::skills(skills));
    true
  }

  // ── Projects ──────────────────────────────────────────────────────────

  /// Append a placeholder project and return its id.
  pub fn add_project(&mut self) -> String {
    let project = Project::placeholder();
    let id = project.id.clone();
    let mut projects = self.data().projects.clone();
    projects.push(project);
    self.update_data(DataPatch::projects(projects));
    id
  }

  pub fn update_project(
    &mut self,
    id: &str,
    edit: impl FnOnce(&mut Project),
  ) -> bool {
    let mut projects = self.data().projects.clone();
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
      return false;
    };
    edit(project);
    self.update_data(DataPatch::projects(projects));
    true
  }

  pub fn delete_project(&mut self, id: &str, confirm: &impl Confirm) -> bool {
    let Some(projects) = without(&self.data().projects, id, |p| &p.id) else {
      return false;
    };
    if !confirm.confirm(DELETE_PROJECT_PROMPT) {
      return false;
    }
    self.update_data(DataPatch::projects(projects));
    true
  }

  // ── Experiences ───────────────────────────────────────────────────────

  /// Insert or replace (by id, in place) an experience entry.
  ///
  /// Role and organization must be non-empty.
  pub fn save_experience(&mut self, experience: Experience) -> Result<()> {
    if experience.role.is_empty() || experience.organization.is_empty() {
      return Err(Error::Validation(
        "Role and Organization are required.".to_owned(),
      ));
    }
    let mut experiences = self.data().experiences.clone();
    match experiences.iter_mut().find(|e| e.id == experience.id) {
      Some(slot) => *slot = experience,
      None => experiences.push(experience),
    }
    self.update_data(DataPatch::experiences(experiences));
    Ok(())
  }

  pub fn delete_experience(&mut self, id: &str, confirm: &impl Confirm) -> bool {
    let Some(experiences) = without(&self.data().experiences, id, |e| &e.id)
    else {
      return false;
    };
    if !confirm.confirm(DELETE_EXPERIENCE_PROMPT) {
      return false;
    }
    self.update_data(DataPatch::experiences(experiences));
    true
  }
}

/// `items` minus every entry whose id is `id`, or `None` if nothing matched.
fn without<T: Clone>(
  items: &[T],
  id: &str,
  id_of: impl Fn(&T) -> &String,
) -> Option<Vec<T>> {
  let kept: Vec<T> = items.iter().filter(|t| id_of(*t) != id).cloned().collect();
  (kept.len() != items.len()).then_some(kept)
}
