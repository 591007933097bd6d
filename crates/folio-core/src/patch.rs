//! Partial updates applied by [`ContentStore::update_data`] and
//! [`ContentStore::update_theme`].
//!
//! A `Some` field replaces the whole target field; nothing is merged below
//! the top level. Admin flows rely on swapping an entire collection at once.
//!
//! [`ContentStore::update_data`]: crate::ContentStore::update_data
//! [`ContentStore::update_theme`]: crate::ContentStore::update_theme

use crate::{
  model::{AppData, Experience, Post, Profile, Project, Skill},
  theme::{AppTheme, FontFamily, HeroLayout},
};

#[derive(Debug, Clone, Default)]
pub struct DataPatch {
  pub version:     Option<String>,
  pub profile:     Option<Profile>,
  pub skills:      Option<Vec<Skill>>,
  pub projects:    Option<Vec<Project>>,
  pub experiences: Option<Vec<Experience>>,
  pub posts:       Option<Vec<Post>>,
  pub theme:       Option<AppTheme>,
}

impl DataPatch {
  pub fn profile(profile: Profile) -> Self {
    Self { profile: Some(profile), ..Self::default() }
  }

  pub fn skills(skills: Vec<Skill>) -> Self {
    Self { skills: Some(skills), ..Self::default() }
  }

  pub fn projects(projects: Vec<Project>) -> Self {
    Self { projects: Some(projects), ..Self::default() }
  }

  pub fn experiences(experiences: Vec<Experience>) -> Self {
    Self { experiences: Some(experiences), ..Self::default() }
  }

  pub fn is_empty(&self) -> bool {
    self.version.is_none()
      && self.profile.is_none()
      && self.skills.is_none()
      && self.projects.is_none()
      && self.experiences.is_none()
      && self.posts.is_none()
      && self.theme.is_none()
  }

  pub(crate) fn apply(self, data: &mut AppData) {
    if let Some(v) = self.version {
      data.version = v;
    }
    if let Some(v) = self.profile {
      data.profile = v;
    }
    if let Some(v) = self.skills {
      data.skills = v;
    }
    if let Some(v) = self.projects {
      data.projects = v;
    }
    if let Some(v) = self.experiences {
      data.experiences = v;
    }
    if let Some(v) = self.posts {
      data.posts = v;
    }
    if let Some(v) = self.theme {
      data.theme = v;
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
  pub primary_color: Option<String>,
  pub font_family:   Option<FontFamily>,
  pub hero_layout:   Option<HeroLayout>,
  pub dark_mode:     Option<bool>,
}

impl ThemePatch {
  pub fn is_empty(&self) -> bool {
    self.primary_color.is_none()
      && self.font_family.is_none()
      && self.hero_layout.is_none()
      && self.dark_mode.is_none()
  }

  pub(crate) fn apply(self, theme: &mut AppTheme) {
    if let Some(v) = self.primary_color {
      theme.primary_color = v;
    }
    if let Some(v) = self.font_family {
      theme.font_family = v;
    }
    if let Some(v) = self.hero_layout {
      theme.hero_layout = v;
    }
    if let Some(v) = self.dark_mode {
      theme.dark_mode = v;
    }
  }
}
