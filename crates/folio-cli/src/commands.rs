//! Command implementations over a [`ContentStore`].

use std::fmt::{self, Write as _};

use anyhow::{Context as _, anyhow};
use folio_core::{
  ContentStore,
  codegen::code_export,
  model::{AppData, Experience, ExperienceKind, Profile, Project, Skill},
  patch::ThemePatch,
  storage::DurableStorage,
};
use folio_image::{AdjustSession, Adjustment, Rotation, Scale};
use tracing::info;

use crate::{
  Command, ExperienceCommand, ExperienceFields, ImageArgs, ProfileCommand,
  ProfileFields, ProfileImage, ProjectCommand, ProjectFields, Section,
  SkillCommand, SkillFields, prompt::confirmer, settings::Settings,
};

pub async fn run<S: DurableStorage>(
  store: &mut ContentStore<S>,
  settings: &Settings,
  command: Command,
) -> anyhow::Result<()> {
  match command {
    Command::Show { section } => println!("{}", show(store.data(), section)?),
    Command::Summary => print!("{}", summary(store.data())?),
    Command::Export { dir } => {
      let dir = dir.unwrap_or_else(|| settings.export_dir.clone());
      let file = store.export_data()?;
      let path = file
        .write_to(&dir)
        .await
        .with_context(|| format!("failed to write export into {}", dir.display()))?;
      println!("Exported to {}", path.display());
    }
    Command::Import { file } => {
      store.import_file(&file).await?;
      println!("Data imported successfully!");
    }
    Command::Reset { yes } => {
      if store.reset_data(&confirmer(yes)) {
        println!("Content reset to version {}.", store.data().version);
      }
    }
    Command::Theme { primary_color, font_family, hero_layout, dark_mode } => {
      let patch = ThemePatch { primary_color, font_family, hero_layout, dark_mode };
      if patch.is_empty() {
        return Err(anyhow!("nothing to change; pass at least one theme option"));
      }
      store.update_theme(patch);
    }
    Command::Profile(cmd) => profile(store, cmd).await?,
    Command::Skill(cmd) => skill(store, cmd)?,
    Command::Project(cmd) => project(store, cmd).await?,
    Command::Experience(cmd) => experience(store, cmd)?,
    Command::CodeExport => print!("{}", code_export(store.data())?),
  }
  Ok(())
}

async fn profile<S: DurableStorage>(
  store: &mut ContentStore<S>,
  cmd: ProfileCommand,
) -> anyhow::Result<()> {
  let mut profile = store.data().profile.clone();
  match cmd {
    ProfileCommand::Set(fields) => fields.apply(&mut profile),
    ProfileCommand::SetImage { field, image } => {
      let payload = normalize_image(&image).await?;
      match field {
        ProfileImage::Avatar => profile.avatar_url = payload,
        ProfileImage::Hero => profile.hero_image_url = Some(payload),
      }
    }
    ProfileCommand::ClearImage { field } => match field {
      ProfileImage::Avatar => profile.avatar_url.clear(),
      ProfileImage::Hero => profile.hero_image_url = None,
    },
  }
  store.update_profile(profile);
  Ok(())
}

fn skill<S: DurableStorage>(
  store: &mut ContentStore<S>,
  cmd: SkillCommand,
) -> anyhow::Result<()> {
  match cmd {
    SkillCommand::Add(fields) => {
      let id = store.add_skill();
      store.update_skill(&id, |s| fields.apply(s));
      println!("{id}");
    }
    SkillCommand::Set { id, fields } => {
      ensure_exists(store.data().skills.iter().any(|s| s.id == id), "skill", &id)?;
      store.update_skill(&id, |s| fields.apply(s));
    }
    SkillCommand::Delete { id, yes } => {
      ensure_exists(store.data().skills.iter().any(|s| s.id == id), "skill", &id)?;
      store.delete_skill(&id, &confirmer(yes));
    }
  }
  Ok(())
}

async fn project<S: DurableStorage>(
  store: &mut ContentStore<S>,
  cmd: ProjectCommand,
) -> anyhow::Result<()> {
  match cmd {
    ProjectCommand::Add(fields) => {
      let id = store.add_project();
      store.update_project(&id, |p| fields.apply(p));
      println!("{id}");
    }
    ProjectCommand::Set { id, fields } => {
      project_exists(store, &id)?;
      store.update_project(&id, |p| fields.apply(p));
    }
    ProjectCommand::Delete { id, yes } => {
      project_exists(store, &id)?;
      store.delete_project(&id, &confirmer(yes));
    }
    ProjectCommand::SetImage { id, image } => {
      project_exists(store, &id)?;
      let payload = normalize_image(&image).await?;
      store.update_project(&id, |p| p.image_url = payload);
    }
    ProjectCommand::ClearImage { id } => {
      project_exists(store, &id)?;
      store.update_project(&id, |p| p.image_url.clear());
    }
  }
  Ok(())
}

fn experience<S: DurableStorage>(
  store: &mut ContentStore<S>,
  cmd: ExperienceCommand,
) -> anyhow::Result<()> {
  match cmd {
    ExperienceCommand::Add {
      role,
      organization,
      location,
      start,
      end,
      current,
      kind,
      lines,
    } => {
      let entry = Experience {
        role,
        organization,
        location,
        start_date: start,
        end_date: end,
        current,
        kind: kind.into(),
        description: lines,
        ..Experience::draft()
      };
      let id = entry.id.clone();
      store.save_experience(entry)?;
      println!("{id}");
    }
    ExperienceCommand::Edit { id, fields } => {
      let mut entry = store
        .data()
        .experiences
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .ok_or_else(|| anyhow!("no experience with id {id:?}"))?;
      fields.apply(&mut entry);
      store.save_experience(entry)?;
    }
    ExperienceCommand::Delete { id, yes } => {
      ensure_exists(
        store.data().experiences.iter().any(|e| e.id == id),
        "experience",
        &id,
      )?;
      store.delete_experience(&id, &confirmer(yes));
    }
  }
  Ok(())
}

fn project_exists<S: DurableStorage>(store: &ContentStore<S>, id: &str) -> anyhow::Result<()> {
  ensure_exists(store.data().projects.iter().any(|p| p.id == id), "project", id)
}

fn ensure_exists(found: bool, what: &str, id: &str) -> anyhow::Result<()> {
  if found { Ok(()) } else { Err(anyhow!("no {what} with id {id:?}")) }
}

async fn normalize_image(args: &ImageArgs) -> anyhow::Result<String> {
  let adjustment = Adjustment {
    scale:    Scale::new(args.scale)?,
    rotation: Rotation::try_from(args.rotation)?,
  };
  let mut session = AdjustSession::open_file(&args.file)
    .await
    .with_context(|| format!("failed to load image {}", args.file.display()))?;
  session.set_adjustment(adjustment);

  let (width, height) = session.preview().dimensions();
  let payload = session.confirm()?;
  info!(width, height, bytes = payload.len(), "image normalised");
  Ok(payload)
}

// ─── Field edits ─────────────────────────────────────────────────────────────

/// `Some("")` unsets an optional field.
fn optional(value: String) -> Option<String> {
  (!value.is_empty()).then_some(value)
}

impl ProfileFields {
  fn apply(self, p: &mut Profile) {
    if let Some(v) = self.name {
      p.name = v;
    }
    if let Some(v) = self.title {
      p.title = v;
    }
    if let Some(v) = self.tagline {
      p.tagline = v;
    }
    if let Some(v) = self.bio {
      p.bio = v;
    }
    if let Some(v) = self.email {
      p.email = v;
    }
    if let Some(v) = self.phone {
      p.phone = optional(v);
    }
    if let Some(v) = self.location {
      p.location = v;
    }
    if let Some(v) = self.resume_url {
      p.resume_url = optional(v);
    }
    if let Some(v) = self.linkedin {
      p.socials.linkedin = optional(v);
    }
    if let Some(v) = self.github {
      p.socials.github = optional(v);
    }
    if let Some(v) = self.instagram {
      p.socials.instagram = optional(v);
    }
    if !self.hobbies.is_empty() {
      p.hobbies = Some(self.hobbies);
    }
  }
}

impl SkillFields {
  fn apply(self, s: &mut Skill) {
    if let Some(v) = self.name {
      s.name = v;
    }
    if let Some(v) = self.category {
      s.category = v.into();
    }
    if let Some(v) = self.proficiency {
      s.proficiency = v;
    }
  }
}

impl ProjectFields {
  fn apply(self, p: &mut Project) {
    if let Some(v) = self.title {
      p.title = v;
    }
    if let Some(v) = self.description {
      p.description = v;
    }
    if let Some(v) = self.full_description {
      p.full_description = v;
    }
    if !self.technologies.is_empty() {
      p.technologies = self.technologies;
    }
    if !self.skills_gained.is_empty() {
      p.skills_gained = Some(self.skills_gained);
    }
    if let Some(v) = self.featured {
      p.featured = v;
    }
    if let Some(v) = self.live_url {
      p.live_url = optional(v);
    }
    if let Some(v) = self.code_url {
      p.code_url = optional(v);
    }
  }
}

impl ExperienceFields {
  fn apply(self, e: &mut Experience) {
    if let Some(v) = self.role {
      e.role = v;
    }
    if let Some(v) = self.organization {
      e.organization = v;
    }
    if let Some(v) = self.location {
      e.location = v;
    }
    if let Some(v) = self.start {
      e.start_date = v;
    }
    if let Some(v) = self.end {
      e.end_date = v;
    }
    if let Some(v) = self.current {
      e.current = v;
    }
    if let Some(v) = self.kind {
      e.kind = v.into();
    }
    if !self.lines.is_empty() {
      e.description = self.lines;
    }
  }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

fn show(data: &AppData, section: Option<Section>) -> serde_json::Result<String> {
  match section {
    None => serde_json::to_string_pretty(data),
    Some(Section::Profile) => serde_json::to_string_pretty(&data.profile),
    Some(Section::Skills) => serde_json::to_string_pretty(&data.skills),
    Some(Section::Projects) => serde_json::to_string_pretty(&data.projects),
    Some(Section::Experiences) => serde_json::to_string_pretty(&data.experiences),
    Some(Section::Theme) => serde_json::to_string_pretty(&data.theme),
  }
}

/// Plain-text overview laid out like the public site.
fn summary(data: &AppData) -> Result<String, fmt::Error> {
  let mut out = String::new();
  let p = &data.profile;
  writeln!(out, "{} - {}", p.name, p.title)?;
  writeln!(out, "{}", p.tagline)?;

  writeln!(out, "\nSkills")?;
  for (category, skills) in data.skills_by_category() {
    writeln!(out, "  {category}")?;
    for s in skills {
      writeln!(out, "    {:<40} {:>3}%", s.name, s.proficiency)?;
    }
  }

  writeln!(out, "\nFeatured projects")?;
  for project in data.featured_projects() {
    writeln!(out, "  {}: {}", project.title, project.description)?;
  }

  for (heading, kind) in [
    ("Experience", ExperienceKind::Work),
    ("Education", ExperienceKind::Education),
  ] {
    writeln!(out, "\n{heading}")?;
    for exp in data.experiences_of(kind) {
      writeln!(
        out,
        "  {} @ {} ({} to {})",
        exp.role, exp.organization, exp.start_date, exp.end_date
      )?;
      for section in exp.sections() {
        if let Some(header) = section.header {
          writeln!(out, "    {header}")?;
        }
        for bullet in section.bullets {
          writeln!(out, "      - {bullet}")?;
        }
      }
    }
  }
  Ok(out)
}
