//! `folio`: administrator CLI for the Folio portfolio content.
//!
//! Reads `folio.toml` (or the path given with `--config`), opens the SQLite
//! storage and runs one command against the content store.
//!
//! # Usage
//!
//! ```text
//! folio show --section skills
//! folio profile set --title "Analyst" --github https://github.com/me
//! folio profile set-image --field avatar ./me.png --scale 1.2 --rotation 90
//! folio export --dir ./backups
//! folio reset
//! ```

mod commands;
mod prompt;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::{
  ContentStore,
  model::ExperienceKind,
  theme::{FontFamily, HeroLayout},
};
use folio_store_sqlite::SqliteStorage;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio content manager")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "folio.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the current content as JSON.
  Show {
    #[arg(long, value_enum)]
    section: Option<Section>,
  },
  /// Print a human-readable overview, grouped the way the site shows it.
  Summary,
  /// Write the whole document to `portfolio-data-<date>.json`.
  Export {
    /// Target directory; defaults to `export_dir` from the config.
    #[arg(long)]
    dir: Option<PathBuf>,
  },
  /// Replace the whole document with a previously exported file.
  Import { file: PathBuf },
  /// Restore the built-in default content.
  Reset {
    /// Do not ask for confirmation.
    #[arg(long)]
    yes: bool,
  },
  /// Change theme settings; unspecified settings are kept.
  Theme {
    #[arg(long)]
    primary_color: Option<String>,
    #[arg(long)]
    font_family:   Option<FontFamily>,
    #[arg(long)]
    hero_layout:   Option<HeroLayout>,
    #[arg(long)]
    dark_mode:     Option<bool>,
  },
  #[command(subcommand)]
  Profile(ProfileCommand),
  #[command(subcommand)]
  Skill(SkillCommand),
  #[command(subcommand)]
  Project(ProjectCommand),
  #[command(subcommand)]
  Experience(ExperienceCommand),
  /// Print the source of a snapshot module embedding the current content.
  CodeExport,
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
  Profile,
  Skills,
  Projects,
  Experiences,
  Theme,
}

#[derive(Subcommand)]
enum ProfileCommand {
  /// Change profile fields; unspecified fields are kept.
  Set(ProfileFields),
  /// Normalise an image and store it on the profile.
  SetImage {
    #[arg(long, value_enum)]
    field: ProfileImage,
    #[command(flatten)]
    image: ImageArgs,
  },
  /// Remove the avatar or hero image.
  ClearImage {
    #[arg(long, value_enum)]
    field: ProfileImage,
  },
}

/// Optional text fields take an empty string to unset them.
#[derive(Args, Default)]
struct ProfileFields {
  #[arg(long)]
  name:       Option<String>,
  #[arg(long)]
  title:      Option<String>,
  #[arg(long)]
  tagline:    Option<String>,
  #[arg(long)]
  bio:        Option<String>,
  #[arg(long)]
  email:      Option<String>,
  #[arg(long)]
  phone:      Option<String>,
  #[arg(long)]
  location:   Option<String>,
  #[arg(long)]
  resume_url: Option<String>,
  #[arg(long)]
  linkedin:   Option<String>,
  #[arg(long)]
  github:     Option<String>,
  #[arg(long)]
  instagram:  Option<String>,
  /// Replaces the hobby list; repeat for more.
  #[arg(long = "hobby")]
  hobbies:    Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileImage {
  Avatar,
  Hero,
}

#[derive(Subcommand)]
enum SkillCommand {
  /// Append a skill; unspecified fields keep the placeholder values.
  Add(SkillFields),
  /// Change fields of an existing skill.
  Set {
    id:     String,
    #[command(flatten)]
    fields: SkillFields,
  },
  Delete {
    id:  String,
    #[arg(long)]
    yes: bool,
  },
}

#[derive(Args, Default)]
struct SkillFields {
  #[arg(long)]
  name:        Option<String>,
  #[arg(long)]
  category:    Option<String>,
  #[arg(long)]
  proficiency: Option<f64>,
}

#[derive(Subcommand)]
enum ProjectCommand {
  /// Append a project; unspecified fields keep the placeholder values.
  Add(ProjectFields),
  /// Change fields of an existing project.
  Set {
    id:     String,
    #[command(flatten)]
    fields: ProjectFields,
  },
  Delete {
    id:  String,
    #[arg(long)]
    yes: bool,
  },
  /// Normalise an image and store it as the project's image.
  SetImage {
    id:    String,
    #[command(flatten)]
    image: ImageArgs,
  },
  ClearImage { id: String },
}

/// Optional URLs take an empty string to unset them.
#[derive(Args, Default)]
struct ProjectFields {
  #[arg(long)]
  title:            Option<String>,
  #[arg(long)]
  description:      Option<String>,
  #[arg(long)]
  full_description: Option<String>,
  /// Replaces the technology list; repeat for more.
  #[arg(long = "technology")]
  technologies:     Vec<String>,
  /// Replaces the skills-gained list; repeat for more.
  #[arg(long = "skill-gained")]
  skills_gained:    Vec<String>,
  #[arg(long)]
  featured:         Option<bool>,
  #[arg(long)]
  live_url:         Option<String>,
  #[arg(long)]
  code_url:         Option<String>,
}

#[derive(Subcommand)]
enum ExperienceCommand {
  /// Add an entry; `### ` prefixed lines become section headers.
  Add {
    #[arg(long)]
    role:         String,
    #[arg(long)]
    organization: String,
    #[arg(long, default_value = "")]
    location:     String,
    #[arg(long, default_value = "")]
    start:        String,
    #[arg(long, default_value = "")]
    end:          String,
    #[arg(long)]
    current:      bool,
    #[arg(long, value_enum, default_value = "work")]
    kind:         Kind,
    /// Description line; repeat for more.
    #[arg(long = "line")]
    lines:        Vec<String>,
  },
  /// Change fields of an existing entry and save it in place.
  Edit {
    id:     String,
    #[command(flatten)]
    fields: ExperienceFields,
  },
  Delete {
    id:  String,
    #[arg(long)]
    yes: bool,
  },
}

#[derive(Args, Default)]
struct ExperienceFields {
  #[arg(long)]
  role:         Option<String>,
  #[arg(long)]
  organization: Option<String>,
  #[arg(long)]
  location:     Option<String>,
  #[arg(long)]
  start:        Option<String>,
  #[arg(long)]
  end:          Option<String>,
  #[arg(long)]
  current:      Option<bool>,
  #[arg(long, value_enum)]
  kind:         Option<Kind>,
  /// Replaces the description; repeat for more.
  #[arg(long = "line")]
  lines:        Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
  Work,
  Education,
}

impl From<Kind> for ExperienceKind {
  fn from(k: Kind) -> Self {
    match k {
      Kind::Work => Self::Work,
      Kind::Education => Self::Education,
    }
  }
}

#[derive(Args)]
struct ImageArgs {
  /// Source image (PNG, JPEG, GIF or WebP).
  file:     PathBuf,
  /// Zoom factor between 0.5 and 2.0.
  #[arg(long, default_value_t = 1.0)]
  scale:    f32,
  /// Clockwise rotation: 0, 90, 180 or 270.
  #[arg(long, default_value_t = 0)]
  rotation: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let storage = SqliteStorage::open(&settings.storage_path).with_context(|| {
    format!("failed to open storage at {:?}", settings.storage_path)
  })?;
  let mut store = ContentStore::open(storage).context("failed to load content")?;

  commands::run(&mut store, &settings, cli.command).await?;

  if let Some(message) = store.storage_error() {
    anyhow::bail!("{message}");
  }
  Ok(())
}
