//! The installation guard itself.

use crate::error::{GuardError, Result};
use crate::guard::artifact::{check_artifact, ArtifactStatus};
use crate::guard::elevation::{resolve_install_attempts, InstallAttempt};
use crate::guard::patch::apply_patch;
use crate::guard::recipe::Recipe;
use crate::guard::{GuardContext, Outcome, Stage};
use crate::shell::CommandResult;
use crate::ui::UserInterface;
use std::path::{Path, PathBuf};

/// A stage as it would run, for `--dry-run` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStage {
    /// Which stage.
    pub stage: Stage,
    /// Human-readable description (usually the command line).
    pub description: String,
    /// Working directory, for stages that spawn a process.
    pub cwd: Option<PathBuf>,
}

/// Make sure the recipe's artifact is installed.
///
/// If the target already exists as a regular file, nothing runs and
/// [`Outcome::AlreadyInstalled`] is returned. Otherwise every stage runs in
/// order; the first failure stops the pipeline and is returned as
/// [`GuardError::StageFailed`].
pub fn ensure_installed(
    recipe: &Recipe,
    ctx: &GuardContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<Outcome> {
    match check_artifact(&recipe.target) {
        ArtifactStatus::Present => {
            tracing::debug!("{} found at {}", recipe.name, recipe.target.display());
            ui.success(&format!(
                "{} already installed at {}, skipping installation",
                recipe.name,
                recipe.target.display()
            ));
            return Ok(Outcome::AlreadyInstalled);
        }
        ArtifactStatus::NotAFile => {
            ui.warning(&format!(
                "{} exists but is not a regular file; reinstalling",
                recipe.target.display()
            ));
        }
        ArtifactStatus::Missing => {}
    }

    ui.show_header(&format!("Installing {}", recipe.name));
    let stages = active_stages(recipe);
    let total = stages.len();

    for (index, stage) in stages.iter().enumerate() {
        ui.show_stage(index + 1, total, stage.as_str());
        tracing::debug!("Starting {} stage", stage);
        match stage {
            Stage::Extract => extract(recipe, ctx, ui)?,
            Stage::Patch => patch(recipe, ui)?,
            Stage::Configure => {
                run_stage(Stage::Configure, &recipe.configure, &recipe.source_root, ctx, ui)?
            }
            Stage::Build => run_stage(Stage::Build, &recipe.build, &recipe.source_root, ctx, ui)?,
            Stage::Install => install(recipe, ctx, ui)?,
        }
    }

    if !check_artifact(&recipe.target).is_installed() {
        return Err(GuardError::stage(
            Stage::Install,
            format!(
                "install finished but {} is still missing",
                recipe.target.display()
            ),
        ));
    }

    tracing::debug!("{} installed at {}", recipe.name, recipe.target.display());
    ui.success(&format!(
        "{} installed at {}",
        recipe.name,
        recipe.target.display()
    ));
    Ok(Outcome::Installed)
}

/// Describe the stages `ensure_installed` would run, without running them.
///
/// Returns an empty plan when the artifact is already installed.
pub fn plan(recipe: &Recipe, ctx: &GuardContext<'_>) -> Vec<PlannedStage> {
    if check_artifact(&recipe.target).is_installed() {
        return Vec::new();
    }

    active_stages(recipe)
        .into_iter()
        .map(|stage| match stage {
            Stage::Extract => PlannedStage {
                stage,
                description: recipe.extract.clone(),
                cwd: Some(recipe.work_dir.clone()),
            },
            Stage::Patch => {
                let description = recipe
                    .patch
                    .as_ref()
                    .map(|p| {
                        format!(
                            "replace '{}' with '{}' in {}",
                            p.find,
                            p.replace,
                            recipe.source_root.join(&p.file).display()
                        )
                    })
                    .unwrap_or_default();
                PlannedStage {
                    stage,
                    description,
                    cwd: None,
                }
            }
            Stage::Configure => PlannedStage {
                stage,
                description: recipe.configure.clone(),
                cwd: Some(recipe.source_root.clone()),
            },
            Stage::Build => PlannedStage {
                stage,
                description: recipe.build.clone(),
                cwd: Some(recipe.source_root.clone()),
            },
            Stage::Install => PlannedStage {
                stage,
                description: describe_attempts(&resolve_install_attempts(&recipe.install, ctx)),
                cwd: Some(recipe.source_root.clone()),
            },
        })
        .collect()
}

fn active_stages(recipe: &Recipe) -> Vec<Stage> {
    Stage::ALL
        .into_iter()
        .filter(|s| *s != Stage::Patch || recipe.patch.is_some())
        .collect()
}

fn describe_attempts(attempts: &[InstallAttempt]) -> String {
    match attempts {
        [] => String::new(),
        [only] => only.command.clone(),
        [first, rest @ ..] => {
            let fallbacks: Vec<&str> = rest.iter().map(|a| a.command.as_str()).collect();
            format!("{} (fallback: {})", first.command, fallbacks.join(", "))
        }
    }
}

fn extract(recipe: &Recipe, ctx: &GuardContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    if !recipe.archive.is_file() {
        return Err(GuardError::stage(
            Stage::Extract,
            format!("archive not found: {}", recipe.archive.display()),
        ));
    }

    std::fs::create_dir_all(&recipe.work_dir).map_err(|e| {
        GuardError::stage(
            Stage::Extract,
            format!("cannot create {}: {}", recipe.work_dir.display(), e),
        )
    })?;

    run_stage(Stage::Extract, &recipe.extract, &recipe.work_dir, ctx, ui)?;

    if !recipe.source_root.is_dir() {
        return Err(GuardError::stage(
            Stage::Extract,
            format!(
                "archive did not produce {}",
                recipe.source_root.display()
            ),
        ));
    }
    Ok(())
}

fn patch(recipe: &Recipe, ui: &mut dyn UserInterface) -> Result<()> {
    let Some(patch) = &recipe.patch else {
        return Ok(());
    };
    let report = apply_patch(patch, &recipe.source_root)?;
    ui.message(&format!(
        "Patched {} ({} replacement{})",
        report.file.display(),
        report.replacements,
        if report.replacements == 1 { "" } else { "s" }
    ));
    Ok(())
}

fn install(recipe: &Recipe, ctx: &GuardContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    let attempts = resolve_install_attempts(&recipe.install, ctx);
    let last = attempts.len().saturating_sub(1);

    for (index, attempt) in attempts.iter().enumerate() {
        match run_stage(Stage::Install, &attempt.command, &recipe.source_root, ctx, ui) {
            Ok(()) => return Ok(()),
            Err(e) if attempt.elevated && index < last => {
                tracing::warn!("{}", e);
                ui.warning(&format!(
                    "'{}' failed; retrying without elevation",
                    attempt.command
                ));
            }
            Err(e) => return Err(e),
        }
    }

    Err(GuardError::stage(Stage::Install, "no install command to run"))
}

fn run_stage(
    stage: Stage,
    command: &str,
    cwd: &Path,
    ctx: &GuardContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.show_command(command);

    let result = (ctx.run_command)(command, cwd)
        .map_err(|e| GuardError::stage(stage, e.to_string()))?;

    if result.success {
        tracing::debug!("{} stage finished in {:?}", stage, result.duration);
        Ok(())
    } else {
        Err(GuardError::stage(stage, failure_message(command, &result)))
    }
}

fn failure_message(command: &str, result: &CommandResult) -> String {
    match result.exit_code {
        Some(code) => format!("'{}' exited with code {}", command, code),
        None => format!("'{}' was terminated by a signal", command),
    }
}
