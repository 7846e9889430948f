use std::fs;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::arena::OutlineArena;
use crate::builder::OutlineBuilder;
use crate::cli::args::{Cli, Format};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::{OutlineError, OutlineResult};
use crate::util::path::{expand_user, relative_to_cwd};
use crate::{layout, outline, render};

/// Run the render pipeline: load, build, lay out when the format needs
/// geometry, render, report the artifact path.
pub fn execute_command(cli: &Cli) -> OutlineResult<()> {
    let settings = Settings::load()?;

    let input = cli
        .input
        .as_deref()
        .map(expand_user)
        .unwrap_or_else(|| settings.data_path.clone());
    let target = resolve_output(cli, &settings);
    debug!("input: {:?}, output: {:?}", input, target);

    // Parse before touching the output location, so a bad document never
    // leaves an artifact behind.
    let document = outline::load_document(&input)?;
    let mut arena = OutlineBuilder::new().build(&document);

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| OutlineError::OutputWrite {
                path: target.clone(),
                reason: e.to_string(),
            })?;
        }
    }

    export(&mut arena, cli, &settings, &target)?;

    output::action("Exported", &relative_to_cwd(&target).display());
    Ok(())
}

/// Resolve the artifact path: explicit `--output`, else the configured
/// output directory plus the per-format default file name.
fn resolve_output(cli: &Cli, settings: &Settings) -> PathBuf {
    match &cli.output {
        Some(path) => expand_user(path),
        None => settings.output_dir.join(cli.format.default_file_name()),
    }
}

#[instrument(level = "debug", skip(arena, settings))]
fn export(
    arena: &mut OutlineArena,
    cli: &Cli,
    settings: &Settings,
    target: &std::path::Path,
) -> OutlineResult<()> {
    if cli.format.needs_layout() {
        layout::apply(arena, &settings.layout);
    }

    match cli.format {
        Format::Png => render::mindmap::render_bitmap(arena, target, cli.dpi, &settings.canvas),
        Format::Svg => render::mindmap::render_vector(arena, target, cli.dpi, &settings.canvas),
        Format::Markdown => render::markdown::write(arena, target),
        Format::Ascii => render::ascii::write(arena, target),
    }
}
