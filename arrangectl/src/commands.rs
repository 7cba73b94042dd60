use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrange_config::ConfigLoad;
use arrange_core::{
    JsonFilePresetStore, PresetSortingService, SortingService, list_directory,
};
use arrange_model::{FileEntry, SortPreset, SortSpecification};
use tracing::info;

use crate::cli::{PresetAction, SortArgs};

type Service = PresetSortingService<JsonFilePresetStore>;

pub fn build_service(load: &ConfigLoad) -> Service {
    let store = JsonFilePresetStore::new(&load.config.presets_file);
    PresetSortingService::with_options(
        Arc::new(store),
        load.config.service_options(),
    )
}

pub async fn sort(load: &ConfigLoad, args: SortArgs) -> Result<()> {
    let service = build_service(load);

    let mut spec = load.config.default_sort;
    if let Some(name) = &args.preset {
        let preset = service
            .load_preset(name)
            .await
            .with_context(|| format!("failed to load preset {name:?}"))?;
        spec = SortSpecification::from_preset(
            &preset,
            spec.natural_sort,
            spec.case_sensitive,
        );
    }
    spec = args.order.apply_to(spec);
    if args.no_natural {
        spec.natural_sort = false;
    }
    if args.case_sensitive {
        spec.case_sensitive = true;
    }

    let options = load
        .config
        .listing_options()
        .with_hidden(load.config.include_hidden || args.hidden);
    let entries = list_directory(&args.dir, &options)
        .await
        .with_context(|| format!("failed to list {}", args.dir.display()))?;
    let sorted = service.apply_sort(spec, entries).await?;

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &sorted)?;
        writeln!(out)?;
    } else {
        for entry in &sorted {
            writeln!(out, "{}", format_entry(entry))?;
        }
    }
    Ok(())
}

pub async fn presets(load: &ConfigLoad, action: PresetAction) -> Result<()> {
    let service = build_service(load);
    let mut out = io::stdout();

    match action {
        PresetAction::List { json } => {
            let presets = service.get_presets().await?;
            if json {
                serde_json::to_writer_pretty(&mut out, &presets)?;
                writeln!(out)?;
            } else if presets.is_empty() {
                writeln!(out, "No presets saved")?;
            } else {
                for preset in &presets {
                    writeln!(out, "{}", format_preset(preset))?;
                }
            }
        }
        PresetAction::Show { name } => {
            let preset = service
                .load_preset(&name)
                .await
                .with_context(|| format!("failed to load preset {name:?}"))?;
            serde_json::to_writer_pretty(&mut out, &preset)?;
            writeln!(out)?;
        }
        PresetAction::Save { name, order } => {
            let spec = order.apply_to(load.config.default_sort);
            let preset = SortPreset::new(&name, &spec)?;
            service.save_preset(preset.clone()).await?;
            info!(
                preset = %preset.name,
                path = %load.config.presets_file.display(),
                "preset saved"
            );
            writeln!(out, "Saved preset {:?}", preset.name)?;
        }
        PresetAction::Delete { name } => {
            service.delete_preset(&name).await?;
            writeln!(out, "Deleted preset {:?}", name.trim())?;
        }
    }
    Ok(())
}

pub fn config(load: &ConfigLoad) -> Result<()> {
    let rendered = toml::to_string_pretty(&load.config)
        .context("failed to render configuration")?;
    let mut out = io::stdout().lock();
    writeln!(out, "# source: {}", load.source)?;
    write!(out, "{rendered}")?;
    Ok(())
}

fn format_entry(entry: &FileEntry) -> String {
    let modified = entry
        .modified
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let size = if entry.is_dir {
        "-".to_string()
    } else {
        entry.size.to_string()
    };
    let suffix = if entry.is_dir { "/" } else { "" };
    format!(
        "{modified:<16}  {size:>12}  {:<14}  {}{suffix}",
        entry.type_label(),
        entry.name
    )
}

fn format_preset(preset: &SortPreset) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        preset.name,
        preset.column,
        if preset.ascending { "ascending" } else { "descending" },
        if preset.folders_first {
            "folders-first"
        } else {
            "mixed"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrange_model::SortColumn;

    #[test]
    fn directories_get_a_trailing_slash() {
        let line = format_entry(&FileEntry::directory("src"));
        assert!(line.ends_with("src/"), "{line}");
        assert!(line.contains("File folder"));
    }

    #[test]
    fn preset_lines_are_tab_separated() {
        let preset = SortPreset::new(
            "recent",
            &SortSpecification::new(SortColumn::DateModified)
                .with_ascending(false),
        )
        .unwrap();
        assert_eq!(
            format_preset(&preset),
            "recent\tdate_modified\tdescending\tfolders-first"
        );
    }
}
