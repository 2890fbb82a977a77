//! End-to-end tests for the `apex-themegen` binary.
//!
//! Each test builds a throwaway project tree and runs the compiled binary in
//! it, mirroring how the dashboard's build invokes the tool.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::project::{DARK_OUTPUT, DARK_RAW, LIGHT_OUTPUT, MAPPING, ThemeProject};

#[fixture]
fn project() -> Result<ThemeProject> {
    let project = ThemeProject::new()?;
    project.write_apex_inputs(
        &json!({
            "color": { "brand": { "primary": "#1677ff" }, "text": { "base": "#000000e0" } },
            "radius": { "md": 6 },
            "table": { "header": "#fafafa" }
        }),
        &json!({
            "color": { "brand": { "primary": "#1668dc" }, "text": { "base": "#ffffffd9" } },
            "table": { "header": "#1d1d1d" }
        }),
        &json!({
            "token": {
                "colorPrimary": ["color.primary", "color.brand.primary"],
                "colorText": ["color.text.base"],
                "borderRadius": ["radius.md", "radius.base"]
            },
            "components": {
                "Table.headerBg": ["table.header"],
                "Layout.siderBg": ["layout.sider"]
            }
        }),
    )?;
    Ok(project)
}

fn themegen(project: &ThemeProject) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apex-themegen"));
    cmd.current_dir(project.root())
        .env_remove("APEX_THEMEGEN_ROOT")
        .env_remove("APEX_THEMEGEN_MAPPING")
        .env_remove("RUST_LOG")
        .env("RUST_BACKTRACE", "0");
    cmd
}

fn read_json(project: &ThemeProject, relative: &str) -> Result<Value> {
    Ok(serde_json::from_str(&project.read_text(relative)?)?)
}

#[rstest]
fn generates_both_themes_without_arguments(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    themegen(&project).assert().success();

    assert_eq!(
        read_json(&project, LIGHT_OUTPUT)?,
        json!({ "theme": {
            "token": { "colorPrimary": "#1677ff", "colorText": "#000000e0", "borderRadius": 6 },
            "components": { "Table": { "headerBg": "#fafafa" }, "Layout": {} }
        }})
    );
    assert_eq!(
        read_json(&project, DARK_OUTPUT)?,
        json!({ "theme": {
            "token": { "colorPrimary": "#1668dc", "colorText": "#ffffffd9" },
            "components": { "Table": { "headerBg": "#1d1d1d" }, "Layout": {} }
        }})
    );
    Ok(())
}

#[rstest]
fn output_is_pretty_printed_in_declaration_order(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    themegen(&project).assert().success();

    let light = project.read_text(LIGHT_OUTPUT)?;
    assert!(light.starts_with("{\n  \"theme\": {\n    \"token\": {\n      \"colorPrimary\""));
    assert!(!light.ends_with('\n'));
    let text = light.find("colorText").unwrap_or(usize::MAX);
    let radius = light.find("borderRadius").unwrap_or(0);
    assert!(text < radius, "tokens should keep mapping order:\n{light}");
    Ok(())
}

#[rstest]
fn reports_completion_on_stderr(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    themegen(&project)
        .assert()
        .success()
        .stderr(predicate::str::contains("theme documents generated"));
    Ok(())
}

#[rstest]
fn missing_raw_export_fails_without_writing(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    project.remove(DARK_RAW)?;

    themegen(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dark.raw.json"));
    assert!(!project.path(LIGHT_OUTPUT).exists());
    Ok(())
}

#[rstest]
fn malformed_component_key_is_rejected(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    project.write_json(MAPPING, &json!({ "components": { "Button": ["color.brand.primary"] } }))?;

    themegen(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed component key 'Button'"));
    Ok(())
}

#[rstest]
fn check_mode_tracks_staleness(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;

    themegen(&project)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
    assert!(!project.path(LIGHT_OUTPUT).exists());

    themegen(&project).assert().success();
    themegen(&project).arg("--check").assert().success();

    project.write_json(
        "src/theme/figma/light.raw.json",
        &json!({ "color": { "brand": { "primary": "#000000" } } }),
    )?;
    themegen(&project)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("apex-light.json"));
    Ok(())
}

#[rstest]
fn root_flag_targets_another_directory(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    let elsewhere = ThemeProject::new()?;

    themegen(&elsewhere)
        .arg("--root")
        .arg(project.root().as_str())
        .assert()
        .success();
    assert!(project.path(LIGHT_OUTPUT).is_file());
    assert!(!elsewhere.path(LIGHT_OUTPUT).exists());
    Ok(())
}

#[rstest]
fn env_selects_the_mapping_file(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    project.write_json(
        "tokens/minimal.json",
        &json!({ "token": { "colorPrimary": ["color.brand.primary"] } }),
    )?;

    themegen(&project)
        .env("APEX_THEMEGEN_MAPPING", "tokens/minimal.json")
        .assert()
        .success();
    assert_eq!(
        read_json(&project, LIGHT_OUTPUT)?,
        json!({ "theme": { "token": { "colorPrimary": "#1677ff" }, "components": {} } })
    );
    Ok(())
}

#[rstest]
fn config_file_declares_extra_variants(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;
    project.write_json(
        "src/theme/figma/compact.raw.json",
        &json!({ "color": { "brand": { "primary": "#2f54eb" } }, "radius": { "md": 2 } }),
    )?;
    project.write_text(
        "themegen.toml",
        r#"
        [[variants]]
        name = "light"
        raw = "src/theme/figma/light.raw.json"
        output = "src/theme/apex-light.json"

        [[variants]]
        name = "compact"
        raw = "src/theme/figma/compact.raw.json"
        output = "src/theme/apex-compact.json"
        "#,
    )?;

    themegen(&project).assert().success();
    assert_eq!(
        read_json(&project, "src/theme/apex-compact.json")?
            .pointer("/theme/token/borderRadius")
            .cloned(),
        Some(json!(2))
    );
    assert!(!project.path(DARK_OUTPUT).exists());
    Ok(())
}

#[rstest]
fn missing_explicit_config_fails(project: Result<ThemeProject>) -> Result<()> {
    let project = project?;

    themegen(&project)
        .args(["--config", "ci/themegen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
    Ok(())
}
