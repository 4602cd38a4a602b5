//! Spec files written by the CLI and read by the library (and vice versa).

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use spin_state::{Easing, Mode, ProgressSpec, load_spec, save_spec};

#[test]
fn cli_init_then_library_load() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("material.json");

    Command::cargo_bin("spin-state")?
        .args(["spec", "init", "--out"])
        .arg(file.path())
        .args(["--cycle-ms", "1332", "--easing", "fast-out-slow-in"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    file.assert(predicate::str::contains("\"fast-out-slow-in\""));
    let spec = load_spec(file.path())?;
    assert_eq!(spec.cycle_ms, 1332.0);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.mode, Mode::Indeterminate);
    Ok(())
}

#[test]
fn init_refuses_then_overwrites_with_force() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("spec.json");
    file.write_str("{ \"cycle_ms\": 10 }")?;

    Command::cargo_bin("spin-state")?
        .args(["spec", "init", "--out"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("output exists"));
    assert_eq!(load_spec(file.path())?.cycle_ms, 10.0);

    Command::cargo_bin("spin-state")?
        .args(["spec", "init", "--force", "--mode", "determinate", "--out"])
        .arg(file.path())
        .assert()
        .success();
    let spec = load_spec(file.path())?;
    assert_eq!(spec.cycle_ms, 1000.0);
    assert_eq!(spec.mode, Mode::Determinate);
    Ok(())
}

#[test]
fn run_uses_config_file_with_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("bar.json");
    let spec = ProgressSpec::new(400.0, Easing::Linear, Mode::Determinate)?;
    save_spec(file.path(), &spec, false)?;

    Command::cargo_bin("spin-state")?
        .args(["run", "--fps", "10", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("frame=4 phase=stopped"));

    // flag wins over the file
    Command::cargo_bin("spin-state")?
        .args(["run", "--fps", "10", "--cycle-ms", "200", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("frame=2 phase=stopped"))
        .stdout(predicate::str::contains("frame=3").not());
    Ok(())
}

#[test]
fn show_prints_fields() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("capped.json");
    let spec = ProgressSpec::default()
        .with_easing(Easing::Decelerate(2.0))
        .with_loop_cap(5);
    save_spec(file.path(), &spec, false)?;

    Command::cargo_bin("spin-state")?
        .args(["spec", "show"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("easing=decelerate:2"))
        .stdout(predicate::str::contains("loop_cap=5"));
    Ok(())
}

#[test]
fn broken_file_reports_context() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("broken.json");
    file.write_str("not json")?;

    Command::cargo_bin("spin-state")?
        .args(["run", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load spec"));
    Ok(())
}

#[test]
fn fixed_presets_take_cycle_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let file = td.child("short.json");
    let spec = ProgressSpec::new(500.0, Easing::Linear, Mode::Indeterminate)?;
    save_spec(file.path(), &spec, false)?;

    // two 500 ms cycles at 10 fps
    for preset in ["material", "double-circle"] {
        Command::cargo_bin("spin-state")?
            .args(["run", "--fps", "10", "--preset", preset, "--config"])
            .arg(file.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("10 frames, 2 loops"));
    }

    Command::cargo_bin("spin-state")?
        .args(["run", "--preset", "countdown", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--seconds"));
    Ok(())
}
