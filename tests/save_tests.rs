use std::path::{Path, PathBuf};

use confstash::convert::read_config_file;
use confstash::prompt::PresetChooser;
use confstash::{
    save, FileOptionsStore, Materialization, MemoryOptionsStore, Options, OptionsStore,
    PackageType, SaveError, SaveOptions,
};
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn write(dir: &TempDir, file: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file);
    std::fs::write(&path, content).unwrap();
    path
}

fn named(name: &str, force: bool) -> SaveOptions {
    SaveOptions {
        name: Some(name.to_string()),
        force,
    }
}

fn eslint() -> PresetChooser {
    PresetChooser(Some(PackageType::Eslint))
}

fn configs_dir_is_empty(config_dir: &Path) -> bool {
    let dir = Options::configs_dir(config_dir);
    !dir.exists() || std::fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn test_json_config_saved_as_script() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(
        &src,
        "eslintrc.json",
        r#"{"extends": "airbnb", "rules": {"semi": ["error", "always"]}}"#,
    );
    let store = MemoryOptionsStore::default();

    let outcome = save(&file, &named("", false), &store, &eslint(), home.path()).unwrap();

    assert_eq!(outcome.name, "eslintrc");
    assert_eq!(outcome.package, PackageType::Eslint);
    assert!(!outcome.overwritten);
    assert_eq!(
        outcome.materialization,
        Materialization::Reserialize(confstash::FileType::Json)
    );
    assert_eq!(outcome.path, home.path().join("configs").join("eslintrc.js"));
    assert_eq!(
        store.snapshot().custom_configs.get("eslintrc"),
        Some(&PackageType::Eslint)
    );

    let content = std::fs::read_to_string(&outcome.path).unwrap();
    assert!(content.starts_with("module.exports = "));
    assert_eq!(
        read_config_file(&outcome.path).unwrap(),
        read_config_file(&file).unwrap()
    );
}

#[test]
fn test_yaml_config_reads_back_equivalent() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(
        &src,
        ".stylelintrc.yaml",
        "extends: stylelint-config-standard\nrules:\n  indentation: 2\n",
    );
    let store = MemoryOptionsStore::default();

    let outcome = save(
        &file,
        &named("styles", false),
        &store,
        &PresetChooser(Some(PackageType::Stylelint)),
        home.path(),
    )
    .unwrap();

    assert_eq!(
        read_config_file(&outcome.path).unwrap(),
        json!({ "extends": "stylelint-config-standard", "rules": { "indentation": 2 } })
    );
}

#[test]
fn test_js_config_copied_byte_for_byte() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let original = "// team rules\nmodule.exports = { semi: false, singleQuote: true };\n";
    let file = write(&src, "prettier.config.js", original);
    let store = MemoryOptionsStore::default();

    let outcome = save(
        &file,
        &named("team", false),
        &store,
        &PresetChooser(Some(PackageType::Prettier)),
        home.path(),
    )
    .unwrap();

    assert_eq!(outcome.materialization, Materialization::Copy);
    assert_eq!(
        std::fs::read(&outcome.path).unwrap(),
        std::fs::read(&file).unwrap()
    );
}

#[test]
fn test_reserved_name_rejected_without_writes() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(&src, "x.json", "{}");
    let store = MemoryOptionsStore::default();

    for reserved in ["default", "airbnb", "prettier", "recommended"] {
        let err = save(&file, &named(reserved, false), &store, &eslint(), home.path())
            .unwrap_err();
        assert!(matches!(err, SaveError::NameConflict(ref n) if n == reserved));
        let message = err.to_string();
        assert!(message.contains(reserved));
        assert!(message.contains("--name"));
    }

    assert!(store.snapshot().custom_configs.is_empty());
    assert!(configs_dir_is_empty(home.path()));
}

#[test]
fn test_existing_name_requires_force() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(&src, "mine.json", r#"{"root": true}"#);
    let store = MemoryOptionsStore::default();
    store.save_custom_config("mine", PackageType::Babel).unwrap();

    let err = save(&file, &named("mine", false), &store, &eslint(), home.path()).unwrap_err();
    assert!(matches!(err, SaveError::AlreadyExists(_)));
    assert!(err.to_string().contains("--force"));
    assert_eq!(
        store.snapshot().custom_configs.get("mine"),
        Some(&PackageType::Babel)
    );
    assert!(configs_dir_is_empty(home.path()));

    let outcome = save(&file, &named("mine", true), &store, &eslint(), home.path()).unwrap();
    assert!(outcome.overwritten);
    assert_eq!(
        store.snapshot().custom_configs.get("mine"),
        Some(&PackageType::Eslint)
    );
}

#[test]
fn test_force_resave_overwrites_file() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let store = FileOptionsStore::new(home.path());

    let first = write(&src, "base.json", r#"{"semi": true}"#);
    save(&first, &named("base", false), &store, &eslint(), home.path()).unwrap();

    let second = write(&src, "base.yml", "semi: false\n");
    let outcome = save(
        &second,
        &named("base", true),
        &store,
        &PresetChooser(Some(PackageType::Prettier)),
        home.path(),
    )
    .unwrap();

    assert!(outcome.overwritten);
    assert_eq!(read_config_file(&outcome.path).unwrap(), json!({ "semi": false }));
    assert_eq!(
        store.load().unwrap().custom_configs.get("base"),
        Some(&PackageType::Prettier)
    );
}

#[test]
fn test_other_package_unsupported() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(&src, "tsconfig.json", "{}");
    let store = MemoryOptionsStore::default();

    let err = save(
        &file,
        &SaveOptions::default(),
        &store,
        &PresetChooser(None),
        home.path(),
    )
    .unwrap_err();

    assert!(matches!(err, SaveError::UnsupportedPackage));
    assert_eq!(
        err.to_string(),
        "Custom package configs are currently not supported."
    );
    assert!(store.snapshot().custom_configs.is_empty());
}

#[test]
fn test_file_type_not_accepted_by_package() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let file = write(&src, "babelrc.yaml", "presets: []\n");
    let store = MemoryOptionsStore::default();

    let err = save(
        &file,
        &SaveOptions::default(),
        &store,
        &PresetChooser(Some(PackageType::Babel)),
        home.path(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SaveError::UnsupportedFileType { ref ext, package: PackageType::Babel } if ext == ".yaml"
    ));
    assert_eq!(
        err.to_string(),
        "Error: .yaml file type is not supported by babel"
    );
    assert!(store.snapshot().custom_configs.is_empty());
    assert!(configs_dir_is_empty(home.path()));
}

#[test]
fn test_failed_write_rolls_back_new_entry() {
    let home = tempdir().unwrap();
    let store = MemoryOptionsStore::default();
    let missing = home.path().join("does-not-exist.json");

    let err = save(&missing, &SaveOptions::default(), &store, &eslint(), home.path())
        .unwrap_err();

    assert!(matches!(err, SaveError::Persistence { ref name, .. } if name == "does-not-exist"));
    assert!(err
        .to_string()
        .starts_with("An error occurred while saving does-not-exist:\n"));
    assert!(store.snapshot().custom_configs.is_empty());
}

#[test]
fn test_failed_write_restores_previous_entry() {
    let src = tempdir().unwrap();
    let home = tempdir().unwrap();
    let store = FileOptionsStore::new(home.path());
    store.save_custom_config("broken", PackageType::Stylelint).unwrap();
    let file = write(&src, "broken.json", "{ not json");

    let err = save(&file, &named("broken", true), &store, &eslint(), home.path()).unwrap_err();

    assert!(matches!(err, SaveError::Persistence { .. }));
    assert_eq!(
        store.load().unwrap().custom_configs.get("broken"),
        Some(&PackageType::Stylelint)
    );
}
