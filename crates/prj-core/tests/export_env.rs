//! Tests that read and write the real process environment.
//!
//! They share the `PRJ_*` variables, so each one holds `ENV_LOCK` for its
//! whole duration and starts from a clean slate.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use prj_core::config::env_keys::prj;
use prj_core::config::{env_bool, env_optional, env_os_verbatim, remove_env_var, set_env_var};
use prj_core::{export_all, files, resolve, ErrorKind};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for key in prj::ALL {
        remove_env_var(key);
    }
    guard
}

fn init_project(root: &Path) {
    fs::create_dir_all(root.join(".config")).unwrap();
    set_env_var(prj::ROOT, root);
}

#[test]
fn export_then_resolve_reproduces_snapshot() {
    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    init_project(tmp.path());

    let exported = export_all().unwrap();
    let reloaded = resolve().unwrap();
    assert_eq!(exported, reloaded);
    assert_eq!(reloaded.cache_home, tmp.path().join(".cache"));
}

#[test]
fn export_overwrites_and_writes_empty_id() {
    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    init_project(tmp.path());
    set_env_var(prj::CACHE_HOME, "");
    set_env_var(prj::PATH, "");

    let prj = export_all().unwrap();
    assert_eq!(prj.id, "");
    assert_eq!(env::var(prj::ID).unwrap(), "");
    assert_eq!(
        env::var(prj::CACHE_HOME).unwrap(),
        tmp.path().join(".cache").to_string_lossy()
    );
    assert_eq!(
        env::var(prj::PATH).unwrap(),
        tmp.path().join(".local/bin").to_string_lossy()
    );
}

#[test]
fn export_keeps_raw_id_from_file() {
    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    init_project(tmp.path());
    fs::write(tmp.path().join(".config/prj_id"), "myproj\n").unwrap();

    let exported = export_all().unwrap();
    assert_eq!(exported.id, "myproj\n");
    assert_eq!(env::var(prj::ID).unwrap(), "myproj\n");
    assert_eq!(resolve().unwrap(), exported);
}

#[cfg(target_os = "linux")]
#[test]
fn id_namespaces_cache_under_xdg_base() {
    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("project");
    init_project(&root);
    set_env_var(prj::ID, "x");
    let xdg_cache = tmp.path().join("xdg-cache");
    let previous = env::var_os("XDG_CACHE_HOME");
    set_env_var("XDG_CACHE_HOME", &xdg_cache);

    let prj = resolve();

    match previous {
        Some(v) => set_env_var("XDG_CACHE_HOME", v),
        None => remove_env_var("XDG_CACHE_HOME"),
    }
    assert_eq!(prj.unwrap().cache_home, xdg_cache.join("prj").join("x"));
}

#[test]
fn data_file_creates_parent_directories() {
    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    init_project(tmp.path());
    let data = tmp.path().join("data-home");
    set_env_var(prj::DATA_HOME, &data);

    let p = files::data_file("app/data.db").unwrap();
    assert_eq!(p, data.join("app/data.db"));
    assert!(data.join("app").is_dir());

    assert_eq!(files::find_data_file("app/data.db").unwrap_err().kind(), ErrorKind::Io);
    fs::write(&p, b"").unwrap();
    assert_eq!(files::find_data_file("app/data.db").unwrap(), p);
}

#[cfg(unix)]
#[test]
fn non_utf8_root_survives_export_round_trip() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join(OsStr::from_bytes(b"proj\xff"));
    init_project(&root);

    let exported = export_all().unwrap();
    assert_eq!(exported.root, root);
    assert_eq!(env::var_os(prj::CACHE_HOME).unwrap(), root.join(".cache"));
    assert!(env::var(prj::ROOT).is_err());

    let reloaded = resolve().unwrap();
    assert_eq!(exported, reloaded);
}

#[cfg(unix)]
#[test]
fn non_utf8_id_override_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _guard = clean_env();
    let tmp = tempfile::tempdir().unwrap();
    init_project(tmp.path());
    set_env_var(prj::ID, OsStr::from_bytes(b"id\xff"));

    let err = resolve().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains(prj::ID));
}

const LOADER_KEY: &str = "PRJ_TEST_LOADER_VALUE";

#[test]
fn loader_verbatim_keeps_whitespace() {
    let _guard = clean_env();
    set_env_var(LOADER_KEY, "  /some path \n");
    assert_eq!(
        env_os_verbatim(LOADER_KEY).unwrap(),
        std::ffi::OsString::from("  /some path \n")
    );

    set_env_var(LOADER_KEY, "");
    assert_eq!(env_os_verbatim(LOADER_KEY), None);

    remove_env_var(LOADER_KEY);
    assert_eq!(env_os_verbatim(LOADER_KEY), None);
}

#[test]
fn loader_optional_trims_and_drops_blank() {
    let _guard = clean_env();
    set_env_var(LOADER_KEY, "  debug ");
    assert_eq!(env_optional(LOADER_KEY).as_deref(), Some("debug"));

    set_env_var(LOADER_KEY, "   ");
    assert_eq!(env_optional(LOADER_KEY), None);

    remove_env_var(LOADER_KEY);
    assert_eq!(env_optional(LOADER_KEY), None);
}

#[test]
fn loader_bool_parses_switches() {
    let _guard = clean_env();
    remove_env_var(LOADER_KEY);
    assert!(env_bool(LOADER_KEY, true));
    assert!(!env_bool(LOADER_KEY, false));

    for off in ["0", "false", "No", " OFF "] {
        set_env_var(LOADER_KEY, off);
        assert!(!env_bool(LOADER_KEY, true), "{off:?} should be false");
    }
    set_env_var(LOADER_KEY, "1");
    assert!(env_bool(LOADER_KEY, false));

    remove_env_var(LOADER_KEY);
}
