use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings namespace used by this panel.
pub const NAMESPACE: &str = "referenceViewer";
/// Key: path of the last opened reference image.
pub const KEY_LAST_REF: &str = "last_ref";
/// Key: directory the open dialog starts in.
pub const KEY_LAST_DIR: &str = "last_dir";

/// Key-value persistence for panel state across sessions. Owned by the
/// shell; the viewport controller never sees it.
pub trait SettingsStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String>;
    fn set(&mut self, namespace: &str, key: &str, value: &str);
    fn remove(&mut self, namespace: &str, key: &str);
}

/// On-disk layout: one TOML table per namespace.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDoc {
    #[serde(flatten)]
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

/// TOML file-backed settings, written through on every change.
pub struct TomlSettings {
    path: PathBuf,
    doc: SettingsDoc,
}

impl TomlSettings {
    /// Open the per-user settings file (`<config dir>/refview/settings.toml`).
    pub fn open_default() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(dir.join("refview").join("settings.toml"))
    }

    /// Open (or start empty at) the given path. Unreadable or malformed
    /// files start an empty store rather than failing.
    pub fn open(path: PathBuf) -> Self {
        let doc = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, doc }
    }

    fn write(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match toml::to_string_pretty(&self.doc) {
            Ok(content) => {
                if let Err(err) = fs::write(&self.path, content) {
                    tracing::warn!("failed to write {}: {err}", self.path.display());
                }
            }
            Err(err) => tracing::warn!("failed to serialize settings: {err}"),
        }
    }
}

impl SettingsStore for TomlSettings {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        self.doc.namespaces.get(namespace)?.get(key).cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: &str) {
        self.doc
            .namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.write();
    }

    fn remove(&mut self, namespace: &str, key: &str) {
        if let Some(ns) = self.doc.namespaces.get_mut(namespace) {
            ns.remove(key);
        }
        self.write();
    }
}

/// In-memory store for tests and headless use.
#[derive(Default)]
pub struct MemorySettings {
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

impl SettingsStore for MemorySettings {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        self.namespaces.get(namespace)?.get(key).cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: &str) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, namespace: &str, key: &str) {
        if let Some(ns) = self.namespaces.get_mut(namespace) {
            ns.remove(key);
        }
    }
}
