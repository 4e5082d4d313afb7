//! Language profile registry
//!
//! The registry owns the validated, immutable profiles and resolves
//! language tags and file extensions to them. Resolution never fails:
//! anything unknown maps to the generic profile.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::builtin;
use super::language::LanguageProfile;
use crate::error::{HighlightError, Result};

/// Process-wide table of language profiles
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    /// Profiles by id
    profiles: HashMap<String, Arc<LanguageProfile>>,
    /// Extension or alias to profile id
    tags: HashMap<String, String>,
    /// Profile returned for unknown tags
    fallback: Arc<LanguageProfile>,
}

/// Normalize a tag for lookup: lowercase, no leading dot
fn normalize(tag: &str) -> String {
    tag.trim().trim_start_matches('.').to_lowercase()
}

impl ProfileRegistry {
    /// Create a registry with the built-in profiles
    pub fn new() -> Result<Self> {
        let mut registry = Self::with_fallback(builtin::fallback_profile()?);
        for profile in builtin::all_profiles()? {
            registry.register(profile)?;
        }
        Ok(registry)
    }

    /// Create a registry holding only a fallback profile
    pub fn with_fallback(fallback: LanguageProfile) -> Self {
        let fallback = Arc::new(fallback);
        let mut profiles = HashMap::new();
        profiles.insert(fallback.id.clone(), Arc::clone(&fallback));
        Self {
            profiles,
            tags: HashMap::new(),
            fallback,
        }
    }

    /// Register a profile under its id and extensions
    ///
    /// The profile is frozen from here on.
    pub fn register(&mut self, profile: LanguageProfile) -> Result<Arc<LanguageProfile>> {
        if self.profiles.contains_key(&profile.id) {
            return Err(HighlightError::DuplicateProfile(profile.id));
        }
        let profile = Arc::new(profile);
        for ext in &profile.extensions {
            self.tags.insert(normalize(ext), profile.id.clone());
        }
        debug!(profile = %profile.id, rules = profile.rules.len(), "registered profile");
        self.profiles.insert(profile.id.clone(), Arc::clone(&profile));
        Ok(profile)
    }

    /// Map an extra tag (e.g., an extension) to an existing profile
    pub fn add_alias(&mut self, tag: &str, profile_id: &str) -> Result<()> {
        if !self.profiles.contains_key(profile_id) {
            return Err(HighlightError::UnknownProfile(profile_id.to_string()));
        }
        self.tags.insert(normalize(tag), profile_id.to_string());
        Ok(())
    }

    /// Resolve a language id or extension to a profile
    pub fn resolve(&self, tag: &str) -> Arc<LanguageProfile> {
        self.lookup(tag).unwrap_or_else(|| {
            debug!(tag, fallback = %self.fallback.id, "unknown language tag");
            Arc::clone(&self.fallback)
        })
    }

    /// Resolve a file path by its extension
    pub fn resolve_path(&self, path: &Path) -> Arc<LanguageProfile> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.resolve(ext),
            None => Arc::clone(&self.fallback),
        }
    }

    /// Look up a file path by its extension without falling back
    pub fn lookup_path(&self, path: &Path) -> Option<Arc<LanguageProfile>> {
        self.lookup(path.extension()?.to_str()?)
    }

    /// Look up a tag without falling back
    pub fn lookup(&self, tag: &str) -> Option<Arc<LanguageProfile>> {
        let tag = normalize(tag);
        let id = self.tags.get(&tag).unwrap_or(&tag);
        self.profiles.get(id).cloned()
    }

    /// Get the fallback profile
    pub fn fallback(&self) -> &Arc<LanguageProfile> {
        &self.fallback
    }

    /// List registered profile ids
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.profiles.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }
}
