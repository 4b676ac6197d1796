// Named game presets and case-insensitive lookup.

use thiserror::Error;

use crate::draw::{DrawConfiguration, DrawError};

/// Built-in games as `(name, label, count, minimum, maximum)`.
const BUILTIN_PRESETS: &[(&str, &str, i64, i64, i64)] = &[
    ("lotto", "Lotto", 6, 1, 49),
    ("multimulti", "MultiMulti", 10, 1, 80),
    ("minilotto", "Mini Lotto", 5, 1, 42),
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown game type: {name}")]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("preset name cannot be empty")]
    EmptyName,

    #[error("duplicate preset name: {name}")]
    Duplicate { name: String },

    #[error("preset `{name}` is invalid: {source}")]
    Invalid { name: String, source: DrawError },
}

// ---------------------------------------------------------------------------
// Preset
// ---------------------------------------------------------------------------

/// A game exposed to users under a short lookup name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    name: String,
    config: DrawConfiguration,
}

impl Preset {
    /// Lowercase lookup key, e.g. `minilotto`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &DrawConfiguration {
        &self.config
    }

    /// One-line summary used in game listings: `6 numbers from 1 to 49`.
    pub fn summary(&self) -> String {
        format!(
            "{} numbers from {} to {}",
            self.config.count(),
            self.config.minimum(),
            self.config.maximum()
        )
    }
}

/// Normalize user input into a lookup key (trimmed, lowercase).
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// PresetRegistry
// ---------------------------------------------------------------------------

/// Ordered set of presets. Built-ins come first, in their fixed order,
/// followed by any added from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetRegistry {
    /// The three standard games: `lotto`, `multimulti`, `minilotto`.
    pub fn builtin() -> Self {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|&(name, label, count, minimum, maximum)| Preset {
                name: name.to_string(),
                config: DrawConfiguration::trusted(label, count, minimum, maximum),
            })
            .collect();
        PresetRegistry { presets }
    }

    /// Register an already-validated configuration under `name`.
    pub fn insert(&mut self, name: &str, config: DrawConfiguration) -> Result<(), PresetError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        if self.get(&name).is_some() {
            return Err(PresetError::Duplicate { name });
        }
        self.presets.push(Preset { name, config });
        Ok(())
    }

    /// Validate the raw parts and register them under `name`.
    pub fn add(
        &mut self,
        name: &str,
        label: &str,
        count: i64,
        minimum: i64,
        maximum: i64,
    ) -> Result<(), PresetError> {
        let config = DrawConfiguration::new(label, count, minimum, maximum).map_err(|source| {
            PresetError::Invalid {
                name: normalize_name(name),
                source,
            }
        })?;
        self.insert(name, config)
    }

    /// Find a preset by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        let key = normalize_name(name);
        self.presets.iter().find(|p| p.name == key)
    }

    /// Resolve a user-supplied name to its configuration.
    ///
    /// Unknown names yield [`PresetError::UnknownPreset`] carrying the list
    /// of valid names so the caller can offer guidance.
    pub fn lookup(&self, name: &str) -> Result<&DrawConfiguration, PresetError> {
        self.get(name)
            .map(Preset::config)
            .ok_or_else(|| PresetError::UnknownPreset {
                name: normalize_name(name),
                available: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
