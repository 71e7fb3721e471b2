//! Cross-module export registry.
//!
//! Property accesses on imported names resolve to a reference into the
//! exporting module's generated class. The registry is assembled once,
//! before any module is lowered, through [`ModuleExportsBuilder`]; building
//! consumes the builder, so a registry can never change while renders read
//! it.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

pub use crate::error::ExportError;

/// Normalized module path: `/`-separated, no extension, no `.` segments.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct ModuleId(String);

const SOURCE_EXTENSIONS: [&str; 5] = [".d.ts", ".tsx", ".ts", ".jsx", ".js"];

impl ModuleId {
    /// Normalize a module path.
    pub fn new(path: &str) -> Self {
        let path = path.replace('\\', "/");
        let mut stem = path.as_str();
        for ext in SOURCE_EXTENSIONS {
            if let Some(stripped) = stem.strip_suffix(ext) {
                stem = stripped;
                break;
            }
        }
        ModuleId(normalize_segments(stem.split('/')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve an import specifier as written in this module.
    ///
    /// Relative specifiers (`./x`, `../x`) are joined onto this module's
    /// directory; anything else is taken as-is.
    pub fn resolve(&self, specifier: &str) -> ModuleId {
        if !(specifier.starts_with("./") || specifier.starts_with("../")) {
            return ModuleId::new(specifier);
        }
        let dir = match self.0.rfind('/') {
            Some(pos) => &self.0[..pos],
            None => "",
        };
        let joined = format!("{dir}/{specifier}");
        ModuleId::new(&joined)
    }
}

fn normalize_segments<'s>(segments: impl Iterator<Item = &'s str>) -> String {
    let mut out: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out.join("/")
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves names imported from other modules.
pub trait ExportRegistry: Send + Sync {
    /// Reference to `name` exported by the module `specifier` points at, as
    /// seen from `current`. `None` if the module or name is unknown.
    fn exported_identifier(&self, current: &ModuleId, specifier: &str, name: &str)
        -> Option<String>;
}

struct ModuleEntry {
    class_name: String,
    names: FxHashSet<String>,
}

/// Collects modules and their exports.
#[derive(Default)]
pub struct ModuleExportsBuilder {
    modules: FxHashMap<ModuleId, ModuleEntry>,
}

impl ModuleExportsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module and the class its code is generated into.
    pub fn add_module(&mut self, module: ModuleId, class_name: &str) -> Result<(), ExportError> {
        if self.modules.contains_key(&module) {
            return Err(ExportError::DuplicateModule { module });
        }
        self.modules.insert(
            module,
            ModuleEntry {
                class_name: class_name.to_owned(),
                names: FxHashSet::default(),
            },
        );
        Ok(())
    }

    /// Record a name exported by a registered module.
    pub fn add_export(&mut self, module: &ModuleId, name: &str) -> Result<(), ExportError> {
        let Some(entry) = self.modules.get_mut(module) else {
            return Err(ExportError::UnknownModule {
                module: module.clone(),
            });
        };
        if !entry.names.insert(name.to_owned()) {
            return Err(ExportError::DuplicateExport {
                module: module.clone(),
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    /// Freeze the registry.
    pub fn build(self) -> ModuleExports {
        tracing::debug!(modules = self.modules.len(), "export registry built");
        ModuleExports {
            modules: self.modules,
        }
    }
}

/// Immutable export registry, shareable across threads.
pub struct ModuleExports {
    modules: FxHashMap<ModuleId, ModuleEntry>,
}

impl ModuleExports {
    pub fn builder() -> ModuleExportsBuilder {
        ModuleExportsBuilder::new()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Check if `name` is exported by `module`.
    pub fn exports(&self, module: &ModuleId, name: &str) -> bool {
        self.modules
            .get(module)
            .is_some_and(|entry| entry.names.contains(name))
    }
}

impl ExportRegistry for ModuleExports {
    fn exported_identifier(
        &self,
        current: &ModuleId,
        specifier: &str,
        name: &str,
    ) -> Option<String> {
        let target = current.resolve(specifier);
        let entry = self.modules.get(&target)?;
        if !entry.names.contains(name) {
            return None;
        }
        Some(format!("{}::getInstance()->{name}", entry.class_name))
    }
}
