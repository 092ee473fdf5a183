//! Flag derivation: the flags bundle and the compiler-setting mappings.

use serde::{Deserialize, Serialize};

use crate::context::Dependency;

/// The three-list flag structure serialized to the flags JSON file.
///
/// Entries keep insertion order across dependencies; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsBundle {
    /// Include directories, each prefixed `-isystem`.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Preprocessor defines, each prefixed `-D`.
    #[serde(default)]
    pub defines: Vec<String>,

    /// Compiler flags, copied verbatim.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl FlagsBundle {
    /// Build the bundle from an ordered dependency list.
    pub fn from_dependencies(dependencies: &[Dependency]) -> Self {
        let mut bundle = Self::default();
        for dep in dependencies {
            bundle
                .includes
                .extend(prefixed("-isystem", &dep.includedirs));
            bundle.defines.extend(prefixed("-D", &dep.defines));
            bundle.flags.extend(dep.cxxflags.iter().cloned());
        }
        bundle
    }

    /// Serialize with 4-space indentation, the layout the companion script
    /// was written against.
    pub fn to_json(&self) -> String {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        // Serializing three string vectors into a Vec cannot fail.
        self.serialize(&mut serializer)
            .expect("FlagsBundle serialization is infallible");
        String::from_utf8(buf).expect("serde_json output is valid UTF-8")
    }
}

/// Prefix every value with `prefix`.
pub fn prefixed(prefix: &str, values: &[String]) -> Vec<String> {
    values.iter().map(|v| format!("{prefix}{v}")).collect()
}

/// Map a configured C++ standard to the `--std=` value the script embeds.
///
/// Absent or empty defaults to `c++14` to account for older libraries.
pub fn cppstd_to_flag(cppstd: Option<&str>) -> String {
    let cppstd = match cppstd {
        Some(s) if !s.is_empty() => s,
        _ => return "c++14".to_string(),
    };
    if let Some((_, version)) = cppstd.split_once("gnu") {
        format!("gnu++{version}")
    } else {
        format!("c++{cppstd}")
    }
}

/// Extract the major component of a compiler version string.
///
/// Absent or malformed versions silently yield an empty string.
pub fn compiler_major_version(version: Option<&str>) -> String {
    version
        .and_then(|v| v.split('.').next())
        .unwrap_or("")
        .to_string()
}
