//! The generator: derives the flags bundle and writes the three artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::context::BuildContext;
use crate::error::{Error, Result};
use crate::flags::{compiler_major_version, cppstd_to_flag, FlagsBundle};
use crate::template::{render_extra_conf, EXTRA_CONF_FILE, FLAGS_FILE, MARKER_FILE};

/// Where the artifacts land.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Directory receiving the completion script and the flags JSON.
    pub out_dir: PathBuf,
    /// Directory receiving the marker file, the root YCM runs from.
    pub project_dir: PathBuf,
}

impl OutputLayout {
    pub fn new<O: Into<PathBuf>, P: Into<PathBuf>>(out_dir: O, project_dir: P) -> Self {
        Self {
            out_dir: out_dir.into(),
            project_dir: project_dir.into(),
        }
    }
}

/// Paths written by a generation run, plus the bundle for reporting.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub extra_conf: PathBuf,
    pub flags_file: PathBuf,
    pub marker_file: PathBuf,
    pub bundle: FlagsBundle,
}

/// Produces the three output files from a build-context snapshot.
pub struct Generator<'a> {
    context: &'a BuildContext,
    layout: OutputLayout,
}

impl<'a> Generator<'a> {
    pub fn new(context: &'a BuildContext, layout: OutputLayout) -> Self {
        Self { context, layout }
    }

    /// Write the completion script, the flags JSON, and the marker file.
    ///
    /// Every output is overwritten wholesale; parent directories are created
    /// as needed. Write failures propagate untouched.
    pub fn generate(&self) -> Result<GenerateReport> {
        let bundle = FlagsBundle::from_dependencies(&self.context.dependencies);

        let compiler = &self.context.settings.compiler;
        let cxx_std = cppstd_to_flag(compiler.cppstd.as_deref());
        let cxx_version = compiler_major_version(compiler.version.as_deref());
        debug!(%cxx_std, %cxx_version, "derived compiler settings");

        let script = render_extra_conf(&cxx_std, &cxx_version)?;
        let flags_json = bundle.to_json();

        let extra_conf = self.layout.out_dir.join(EXTRA_CONF_FILE);
        let flags_file = self.layout.out_dir.join(FLAGS_FILE);
        let marker_file = self.layout.project_dir.join(MARKER_FILE);

        save(&extra_conf, &script)?;
        save(&flags_file, &flags_json)?;

        // The script resolves the flags file through the marker at its own
        // invocation time, so the recorded path must be absolute.
        let out_dir_abs = absolutize(&self.layout.out_dir)?;
        save(&marker_file, &out_dir_abs.display().to_string())?;

        info!(
            includes = bundle.includes.len(),
            defines = bundle.defines.len(),
            flags = bundle.flags.len(),
            out_dir = %out_dir_abs.display(),
            "generated completion configuration"
        );

        Ok(GenerateReport {
            extra_conf,
            flags_file,
            marker_file,
            bundle,
        })
    }
}

/// Write text to `path`, creating parent directories as needed.
pub fn save(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CompilerSettings, Dependency, Settings};

    fn context_with(cppstd: Option<&str>, version: Option<&str>) -> BuildContext {
        BuildContext {
            dependencies: vec![Dependency {
                name: "fmt".to_string(),
                includedirs: vec!["/opt/fmt/include".to_string()],
                defines: vec!["FMT_HEADER_ONLY=1".to_string()],
                cxxflags: vec!["-fvisibility=hidden".to_string()],
            }],
            settings: Settings {
                compiler: CompilerSettings {
                    cppstd: cppstd.map(str::to_string),
                    version: version.map(str::to_string),
                },
            },
        }
    }

    #[test]
    fn test_generate_writes_three_files() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");
        let context = context_with(Some("17"), Some("12.3"));

        let generator = Generator::new(&context, OutputLayout::new(&out_dir, tmp.path()));
        let report = generator.generate().unwrap();

        assert!(report.extra_conf.exists());
        assert!(report.flags_file.exists());
        assert!(report.marker_file.exists());
        assert_eq!(report.extra_conf, out_dir.join(EXTRA_CONF_FILE));
        assert_eq!(report.marker_file, tmp.path().join(MARKER_FILE));
    }

    #[test]
    fn test_marker_records_absolute_out_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");
        let context = BuildContext::default();

        let generator = Generator::new(&context, OutputLayout::new(&out_dir, tmp.path()));
        let report = generator.generate().unwrap();

        let marker = fs::read_to_string(report.marker_file).unwrap();
        assert_eq!(marker, out_dir.display().to_string());
        assert!(Path::new(&marker).is_absolute());
        assert!(Path::new(&marker).exists());
    }

    #[test]
    fn test_missing_version_is_swallowed() {
        let tmp = tempfile::tempdir().unwrap();
        let context = context_with(Some("gnu17"), None);

        let generator =
            Generator::new(&context, OutputLayout::new(tmp.path().join("out"), tmp.path()));
        let report = generator.generate().unwrap();

        let script = fs::read_to_string(report.extra_conf).unwrap();
        assert!(script.contains("'--std=gnu++17',"));
        assert!(script.contains("\"-I/usr/include/c++/\""));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("file.txt");
        save(&nested, "hello").unwrap();
        assert_eq!(fs::read_to_string(nested).unwrap(), "hello");
    }

    #[test]
    fn test_generate_overwrites_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");

        let first = context_with(Some("17"), Some("12"));
        Generator::new(&first, OutputLayout::new(&out_dir, tmp.path()))
            .generate()
            .unwrap();

        let second = BuildContext::default();
        let report = Generator::new(&second, OutputLayout::new(&out_dir, tmp.path()))
            .generate()
            .unwrap();

        let parsed: FlagsBundle =
            serde_json::from_str(&fs::read_to_string(report.flags_file).unwrap()).unwrap();
        assert_eq!(parsed, FlagsBundle::default());
    }
}
