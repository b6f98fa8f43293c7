//! The contract between the engine and code-generation backends.
//!
//! A backend turns a [`ClassDescriptor`] into source text. Everything
//! target-specific (type-name tables, templates, file layout) is private to
//! the backend; the engine only calls [`CodeGenerator::generate`] with a sink.

use crate::class::ClassDescriptor;
use crate::error::{StubError, StubResult, ToolInvocationWarning};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A code-generation backend for one target language/library combination.
pub trait CodeGenerator: Send + Sync {
    /// Short backend name, as used in configuration (`"rust"`).
    fn name(&self) -> &str;

    /// Where the artifact for `class` lives, relative to the output directory.
    fn output_path(&self, class: &ClassDescriptor) -> PathBuf;

    /// Render `class` into `sink`.
    ///
    /// Fails with [`StubError::UnsupportedType`] when the class uses a type
    /// the backend cannot render, or [`StubError::Io`] when the sink fails.
    fn generate(&self, sink: &mut dyn Write, class: &ClassDescriptor) -> StubResult<()>;

    /// Optional pass over the finished file, such as running a formatter.
    ///
    /// Problems are reported, never raised.
    fn post_process(&self, _path: &Path) -> Option<ToolInvocationWarning> {
        None
    }
}

/// A file written by [`write_class`].
#[derive(Debug)]
pub struct EmittedFile {
    /// Qualified name of the class the file was generated for.
    pub class: String,
    pub path: PathBuf,
    /// Set when post-processing reported a problem; the file is still valid.
    pub warning: Option<ToolInvocationWarning>,
}

/// Generate `class` into its file under `base_dir`.
///
/// Output goes to a temporary file next to the destination and is renamed
/// into place only after the generator succeeds, so a failed run never
/// leaves a partial file behind.
pub fn write_class(
    base_dir: &Path,
    generator: &dyn CodeGenerator,
    class: &ClassDescriptor,
) -> StubResult<EmittedFile> {
    let path = base_dir.join(generator.output_path(class));
    let dir = path.parent().unwrap_or(base_dir);

    std::fs::create_dir_all(dir)
        .map_err(|e| StubError::io(format!("creating directory {}", dir.display()), e))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| StubError::io(format!("creating temporary file in {}", dir.display()), e))?;
    generator.generate(tmp.as_file_mut(), class)?;
    tmp.as_file_mut()
        .flush()
        .map_err(|e| StubError::io(format!("flushing {}", path.display()), e))?;
    tmp.persist(&path)
        .map_err(|e| StubError::io(format!("writing {}", path.display()), e.error))?;

    tracing::info!(class = class.qualified_name(), path = %path.display(), "generated bindings");

    let warning = generator.post_process(&path);
    if let Some(warning) = &warning {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    Ok(EmittedFile {
        class: class.qualified_name().to_string(),
        path,
        warning,
    })
}
