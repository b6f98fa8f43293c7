//! Batch generation over a class source

use jnistub_core::{
    ClassDescriptor, ClassSource, CodeGenerator, EmittedFile, StubError, StubResult, write_class,
};
use std::path::Path;

/// Outcome of [`generate_classes`].
///
/// Both lists keep the order in which the classes were requested.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<EmittedFile>,
    /// Requested class name and the error that stopped it.
    pub failed: Vec<(String, StubError)>,
}

impl GenerationReport {
    /// True when every requested class was written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Files written whose post-processing reported a problem.
    pub fn warnings(&self) -> impl Iterator<Item = &EmittedFile> {
        self.generated.iter().filter(|f| f.warning.is_some())
    }
}

/// Load, build and write one class.
pub fn generate_class(
    source: &dyn ClassSource,
    name: &str,
    generator: &dyn CodeGenerator,
    base_dir: &Path,
) -> StubResult<EmittedFile> {
    let raw = source.load(name)?;
    let class = ClassDescriptor::build(&raw)?;
    write_class(base_dir, generator, &class)
}

/// Generate bindings for every class in `names`.
///
/// A failing class is recorded in the report and does not stop the others.
pub fn generate_classes<I, S>(
    source: &dyn ClassSource,
    names: I,
    generator: &dyn CodeGenerator,
    base_dir: &Path,
) -> GenerationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = GenerationReport::default();

    for name in names {
        let name = name.as_ref();
        match generate_class(source, name, generator, base_dir) {
            Ok(file) => report.generated.push(file),
            Err(e) => {
                tracing::error!(class = name, backend = generator.name(), "{e}");
                report.failed.push((name.to_string(), e));
            }
        }
    }

    tracing::info!(
        generated = report.generated.len(),
        failed = report.failed.len(),
        backend = generator.name(),
        "generation finished"
    );
    report
}
