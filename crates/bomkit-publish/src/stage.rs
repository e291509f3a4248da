//! Staging a catalog publication into a Maven-layout directory.

use std::path::{Path, PathBuf};

use bomkit_core::config::PublicationConfig;
use bomkit_util::errors::BomkitError;
use bomkit_util::hash::Checksums;

use crate::module::{ModuleFile, ModuleMetadata};
use crate::pom::render_pom;
use crate::publication::CatalogPublication;
use crate::repository::LocalRepository;

/// Files written for one staged publication.
#[derive(Debug, Clone)]
pub struct StagedPublication {
    pub coordinate: String,
    pub dir: PathBuf,
    /// Published files (artifacts, `.module`, `.pom`), without checksum sidecars.
    pub files: Vec<PathBuf>,
}

/// Copy the publication's artifacts into `repo`, followed by its module
/// metadata and POM. Every file gets `.md5`, `.sha1` and `.sha256` sidecars.
///
/// The artifacts must already exist; run the tasks they are built by first.
pub fn stage(
    publication: &CatalogPublication,
    meta: &PublicationConfig,
    repo: &LocalRepository,
) -> miette::Result<StagedPublication> {
    let dir = repo.version_dir(
        &publication.group_id,
        &publication.artifact_id,
        &publication.version,
    );
    tracing::info!("Staging {} into {}", publication.coordinate(), dir.display());

    let mut files = Vec::new();
    let mut module_files = Vec::new();
    for artifact in &publication.artifacts {
        let data = std::fs::read(&artifact.file).map_err(|e| BomkitError::Publication {
            message: format!(
                "Artifact {} is not available ({e}); it is built by {}",
                artifact.file.display(),
                artifact.built_by
            ),
        })?;
        let name = artifact.file_name(&publication.artifact_id, &publication.version);
        files.push(write_with_sidecars(&dir, &name, &data)?);
        module_files.push(ModuleFile::new(&name, &data));
    }

    let base = format!("{}-{}", publication.artifact_id, publication.version);

    let module = ModuleMetadata::new(publication, module_files).to_json()?;
    files.push(write_with_sidecars(&dir, &format!("{base}.module"), module.as_bytes())?);

    let pom = render_pom(publication, meta)?;
    files.push(write_with_sidecars(&dir, &format!("{base}.pom"), pom.as_bytes())?);

    Ok(StagedPublication {
        coordinate: publication.coordinate(),
        dir,
        files,
    })
}

fn write_with_sidecars(dir: &Path, name: &str, data: &[u8]) -> miette::Result<PathBuf> {
    let path = dir.join(name);
    write(&path, data)?;
    for (ext, digest) in Checksums::of(data).sidecars() {
        write(&dir.join(format!("{name}.{ext}")), digest.as_bytes())?;
    }
    Ok(path)
}

fn write(path: &Path, data: &[u8]) -> miette::Result<()> {
    bomkit_util::fs::write_atomic(path, data).map_err(|e| {
        BomkitError::Publication {
            message: format!("Failed to write {}: {e}", path.display()),
        }
        .into()
    })
}
