//! Manifest document parsing and job loading.

use std::collections::BTreeMap;
use std::path::Path;

use wfcrun_core::{CoreError, JobDescriptor};

use crate::builder;
use crate::error::{BuildError, ManifestError};

/// Root tag every manifest document must carry.
const ROOT_TAG: &str = "samples";

// ---------------------------------------------------------------------------
// Job families
// ---------------------------------------------------------------------------

/// Recognized job families and their manifest tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFamily {
    /// The overlapping-pattern generation model.
    Overlapping,
    /// Recognized in manifests as an extension point; declarations of this
    /// family never produce descriptors today.
    SimpleTiled,
}

impl JobFamily {
    pub fn tag(self) -> &'static str {
        match self {
            JobFamily::Overlapping => "overlapping",
            JobFamily::SimpleTiled => "simpletiled",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "overlapping" => Some(Self::Overlapping),
            "simpletiled" => Some(Self::SimpleTiled),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// One raw declaration lifted out of the manifest, not yet validated.
///
/// `attrs` holds the string-encoded option attributes; `name` is kept
/// separate because it doubles as the input/output file stem.
#[derive(Debug, Clone)]
pub struct RawJobDeclaration {
    pub family: JobFamily,
    pub name: String,
    pub attrs: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A parsed and format-validated manifest document.
#[derive(Debug)]
pub struct Manifest {
    declarations: Vec<RawJobDeclaration>,
}

impl Manifest {
    /// Parse the manifest file at `path`.
    ///
    /// Fatal on unreadable files, unparsable markup, or a root tag other
    /// than `samples`. There is no per-declaration recovery at this stage.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_xml(&text)
    }

    /// Parse a manifest from its XML text.
    pub fn from_xml(text: &str) -> Result<Self, ManifestError> {
        let doc = roxmltree::Document::parse(text)?;
        let root = doc.root_element();
        if root.tag_name().name() != ROOT_TAG {
            return Err(ManifestError::WrongRoot {
                found: root.tag_name().name().to_string(),
            });
        }

        let mut declarations = Vec::new();
        for node in root.children().filter(|n| n.is_element()) {
            let tag = node.tag_name().name();
            let Some(family) = JobFamily::from_tag(tag) else {
                tracing::debug!(tag, "Ignoring unrecognized declaration tag");
                continue;
            };
            let Some(name) = node.attribute("name") else {
                tracing::warn!(
                    family = family.tag(),
                    "Dropping declaration without a name attribute"
                );
                continue;
            };
            let attrs = node
                .attributes()
                .filter(|a| a.name() != "name")
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect();
            declarations.push(RawJobDeclaration {
                family,
                name: name.to_string(),
                attrs,
            });
        }

        Ok(Self { declarations })
    }

    /// Declarations of `family`, in document order.
    pub fn declarations(&self, family: JobFamily) -> impl Iterator<Item = &RawJobDeclaration> {
        self.declarations.iter().filter(move |d| d.family == family)
    }
}

// ---------------------------------------------------------------------------
// Job loading
// ---------------------------------------------------------------------------

/// Materialize descriptors for the requested families.
///
/// Declarations are visited in document order. A non-empty `name_filter`
/// keeps only exact name matches. Declarations that fail validation or
/// whose input artifact is missing are logged and dropped; partial success
/// is the normal case. A corrupt input file aborts the whole load.
pub fn load_jobs(
    manifest: &Manifest,
    families: &[JobFamily],
    input_dir: &Path,
    name_filter: &[String],
) -> Result<Vec<JobDescriptor>, CoreError> {
    let mut jobs = Vec::new();
    for &family in families {
        if family != JobFamily::Overlapping {
            // Only the overlapping model is runnable today.
            tracing::debug!(family = family.tag(), "Skipping non-runnable family");
            continue;
        }
        for decl in manifest.declarations(family) {
            if !name_filter.is_empty() && !name_filter.iter().any(|n| n == &decl.name) {
                continue;
            }
            match builder::build(decl, input_dir) {
                Ok(job) => jobs.push(job),
                Err(BuildError::Decode(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!(name = %decl.name, error = %e, "Dropping declaration");
                }
            }
        }
    }
    Ok(jobs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
