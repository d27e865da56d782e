//! Validation of raw declarations into runnable job descriptors.

use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use wfcrun_core::{GenerationOptions, JobDescriptor, MAX_SEED};

use crate::artifact;
use crate::error::BuildError;
use crate::manifest::RawJobDeclaration;

/// Option attributes every overlapping declaration must carry.
const REQUIRED_FIELDS: [&str; 7] = [
    "N",
    "periodicInput",
    "periodic",
    "height",
    "width",
    "symmetry",
    "ground",
];

/// Build a descriptor from one raw declaration.
///
/// The attribute set must be a superset of [`REQUIRED_FIELDS`]; no partial
/// options are ever produced. The input artifact is resolved as
/// `{input_dir}/{name}.png`.
///
/// The seed is an independent uniform draw in `[0, MAX_SEED]` per build, so
/// reruns are not seed-reproducible unless seeds are persisted externally.
pub fn build(decl: &RawJobDeclaration, input_dir: &Path) -> Result<JobDescriptor, BuildError> {
    let options = parse_options(decl)?;
    let path = input_dir.join(format!("{}.png", decl.name));
    let input = artifact::load_input(&path)
        .map_err(BuildError::Decode)?
        .ok_or_else(|| BuildError::MissingInput(path.clone()))?;

    Ok(JobDescriptor {
        name: decl.name.clone(),
        options,
        input,
        seed: rand::rng().random_range(0..=MAX_SEED),
    })
}

fn parse_options(decl: &RawJobDeclaration) -> Result<GenerationOptions, BuildError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| !decl.attrs.contains_key(**f))
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BuildError::MissingFields(missing));
    }

    let defaults = GenerationOptions::default();
    Ok(GenerationOptions {
        pattern_size: parse_field(decl, "N", defaults.pattern_size)?,
        periodic_input: parse_field(decl, "periodicInput", defaults.periodic_input)?,
        periodic_output: parse_field(decl, "periodic", defaults.periodic_output)?,
        out_height: parse_field(decl, "height", defaults.out_height)?,
        out_width: parse_field(decl, "width", defaults.out_width)?,
        symmetry: parse_field(decl, "symmetry", defaults.symmetry)?,
        ground: parse_field(decl, "ground", defaults.ground)?,
    })
}

/// Parse one option attribute, falling back to the engine default when the
/// attribute is absent. An attribute that is present but unparsable rejects
/// the declaration.
fn parse_field<T: FromStr>(
    decl: &RawJobDeclaration,
    field: &str,
    default: T,
) -> Result<T, BuildError> {
    match decl.attrs.get(field) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| BuildError::InvalidField {
            field: field.to_string(),
            value: value.clone(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use image::{Rgb, RgbImage};

    use crate::manifest::JobFamily;

    fn decl_with(attrs: &[(&str, &str)]) -> RawJobDeclaration {
        RawJobDeclaration {
            family: JobFamily::Overlapping,
            name: "maze".to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn full_decl() -> RawJobDeclaration {
        decl_with(&[
            ("N", "2"),
            ("periodicInput", "true"),
            ("periodic", "false"),
            ("height", "48"),
            ("width", "48"),
            ("symmetry", "8"),
            ("ground", "0"),
        ])
    }

    /// Input directory holding a 4x4 plus-pattern `maze.png`.
    fn input_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_fn(4, 4, |x, y| {
            if x == 2 || y == 2 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        img.save(dir.path().join("maze.png")).unwrap();
        dir
    }

    #[test]
    fn builds_descriptor_with_exact_option_values() {
        let dir = input_dir();
        let job = build(&full_decl(), dir.path()).unwrap();

        assert_eq!(job.name, "maze");
        assert_eq!(job.options.pattern_size, 2);
        assert!(job.options.periodic_input);
        assert!(!job.options.periodic_output);
        assert_eq!(job.options.out_height, 48);
        assert_eq!(job.options.out_width, 48);
        assert_eq!(job.options.symmetry, 8);
        assert_eq!(job.options.ground, 0);
        assert_eq!((job.input.height(), job.input.width()), (4, 4));
    }

    #[test]
    fn seed_is_within_engine_range() {
        let dir = input_dir();
        for _ in 0..32 {
            let job = build(&full_decl(), dir.path()).unwrap();
            assert!(job.seed <= MAX_SEED);
        }
    }

    #[test]
    fn any_missing_field_rejects_the_declaration() {
        let dir = input_dir();
        for &field in REQUIRED_FIELDS.iter() {
            let mut decl = full_decl();
            decl.attrs.remove(field);
            let err = build(&decl, dir.path()).unwrap_err();
            match err {
                BuildError::MissingFields(missing) => assert_eq!(missing, [field]),
                other => panic!("expected MissingFields for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_attribute_set_reports_all_fields() {
        let dir = input_dir();
        let decl = RawJobDeclaration {
            family: JobFamily::Overlapping,
            name: "maze".to_string(),
            attrs: BTreeMap::new(),
        };
        match build(&decl, dir.path()).unwrap_err() {
            BuildError::MissingFields(missing) => assert_eq!(missing.len(), 7),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_value_rejects_the_declaration() {
        let dir = input_dir();
        let mut decl = full_decl();
        decl.attrs.insert("N".to_string(), "two".to_string());
        let err = build(&decl, dir.path()).unwrap_err();
        assert!(
            matches!(err, BuildError::InvalidField { ref field, .. } if field == "N"),
            "got {err:?}"
        );
    }

    #[test]
    fn missing_input_rejects_the_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let err = build(&full_decl(), dir.path()).unwrap_err();
        match err {
            BuildError::MissingInput(path) => {
                assert_eq!(path, PathBuf::from(dir.path()).join("maze.png"));
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_input_is_fatal_not_dropped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("maze.png"), b"garbage").unwrap();
        let err = build(&full_decl(), dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::Decode(_)));
    }
}
