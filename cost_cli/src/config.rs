//! Loading display settings and input documents from disk.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use cost_core::errors::{CalcError, CalcResult};
use cost_core::inputs::CostInputs;
use cost_core::settings::DisplayConfig;
use tracing::debug;

/// Load display settings, falling back to the defaults when no path is given.
///
/// Missing keys in the file take their default values.
pub fn load_display_config(path: Option<&Path>) -> CalcResult<DisplayConfig> {
    let Some(path) = path else {
        return Ok(DisplayConfig::default());
    };

    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let config: DisplayConfig = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;
    config.validate()?;

    debug!(path = %path.display(), currency = %config.currency_code, "loaded display config");
    Ok(config)
}

/// Load a `CostInputs` document. A path of `-` reads stdin.
pub fn load_inputs(path: &Path) -> CalcResult<CostInputs> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?
    };

    parse_inputs(&contents, &path.display().to_string())
}

fn parse_inputs(contents: &str, source: &str) -> CalcResult<CostInputs> {
    serde_json::from_str(contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", source, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_when_no_path() {
        let config = load_display_config(None).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let file = write_temp(r#"{"currency_code":"USD","locale":"en-US"}"#);
        let config = load_display_config(Some(file.path())).unwrap();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.decimal_places, 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let file = write_temp(r#"{"decimal_places":12}"#);
        let err = load_display_config(Some(file.path())).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let garbage = write_temp("not json");
        let err = load_display_config(Some(garbage.path())).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_display_config(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_inputs() {
        let file = write_temp(r#"{"mode":"PerPiece","production_quantity":10,"raw_material_per_piece":-5}"#);
        match load_inputs(file.path()).unwrap() {
            CostInputs::PerPiece(p) => {
                assert_eq!(p.production_quantity, 10);
                assert_eq!(p.raw_material_per_piece, -5.0);
            }
            other => panic!("expected per-piece inputs, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mode() {
        let err = parse_inputs(r#"{"mode":"Monthly"}"#, "test").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
