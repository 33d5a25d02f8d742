//! Loading product records from YAML or JSON files.

use super::{InventoryError, Product, MAX_DESCRIPTION_LENGTH};
use crate::utils::text_processing::truncate_chars;
use log::*;
use std::{fs, path::Path};

/// Supported import file formats.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Yaml,
    Json,
}

impl ImportFormat {
    /// Guess the format from the file extension. Anything that is not `.json`
    /// is read as YAML.
    ///
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ImportFormat::Json,
            _ => ImportFormat::Yaml,
        }
    }
}

/// Parse a list of products from `contents`. Records with a blank name or
/// description are skipped with a warning; longer descriptions are cut at
/// [`MAX_DESCRIPTION_LENGTH`] characters.
///
pub fn parse_products(contents: &str, format: ImportFormat) -> Result<Vec<Product>, String> {
    let records: Vec<Product> = match format {
        ImportFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string())?,
        ImportFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string())?,
    };
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, product)| admit(index + 1, product))
        .collect())
}

fn admit(position: usize, mut product: Product) -> Option<Product> {
    if product.name.trim().is_empty() {
        warn!("Skipping imported record {}: name is required", position);
        return None;
    }
    if product.description.trim().is_empty() {
        warn!(
            "Skipping imported record {} ({}): description is required",
            position, product.name
        );
        return None;
    }
    if product.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        warn!(
            "Truncating description of imported record {} ({}) to {} characters",
            position, product.name, MAX_DESCRIPTION_LENGTH
        );
        product.description = truncate_chars(&product.description, MAX_DESCRIPTION_LENGTH);
    }
    Some(product)
}

/// Read and parse the product file at `path`.
///
pub fn load_products(path: &Path) -> Result<Vec<Product>, InventoryError> {
    let contents = fs::read_to_string(path).map_err(|e| InventoryError::ImportFailed {
        path: path.to_path_buf(),
        message: format!("IO error: {}", e),
    })?;
    parse_products(&contents, ImportFormat::from_path(path)).map_err(|message| {
        InventoryError::ImportFailed {
            path: path.to_path_buf(),
            message,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ImportFormat::from_path(Path::new("products.json")),
            ImportFormat::Json
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("products.JSON")),
            ImportFormat::Json
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("products.yml")),
            ImportFormat::Yaml
        );
        assert_eq!(ImportFormat::from_path(Path::new("products")), ImportFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "- codigo: 1\n  nombre: Monitor\n  descripcion: 24 pulgadas\n  cantidad: 2\n";
        let products = parse_products(yaml, ImportFormat::Yaml).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Monitor");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[{"codigo": "77", "nombre": "Cable", "descripcion": "HDMI", "cantidad": "12"}]"#;
        let products = parse_products(json, ImportFormat::Json).unwrap();
        assert_eq!(products[0].code, 77);
        assert_eq!(products[0].quantity, 12);
    }

    #[test]
    fn test_parse_skips_blank_name() {
        let yaml = "- codigo: 1\n  nombre: \"\"\n  descripcion: Sin nombre\n- codigo: 2\n  nombre: Mesa\n  descripcion: Roble\n";
        let products = parse_products(yaml, ImportFormat::Yaml).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mesa");
    }

    #[test]
    fn test_parse_skips_missing_description() {
        let json = r#"[{"codigo": 1, "nombre": "Raton"}, {"codigo": 2, "nombre": "Teclado", "descripcion": "   "}]"#;
        let products = parse_products(json, ImportFormat::Json).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_truncates_long_description() {
        let json = format!(
            r#"[{{"codigo": 2, "nombre": "ok", "descripcion": "{}"}}]"#,
            "x".repeat(400)
        );
        let products = parse_products(&json, ImportFormat::Json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].description.chars().count(), MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_products("{not a list", ImportFormat::Json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/definitely/not/here/products.yml");
        let error = load_products(&path).unwrap_err();
        assert!(matches!(error, InventoryError::ImportFailed { .. }));
        assert!(error.to_string().contains("products.yml"));
    }

    #[test]
    fn test_load_file() {
        let dir = std::env::temp_dir().join(format!("inventario-import-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.json");
        fs::write(
            &path,
            r#"[{"codigo": 5, "nombre": "Silla", "descripcion": "Plegable", "cantidad": 1}]"#,
        )
        .unwrap();
        let products = load_products(&path).unwrap();
        assert_eq!(products[0].name, "Silla");
        assert_eq!(products[0].description, "Plegable");
        fs::remove_dir_all(&dir).unwrap();
    }
}
