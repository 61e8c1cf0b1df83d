use super::types::SyntaxTree;
use anyhow::Context;
use std::path::Path;

impl SyntaxTree {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("failed to parse syntax tree YAML")
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("failed to parse syntax tree JSON")
    }
}

/// Load a syntax tree snapshot; `.yaml`/`.yml` files are read as YAML, anything else as JSON.
pub fn load_tree(file_path: &Path) -> anyhow::Result<SyntaxTree> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read syntax tree {}", file_path.display()))?;
    let is_yaml = file_path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let tree = if is_yaml {
        SyntaxTree::from_yaml_str(&content)?
    } else {
        SyntaxTree::from_json_str(&content)?
    };

    tracing::debug!(
        path = %file_path.display(),
        units = tree.units.len(),
        "Loaded syntax tree snapshot"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TREE_YAML: &str = r#"
units:
  - file: Paths.java
    types:
      - qualified_name: com.acme.Paths
        constants:
          - name: BASE
            initializer: { kind: literal, raw: '"/api"', value: /api }
"#;

    #[test]
    fn test_load_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(TREE_YAML.as_bytes()).unwrap();
        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.units.len(), 1);
        assert!(tree.find_type("com.acme.Paths").is_some());
    }

    #[test]
    fn test_load_json_otherwise() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"units":[{"types":[{"qualified_name":"A"}]}]}"#)
            .unwrap();
        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.types().count(), 1);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_tree(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
