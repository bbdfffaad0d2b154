#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file ending in `.{ext}`; removed on drop.
    pub fn create_temp_spec(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("uritree_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_spec(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_spec(content, "json")
    }
}

pub mod models {
    use uritree::spec::{load_spec_from_spec, parse_spec_str, SpecFormat};
    use uritree::{BuildError, RouteMeta, UriModel};

    pub fn routes_from_yaml(yaml: &str) -> Vec<RouteMeta> {
        let spec = parse_spec_str(yaml, SpecFormat::Yaml).unwrap();
        load_spec_from_spec(&spec)
    }

    pub fn try_model_from_yaml(yaml: &str) -> Result<UriModel, BuildError> {
        UriModel::from_routes(&routes_from_yaml(yaml))
    }

    pub fn model_from_yaml(yaml: &str) -> UriModel {
        try_model_from_yaml(yaml).expect("model should build")
    }
}
