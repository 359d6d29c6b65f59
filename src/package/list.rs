use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::PackageSpec;
use crate::runtime::Runtime;

/// Packages required by the RAG ingestion pipeline, in install order.
const RAG_INGESTION_PACKAGES: &[(&str, &str)] = &[
    ("python-dotenv", "1.0.0"),
    ("openai", "1.0.0"),
    ("chromadb", "0.4.0"),
    ("sentence-transformers", "2.2.0"),
    ("pinecone-client", "2.2.0"),
    ("langchain-pinecone", "0.1.0"),
    ("pypdf2", "3.0.0"),
    ("python-docx", "0.8.11"),
    ("markdown", "3.4.0"),
    ("beautifulsoup4", "4.12.0"),
    ("langchain", "0.1.0"),
    ("langchain-openai", "0.1.0"),
    ("langchain-community", "0.1.0"),
    ("numpy", "1.24.0"),
    ("pandas", "2.0.0"),
    ("tqdm", "4.65.0"),
];

/// Ordered, read-only list of packages for the individual install path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageList {
    packages: Vec<PackageSpec>,
}

impl PackageList {
    pub fn new(packages: Vec<PackageSpec>) -> Self {
        PackageList { packages }
    }

    /// The built-in fallback list.
    pub fn rag_ingestion() -> Self {
        Self::new(
            RAG_INGESTION_PACKAGES
                .iter()
                .map(|(name, version)| PackageSpec::new(*name, *version))
                .collect(),
        )
    }

    /// Load a list from a JSON file of the form `{"packages": ["name>=version", ...]}`.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read package list {}", path.display()))?;
        let list: PackageList = serde_json::from_str(&content)
            .with_context(|| format!("Invalid package list {}", path.display()))?;
        Ok(list)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageSpec> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for PackageList {
    fn default() -> Self {
        Self::rag_ingestion()
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a PackageSpec;
    type IntoIter = std::slice::Iter<'a, PackageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
