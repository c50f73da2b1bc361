//! Category file service
//!
//! Loads flat category files and runs the ordering use cases on them.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{
    ApplicationError, ApplicationResult, IoResultExt, PathComposer, PathOptions,
};
use crate::domain::{
    sort_for_tree, sort_tree_order, Category, CategoryId, CategoryTree, LabelOptions,
    SortOptions, TreeOrder,
};
use crate::infrastructure::lookup::InMemoryCategoryLookup;
use crate::infrastructure::traits::FileSystem;

/// On-disk layout of a category file: a list of `[[category]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFile {
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,
}

impl CategoryFile {
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::InvalidCategoryFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Service for ordering and rendering category files.
pub struct CategoryService {
    fs: Arc<dyn FileSystem>,
}

impl CategoryService {
    /// Create a new category service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load all categories of a file, in file order.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<Category>> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::InvalidCategoryFile {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        if !self.fs.is_file(path) {
            return Err(ApplicationError::InvalidCategoryFile {
                path: path.to_path_buf(),
                message: "not a file".to_string(),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read category file", path)?;
        let file = CategoryFile::parse(&content, path)?;
        debug!("loaded {} categories", file.categories.len());
        Ok(file.categories)
    }

    /// Records in tree order.
    pub fn sort<'a>(
        &self,
        categories: &'a [Category],
        options: SortOptions,
    ) -> ApplicationResult<Vec<&'a Category>> {
        Ok(sort_for_tree(categories, options)?)
    }

    /// Arena tree of the categories; orphans kept per `sort` become top-level nodes.
    pub fn tree(
        &self,
        categories: &[Category],
        sort: SortOptions,
    ) -> ApplicationResult<CategoryTree<Category>> {
        Ok(CategoryTree::from_records(categories, sort)?)
    }

    /// Indented labels of all categories in tree order.
    pub fn labels(
        &self,
        categories: &[Category],
        sort: SortOptions,
        label: &LabelOptions,
    ) -> ApplicationResult<Vec<String>> {
        Ok(self.tree(categories, sort)?.indented_labels(label))
    }

    /// Breadcrumb of category `id`; empty if the id is not in the file.
    pub fn breadcrumb(
        &self,
        categories: &[Category],
        id: CategoryId,
        options: &PathOptions,
    ) -> ApplicationResult<String> {
        let lookup = InMemoryCategoryLookup::from_records(categories)?;
        let Some(record) = categories.iter().find(|c| c.id == id) else {
            debug!("category {} not in input", id);
            return Ok(String::new());
        };
        Ok(PathComposer::new(&lookup).compose(record, options))
    }

    /// Tree order together with the ids the walk from the root never reached.
    pub fn tree_order<'a>(
        &self,
        categories: &'a [Category],
        options: SortOptions,
    ) -> ApplicationResult<TreeOrder<'a, Category>> {
        Ok(sort_tree_order(categories, options)?)
    }
}
