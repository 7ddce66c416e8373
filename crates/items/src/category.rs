use catalog_core::{validate, DomainResult, Entity};

/// Catalog category an item is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    name: String,
    path_from_root: Option<String>,
}

impl Category {
    pub fn new(id: &str, name: &str, path_from_root: Option<String>) -> DomainResult<Self> {
        validate::text(id.trim(), 1, 50, "category id")?;
        validate::text(name.trim(), 1, 255, "category name")?;

        Ok(Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            path_from_root: validate::trimmed(path_from_root),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_from_root(&self) -> Option<&str> {
        self.path_from_root.as_deref()
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
