//! Read-only catalogs handed to the directory pages through context.

use std::rc::Rc;

use common::catalog::{Catalog, CatalogError, CatalogKind};

#[derive(Clone, PartialEq)]
pub struct DirectoryCatalogs {
    places: Rc<Catalog>,
    school_paths: Rc<Catalog>,
}

impl DirectoryCatalogs {
    pub fn new(places: Catalog, school_paths: Catalog) -> Self {
        Self { places: Rc::new(places), school_paths: Rc::new(school_paths) }
    }

    pub fn load_bundled() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::bundled(CatalogKind::Places)?, Catalog::bundled(CatalogKind::SchoolPaths)?))
    }

    pub fn catalog(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Places => &self.places,
            CatalogKind::SchoolPaths => &self.school_paths,
        }
    }
}
