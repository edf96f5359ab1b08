use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::{error::AppResult, models::Person};

const INDEX: &str = "index";
const ADD: &str = "add";
const EDIT: &str = "edit";

const EMBEDDED_TEMPLATES: [(&str, &str); 3] = [
    (INDEX, include_str!("../templates/index.hbs")),
    (ADD, include_str!("../templates/add.hbs")),
    (EDIT, include_str!("../templates/edit.hbs")),
];

/// HTML pages for the person list and the add/edit forms.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Templates compiled once from the copies built into the binary.
    pub fn embedded() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        for (name, source) in EMBEDDED_TEMPLATES {
            registry.register_template_string(name, source)?;
        }

        Ok(Self { registry })
    }

    /// Templates read from `dir` and re-read on every render.
    pub fn from_dir(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        let mut registry = Handlebars::new();
        registry.set_dev_mode(true);
        for (name, _) in EMBEDDED_TEMPLATES {
            registry.register_template_file(name, dir.join(format!("{name}.hbs")))?;
        }

        Ok(Self { registry })
    }

    pub fn new(template_cache: bool, template_dir: impl AsRef<Path>) -> AppResult<Self> {
        if template_cache {
            Self::embedded()
        } else {
            Self::from_dir(template_dir)
        }
    }

    pub fn index(&self, persons: &[Person]) -> AppResult<String> {
        Ok(self.registry.render(INDEX, &json!({ "persons": persons }))?)
    }

    pub fn add(&self, person: &Person) -> AppResult<String> {
        Ok(self.registry.render(ADD, &json!({ "person": person }))?)
    }

    pub fn edit(&self, person: &Person) -> AppResult<String> {
        Ok(self.registry.render(EDIT, &json!({ "person": person }))?)
    }
}
