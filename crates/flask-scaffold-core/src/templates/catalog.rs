//! The embedded Flask template catalog
//!
//! Every generated file is a [`TemplateEntry`]: a relative output path plus a
//! rule for producing its text. Payloads live under `templates/flask/` at the
//! workspace root and are compiled in, so the catalog needs no filesystem or
//! network access at runtime. Dotfiles are stored as `dot_<name>` so they do
//! not act on this repository.
//!
//! Rendering is a pure function of [`ProjectParameters`]: no clock, no
//! randomness, no host state.

use crate::error::{Result, ScaffoldError};
use crate::params::ProjectParameters;
use crate::workflow::Workflow;
use std::path::PathBuf;

macro_rules! payload {
    ($file:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../templates/flask/",
            $file
        ))
    };
}

macro_rules! fixed {
    ($path:literal) => {
        TemplateEntry::fixed($path, payload!($path))
    };
    ($path:literal, $file:literal) => {
        TemplateEntry::fixed($path, payload!($file))
    };
}

/// Named value a parameterized template may reference as `{{key}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    Description,
    Author,
    PackageName,
    Version,
    /// The PEP 621 authors table entry, `email` omitted when empty
    Authors,
    LicenseId,
    PythonConstraint,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::ProjectName,
        Placeholder::Description,
        Placeholder::Author,
        Placeholder::PackageName,
        Placeholder::Version,
        Placeholder::Authors,
        Placeholder::LicenseId,
        Placeholder::PythonConstraint,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Placeholder::ProjectName => "project_name",
            Placeholder::Description => "description",
            Placeholder::Author => "author",
            Placeholder::PackageName => "package_name",
            Placeholder::Version => "version",
            Placeholder::Authors => "authors",
            Placeholder::LicenseId => "license_id",
            Placeholder::PythonConstraint => "python_constraint",
        }
    }

    /// Value for this placeholder, `None` when the run did not collect it
    fn value(&self, params: &ProjectParameters) -> Option<String> {
        let poetry = params.poetry.as_ref();
        match self {
            Placeholder::ProjectName => Some(params.name.clone()),
            Placeholder::Description => Some(params.description.clone()),
            Placeholder::Author => Some(params.author.clone()),
            Placeholder::PackageName => poetry.map(|p| p.package_name.clone()),
            Placeholder::Version => poetry.map(|p| p.version.clone()),
            Placeholder::Authors => poetry.map(|p| {
                if p.author_email.is_empty() {
                    format!("{{name = \"{}\"}}", params.author)
                } else {
                    format!(
                        "{{name = \"{}\", email = \"{}\"}}",
                        params.author, p.author_email
                    )
                }
            }),
            Placeholder::LicenseId => poetry.map(|p| p.license_id.clone()),
            Placeholder::PythonConstraint => poetry.map(|p| p.python_constraint.clone()),
        }
    }
}

/// How an entry's text is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Written exactly as embedded
    Fixed(&'static str),
    /// `{{key}}` markers replaced by the declared bindings
    Text {
        source: &'static str,
        bindings: &'static [Placeholder],
    },
}

/// When an entry is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Part of every scaffold, written by the materializer
    Base,
    /// Dependency manifest, written by the finalizer for one workflow
    Manifest(Workflow),
}

/// One generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Output path relative to the project root, `/`-separated
    pub path: &'static str,
    pub scope: Scope,
    pub render: Render,
}

impl TemplateEntry {
    pub const fn fixed(path: &'static str, source: &'static str) -> Self {
        Self {
            path,
            scope: Scope::Base,
            render: Render::Fixed(source),
        }
    }

    pub const fn text(
        path: &'static str,
        source: &'static str,
        bindings: &'static [Placeholder],
    ) -> Self {
        Self {
            path,
            scope: Scope::Base,
            render: Render::Text { source, bindings },
        }
    }

    pub const fn manifest(workflow: Workflow, path: &'static str, render: Render) -> Self {
        Self {
            path,
            scope: Scope::Manifest(workflow),
            render,
        }
    }

    /// Output path as a platform path
    pub fn relative_path(&self) -> PathBuf {
        self.path.split('/').collect()
    }

    /// Produce this entry's text for `params`
    pub fn render(&self, params: &ProjectParameters) -> Result<String> {
        match self.render {
            Render::Fixed(source) => Ok(source.to_string()),
            Render::Text { source, bindings } => {
                let mut text = source.to_string();
                for placeholder in bindings {
                    let value =
                        placeholder
                            .value(params)
                            .ok_or(ScaffoldError::UnboundPlaceholder {
                                path: self.path,
                                key: placeholder.key(),
                            })?;
                    text = text.replace(&format!("{{{{{}}}}}", placeholder.key()), &value);
                }
                Ok(text)
            }
        }
    }
}

const CATALOG: &[TemplateEntry] = &[
    fixed!(".flaskenv", "dot_flaskenv"),
    fixed!(".env", "dot_env"),
    fixed!(".gitignore", "dot_gitignore"),
    fixed!(".gitattributes", "dot_gitattributes"),
    TemplateEntry::text("LICENSE", payload!("LICENSE"), &[Placeholder::Author]),
    TemplateEntry::text(
        "README.md",
        payload!("README.md"),
        &[Placeholder::ProjectName, Placeholder::Description],
    ),
    fixed!("CONTRIBUTING.md"),
    fixed!("CODE_OF_CONDUCT.md"),
    fixed!("config.py"),
    fixed!("app/__init__.py"),
    fixed!("main.py"),
    fixed!("app/models.py"),
    fixed!("app/auth/forms.py"),
    fixed!("app/main/forms.py"),
    fixed!("app/email.py"),
    fixed!("app/errors/__init__.py"),
    fixed!("app/errors/handlers.py"),
    fixed!("app/utils/__init__.py"),
    fixed!("app/utils/decorators.py"),
    fixed!("app/main/__init__.py"),
    fixed!("app/main/routes.py"),
    fixed!("app/auth/__init__.py"),
    fixed!("app/auth/email.py"),
    fixed!("app/auth/routes.py"),
    fixed!("app/admin/__init__.py"),
    fixed!("app/admin/routes.py"),
    fixed!("app/templates/base.html"),
    fixed!("app/templates/partials/_flash_messages.html"),
    fixed!("app/templates/partials/_footer.html"),
    fixed!("app/templates/partials/_public_navbar.html"),
    fixed!("app/templates/partials/_dashboard_navbar.html"),
    fixed!("app/templates/main/index.html"),
    fixed!("app/templates/main/contact.html"),
    fixed!("app/templates/auth/login.html"),
    fixed!("app/templates/auth/register.html"),
    fixed!("app/templates/auth/request_password_reset.html"),
    fixed!("app/templates/auth/reset_password.html"),
    fixed!("app/templates/dashboard/dashboard.html"),
    fixed!("app/templates/errors/404_public.html"),
    fixed!("app/templates/errors/404_dashboard.html"),
    fixed!("app/templates/errors/500_public.html"),
    fixed!("app/templates/errors/500_dashboard.html"),
    fixed!("app/templates/emails/reset_password.txt"),
    fixed!("app/templates/emails/reset_password.html"),
    fixed!("app/static/css/main.css"),
    fixed!("app/static/css/dashboard.css"),
    fixed!("app/static/js/main.js"),
    fixed!("app/static/js/dashboard.js"),
    TemplateEntry::fixed("app/static/img/.gitkeep", ""),
    TemplateEntry::manifest(
        Workflow::RequirementsFileManaged,
        "requirements.txt",
        Render::Fixed(payload!("requirements.txt")),
    ),
    TemplateEntry::manifest(
        Workflow::PoetryManaged,
        "pyproject.toml",
        Render::Text {
            source: payload!("pyproject.toml"),
            bindings: &[
                Placeholder::PackageName,
                Placeholder::Version,
                Placeholder::Description,
                Placeholder::Authors,
                Placeholder::LicenseId,
                Placeholder::PythonConstraint,
            ],
        },
    ),
];

const _: () = assert!(
    catalog_is_bound(CATALOG),
    "a template references a placeholder its entry does not bind"
);

/// Every entry, base files first, in write order
pub fn catalog() -> &'static [TemplateEntry] {
    CATALOG
}

/// Entries written into every scaffold
pub fn entries() -> impl Iterator<Item = &'static TemplateEntry> {
    CATALOG.iter().filter(|e| e.scope == Scope::Base)
}

/// Manifest entries for one workflow
pub fn manifest_entries(workflow: Workflow) -> impl Iterator<Item = &'static TemplateEntry> {
    CATALOG
        .iter()
        .filter(move |e| e.scope == Scope::Manifest(workflow))
}

const fn is_key_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_lowercase()
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn declares(bindings: &[Placeholder], key: &[u8]) -> bool {
    let mut i = 0;
    while i < bindings.len() {
        if bytes_eq(bindings[i].key().as_bytes(), key) {
            return true;
        }
        i += 1;
    }
    false
}

/// True when every `{{key}}` marker in `source` is declared in `bindings`
const fn source_is_bound(source: &str, bindings: &[Placeholder]) -> bool {
    let s = source.as_bytes();
    let mut i = 0;
    while i + 1 < s.len() {
        if s[i] == b'{' && s[i + 1] == b'{' {
            let start = i + 2;
            let mut end = start;
            while end < s.len() && is_key_byte(s[end]) {
                end += 1;
            }
            if end > start && end + 1 < s.len() && s[end] == b'}' && s[end + 1] == b'}' {
                let (_, rest) = s.split_at(start);
                let (key, _) = rest.split_at(end - start);
                if !declares(bindings, key) {
                    return false;
                }
                i = end + 2;
                continue;
            }
        }
        i += 1;
    }
    true
}

const fn catalog_is_bound(entries: &[TemplateEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        if let Render::Text { source, bindings } = entries[i].render {
            if !source_is_bound(source, bindings) {
                return false;
            }
        }
        i += 1;
    }
    true
}
