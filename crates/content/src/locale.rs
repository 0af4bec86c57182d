use serde::{Deserialize, Serialize};

/// A supported authoring/display locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Language tag, e.g. `en` or `ta`.
    pub id: String,
    /// Human-facing name shown in the studio.
    pub title: String,
    /// Whether this is the base (fallback) locale.
    #[serde(default, rename = "isBase")]
    pub is_base: bool,
}

impl Locale {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            is_base: false,
        }
    }

    pub fn base(id: &str, title: &str) -> Self {
        Self {
            is_base: true,
            ..Self::new(id, title)
        }
    }
}

/// Locale configuration error. Fatal at schema-build time.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("no base locale declared")]
    MissingBase,
    #[error("multiple base locales declared: {0} and {1}")]
    MultipleBase(String, String),
    #[error("duplicate locale id: {0}")]
    DuplicateId(String),
}

/// Ordered set of supported locales with exactly one base locale.
///
/// Built once at startup and passed by reference to every locale-dependent
/// component. There is no mutation path after construction; adding a locale
/// means rebuilding the registry and every localized field derived from it.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    base_index: usize,
}

impl LocaleRegistry {
    pub fn new(locales: Vec<Locale>) -> Result<Self, LocaleError> {
        let mut base_index = None;
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].iter().any(|l| l.id == locale.id) {
                return Err(LocaleError::DuplicateId(locale.id.clone()));
            }
            if locale.is_base {
                if let Some(first) = base_index {
                    let first: &Locale = &locales[first];
                    return Err(LocaleError::MultipleBase(
                        first.id.clone(),
                        locale.id.clone(),
                    ));
                }
                base_index = Some(i);
            }
        }
        let base_index = base_index.ok_or(LocaleError::MissingBase)?;
        Ok(Self {
            locales,
            base_index,
        })
    }

    /// The locale set the clinic site ships with.
    pub fn clinic_default() -> Self {
        Self::new(vec![
            Locale::base("en", "English"),
            Locale::new("ta", "Tamil"),
        ])
        .expect("default locale set is valid")
    }

    /// All locales, in declaration order.
    pub fn all(&self) -> &[Locale] {
        &self.locales
    }

    /// The designated base/fallback locale.
    pub fn base(&self) -> &Locale {
        &self.locales[self.base_index]
    }

    pub fn get(&self, id: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
