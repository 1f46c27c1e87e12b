//! Font discovery and resolution.
//!
//! Catalog entries name families that may or may not be installed. [`FontStore`] owns a
//! `fontdb` database and maps each [`FontChoice`] to concrete face bytes, falling back through the
//! entry's generic family and then any installed face.
//!
//! `fontdb` maps generic families to Microsoft family names out of the box, so after every load the
//! store points each generic at an installed family instead.

use std::{collections::HashMap, path::Path, sync::Arc};

use usvg::fontdb;

use crate::{
    foundation::error::{ArcBannerError, ArcBannerResult},
    style::fonts::{FontChoice, GenericFamily},
};

/// Face bytes selected for one catalog entry.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// Family name reported by the selected face.
    pub family_name: String,
    /// Raw font file bytes (may be a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index within `bytes`.
    pub index: u32,
    /// `true` when the face belongs to the requested named family.
    pub exact: bool,
    /// CSS-style weight of the selected face.
    pub weight: u16,
    /// `true` for italic and oblique faces.
    pub italic: bool,
}

const SANS_SERIF_CANDIDATES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "Ubuntu",
    "Cantarell",
    "FreeSans",
];
const SERIF_CANDIDATES: &[&str] = &[
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "Times New Roman",
    "Times",
    "FreeSerif",
];
const MONOSPACE_CANDIDATES: &[&str] = &[
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Noto Sans Mono",
    "Courier New",
    "Ubuntu Mono",
    "FreeMono",
];
const CURSIVE_CANDIDATES: &[&str] = &["Comic Sans MS", "Comic Neue", "URW Chancery L", "Z003"];
const FANTASY_CANDIDATES: &[&str] = &["Papyrus", "Impact", "URW Bookman", "URW Bookman L"];

/// Font database used to resolve catalog entries.
pub struct FontStore {
    db: fontdb::Database,
    generics: HashMap<GenericFamily, String>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for FontStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStore")
            .field("faces", &self.face_count())
            .field("generics", &self.generics)
            .finish()
    }
}

impl FontStore {
    /// Store with no faces loaded.
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
            generics: HashMap::new(),
        }
    }

    /// Store populated from the system font directories and, optionally, one extra directory.
    pub fn new(system_fonts: bool, fonts_dir: Option<&Path>) -> Self {
        let mut store = Self::empty();
        if system_fonts {
            store.db.load_system_fonts();
        }
        if let Some(dir) = fonts_dir {
            let loaded = store.load_dir(dir);
            tracing::debug!(dir = %dir.display(), loaded, "loaded fonts directory");
        }
        store.assign_generic_families();
        tracing::debug!(
            faces = store.face_count(),
            generics = ?store.generics,
            "font store ready"
        );
        store
    }

    /// Load every `.ttf`, `.otf` and `.ttc` file directly inside `dir`. Returns the file count.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let Ok(rd) = std::fs::read_dir(dir) else {
            tracing::warn!(dir = %dir.display(), "fonts directory is not readable");
            return 0;
        };

        let mut loaded = 0usize;
        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            match self.db.load_font_file(&path) {
                Ok(()) => loaded += 1,
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping font file"),
            }
        }
        if loaded > 0 {
            self.assign_generic_families();
        }
        loaded
    }

    /// Add in-memory font data.
    pub fn load_font_data(&mut self, bytes: Vec<u8>) {
        self.db.load_font_data(bytes);
        self.assign_generic_families();
    }

    /// Installed family the store uses for `generic`, if any face qualifies.
    pub fn generic_family(&self, generic: GenericFamily) -> Option<&str> {
        self.generics.get(&generic).map(String::as_str)
    }

    fn assign_generic_families(&mut self) {
        let mut families: Vec<(String, bool)> = self
            .db
            .faces()
            .filter_map(|face| {
                face.families
                    .first()
                    .map(|(name, _)| (name.clone(), face.monospaced))
            })
            .collect();
        families.sort();
        families.dedup();

        self.generics.clear();
        for generic in [
            GenericFamily::SansSerif,
            GenericFamily::Serif,
            GenericFamily::Monospace,
            GenericFamily::Cursive,
            GenericFamily::Fantasy,
        ] {
            let Some(name) = pick_generic_family(generic, &families) else {
                continue;
            };
            match generic {
                GenericFamily::SansSerif => self.db.set_sans_serif_family(name.clone()),
                GenericFamily::Serif => self.db.set_serif_family(name.clone()),
                GenericFamily::Monospace => self.db.set_monospace_family(name.clone()),
                GenericFamily::Cursive => self.db.set_cursive_family(name.clone()),
                GenericFamily::Fantasy => self.db.set_fantasy_family(name.clone()),
            }
            self.generics.insert(generic, name);
        }
    }

    /// Number of faces currently known.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve a catalog entry to face bytes.
    ///
    /// Query order: the named family, the entry's generic family, then sans-serif, serif and
    /// monospace. If none of those match, the first loaded face is used.
    pub fn resolve(&self, choice: &FontChoice) -> ArcBannerResult<ResolvedFont> {
        let families = [
            fontdb::Family::Name(choice.family),
            generic_to_fontdb(choice.generic),
            fontdb::Family::SansSerif,
            fontdb::Family::Serif,
            fontdb::Family::Monospace,
        ];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(choice.weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = self
            .db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))
            .ok_or_else(|| ArcBannerError::font("no fonts available"))?;

        let face = self
            .db
            .face(id)
            .ok_or_else(|| ArcBannerError::font("resolved face vanished from database"))?;
        let family_name = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| face.post_script_name.clone());
        let weight = face.weight.0;
        let italic = !matches!(face.style, fontdb::Style::Normal);
        let exact = face
            .families
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(choice.family));

        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| {
                ArcBannerError::font(format!("failed to read face data for '{family_name}'"))
            })?;

        Ok(ResolvedFont {
            family_name,
            bytes: Arc::new(bytes),
            index,
            exact,
            weight,
            italic,
        })
    }
}

/// Choose an installed family for `generic` from `(family, monospaced)` pairs.
///
/// Well-known families win; otherwise the family name decides. Cursive borrows the sans-serif
/// pick and fantasy the serif pick when nothing closer is installed.
fn pick_generic_family(generic: GenericFamily, families: &[(String, bool)]) -> Option<String> {
    let installed = |candidates: &[&str]| {
        candidates.iter().find_map(|want| {
            families
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(want))
                .map(|(name, _)| name.clone())
        })
    };
    let by_name = |accept: &dyn Fn(&str, bool) -> bool| {
        families
            .iter()
            .find(|(name, mono)| {
                let lower = name.to_ascii_lowercase();
                let decorative = ["math", "emoji", "symbol", "dingbat"]
                    .iter()
                    .any(|w| lower.contains(w));
                !decorative && accept(&lower, *mono)
            })
            .map(|(name, _)| name.clone())
    };
    let sans = |lower: &str, mono: bool| !mono && lower.contains("sans") && !lower.contains("mono");
    let serif = |lower: &str, mono: bool| !mono && lower.contains("serif") && !lower.contains("sans");
    let monospace = |lower: &str, mono: bool| mono || lower.contains("mono");

    match generic {
        GenericFamily::SansSerif => installed(SANS_SERIF_CANDIDATES).or_else(|| by_name(&sans)),
        GenericFamily::Serif => installed(SERIF_CANDIDATES).or_else(|| by_name(&serif)),
        GenericFamily::Monospace => {
            installed(MONOSPACE_CANDIDATES).or_else(|| by_name(&monospace))
        }
        GenericFamily::Cursive => installed(CURSIVE_CANDIDATES)
            .or_else(|| pick_generic_family(GenericFamily::SansSerif, families)),
        GenericFamily::Fantasy => installed(FANTASY_CANDIDATES)
            .or_else(|| pick_generic_family(GenericFamily::Serif, families)),
    }
}

fn generic_to_fontdb(generic: GenericFamily) -> fontdb::Family<'static> {
    match generic {
        GenericFamily::Serif => fontdb::Family::Serif,
        GenericFamily::SansSerif => fontdb::Family::SansSerif,
        GenericFamily::Monospace => fontdb::Family::Monospace,
        GenericFamily::Cursive => fontdb::Family::Cursive,
        GenericFamily::Fantasy => fontdb::Family::Fantasy,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
